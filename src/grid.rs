/// Site status bits. A component percolates when its root carries all three.
pub const CLOSED: u8 = 0b000;
pub const OPEN: u8 = 0b100;
pub const TOUCHES_TOP: u8 = 0b010;
pub const TOUCHES_BOTTOM: u8 = 0b001;
pub const PERCOLATES: u8 = OPEN | TOUCHES_TOP | TOUCHES_BOTTOM;

/// Flat status storage for an n-by-n site grid, 1-indexed on both axes.
/// Backing array has (n+1)^2 slots so `row * n + col` is a trivial bijection
/// for 1 <= row, col <= n; slot 0 and the rest of the padding stay CLOSED.
#[derive(Clone, Debug)]
pub struct SiteGrid {
    pub data: Vec<u8>,
    pub n: usize,
}

impl SiteGrid {
    pub fn new(n: usize) -> Self {
        Self {
            data: vec![CLOSED; (n + 1) * (n + 1)],
            n,
        }
    }

    #[inline]
    pub fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row >= 1 && row <= self.n && col >= 1 && col <= self.n);
        row * self.n + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.data[self.idx(row, col)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// In-bounds 4-connected neighbors of a 1-indexed site, in the fixed order
/// right, left, down, up. No wrapping on either axis.
pub fn neighbors4(row: usize, col: usize, n: usize) -> impl Iterator<Item = (usize, usize)> {
    let offsets: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
    let mut out = [(0usize, 0usize); 4];
    let mut count = 0;
    for (dr, dc) in offsets {
        let r = row as i64 + dr;
        let c = col as i64 + dc;
        if r >= 1 && r <= n as i64 && c >= 1 && c <= n as i64 {
            out[count] = (r as usize, c as usize);
            count += 1;
        }
    }
    out.into_iter().take(count)
}
