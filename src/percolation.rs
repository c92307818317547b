use crate::error::InvalidArgument;
use crate::grid::{self, SiteGrid, OPEN, PERCOLATES, TOUCHES_BOTTOM, TOUCHES_TOP};
use crate::unionfind::UnionFind;

/// Incremental connectivity model for one n-by-n percolation system.
///
/// Top and bottom reachability are tracked as independent status bits stored
/// at each component's union-find root, not through virtual boundary sites.
/// A virtual bottom site wired to all of row n would let a percolating path
/// leak top-connectivity onto bottom-only components ("backwash"); with
/// per-root bits, `is_full` answers from TOUCHES_TOP alone and bottom-only
/// components stay not-full forever.
pub struct Percolation {
    n: usize,
    grid: SiteGrid,
    uf: UnionFind,
    open_sites: usize,
    percolated: bool,
}

impl Percolation {
    /// Creates an n-by-n grid with all sites blocked. Fails for n = 0.
    pub fn new(n: usize) -> Result<Self, InvalidArgument> {
        if n == 0 {
            return Err(InvalidArgument::new("grid size must be greater than 0"));
        }
        let grid = SiteGrid::new(n);
        let uf = UnionFind::new(grid.len());
        Ok(Self {
            n,
            grid,
            uf,
            open_sites: 0,
            percolated: false,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), InvalidArgument> {
        if row < 1 || row > self.n || col < 1 || col > self.n {
            return Err(InvalidArgument::new(format!(
                "site ({row}, {col}) out of bounds for n = {}",
                self.n
            )));
        }
        Ok(())
    }

    /// Opens the site (row, col) if it is not open already. Re-opening is a
    /// no-op and does not touch the open counter.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), InvalidArgument> {
        self.check_bounds(row, col)?;
        let here = self.grid.idx(row, col);
        if self.grid.data[here] & OPEN != 0 {
            return Ok(());
        }

        // Seed status from the site's own boundary contacts. For n = 1 both
        // branches fire and the single site percolates on its own.
        let mut status = OPEN;
        if row == 1 {
            status |= TOUCHES_TOP;
        }
        if row == self.n {
            status |= TOUCHES_BOTTOM;
        }

        // Fold each open neighbor's root status into the accumulator before
        // merging; the new root written below sees the union of everything.
        for (nr, nc) in grid::neighbors4(row, col, self.n) {
            let ni = self.grid.idx(nr, nc);
            if self.grid.data[ni] & OPEN != 0 {
                let nroot = self.uf.find(ni);
                status |= self.grid.data[nroot];
                self.uf.union(here, ni);
            }
        }

        let root = self.uf.find(here);
        self.grid.data[root] = status;
        self.grid.data[here] = status;

        // Latched once true; never re-derived at query time.
        if status & PERCOLATES == PERCOLATES {
            self.percolated = true;
        }
        self.open_sites += 1;
        Ok(())
    }

    /// Is the site open? O(1), independent of the union-find forest.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, InvalidArgument> {
        self.check_bounds(row, col)?;
        Ok(self.grid.get(row, col) & OPEN != 0)
    }

    /// Is the site connected to the top row through open sites? A closed site
    /// is its own zero-status root, so it is never full.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, InvalidArgument> {
        self.check_bounds(row, col)?;
        let root = self.uf.root(self.grid.idx(row, col));
        Ok(self.grid.data[root] & TOUCHES_TOP != 0)
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// O(1) read of the latched percolation flag.
    pub fn percolates(&self) -> bool {
        self.percolated
    }
}
