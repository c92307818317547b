/// Array-backed weighted quick-union over flat site indices. Parent pointers
/// are u32 slots, union by size, path halving in the mutating find. Near
/// constant amortized cost per operation, which matters because one trial can
/// issue up to 4 * n^2 unions.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<u32>,
    size: Vec<u32>,
}

impl UnionFind {
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len as u32).collect(),
            size: vec![1; len],
        }
    }

    /// Root of `i`, halving the path along the way.
    pub fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] as usize != i {
            self.parent[i] = self.parent[self.parent[i] as usize];
            i = self.parent[i] as usize;
        }
        i
    }

    /// Root of `i` without mutating the forest. Read-only queries (is_full,
    /// rendering) use this so they can take `&self`.
    pub fn root(&self, mut i: usize) -> usize {
        while self.parent[i] as usize != i {
            i = self.parent[i] as usize;
        }
        i
    }

    /// Merge the components of `a` and `b`; smaller tree goes under larger.
    pub fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return;
        }
        if self.size[ra] < self.size[rb] {
            self.parent[ra] = rb as u32;
            self.size[rb] += self.size[ra];
        } else {
            self.parent[rb] = ra as u32;
            self.size[ra] += self.size[rb];
        }
    }
}
