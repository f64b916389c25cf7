use crate::maze::CellId;

/// Disjoint-set forest over cell indices, tracking connected-component
/// membership while the spanning tree is built.
///
/// Deliberately plain: `find` follows representative chains without path
/// compression, and `union_roots` repoints one root at the other without
/// rank or size bookkeeping. Chain depth is bounded by the cell count and the
/// forest only lives for the single generation pass.
pub(crate) struct DisjointSets {
    representative: Vec<CellId>,
}

impl DisjointSets {
    /// Every cell starts as its own representative.
    pub fn new(size: u32) -> Self {
        DisjointSets {
            representative: (0..size).collect(),
        }
    }

    /// Final representative of the component containing `cell`.
    pub fn find(&self, cell: CellId) -> CellId {
        let parent = self.representative[cell as usize];
        if parent == cell { cell } else { self.find(parent) }
    }

    /// Merges two components by repointing `root_a` at `root_b`.
    ///
    /// Both arguments must be distinct roots obtained from [`find`]; only a
    /// root is ever repointed, so the representative relation stays a forest
    /// and `find` keeps terminating.
    ///
    /// [`find`]: DisjointSets::find
    pub fn union_roots(&mut self, root_a: CellId, root_b: CellId) {
        debug_assert_ne!(root_a, root_b, "union of a component with itself");
        debug_assert_eq!(self.representative[root_a as usize], root_a);
        debug_assert_eq!(self.representative[root_b as usize], root_b);
        self.representative[root_a as usize] = root_b;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn singletons_are_their_own_representative() {
        let sets = DisjointSets::new(4);
        for cell in 0..4 {
            assert_eq!(sets.find(cell), cell);
        }
    }

    #[test]
    fn union_connects_and_find_resolves_chains() {
        let mut sets = DisjointSets::new(6);
        sets.union_roots(0, 1);
        sets.union_roots(2, 3);
        assert_eq!(sets.find(0), 1);
        assert_eq!(sets.find(2), 3);
        assert_ne!(sets.find(0), sets.find(2));

        // Merging the two components makes every member resolve to one root,
        // through multi-step chains
        let (a, b) = (sets.find(0), sets.find(2));
        sets.union_roots(a, b);
        assert_eq!(sets.find(0), 3);
        assert_eq!(sets.find(1), 3);
        assert_eq!(sets.find(2), 3);
        assert_eq!(sets.find(3), 3);
        assert_eq!(sets.find(4), 4);
    }

    #[test]
    fn find_does_not_compress_paths() {
        let mut sets = DisjointSets::new(3);
        sets.union_roots(0, 1);
        sets.union_roots(1, 2);
        assert_eq!(sets.find(0), 2);
        // The intermediate link is still in place afterwards
        assert_eq!(sets.representative[0], 1);
    }
}
