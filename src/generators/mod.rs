use rand::{SeedableRng, rngs::StdRng};

mod union_find;

use crate::maze::{Edge, GridTopology};
use union_find::DisjointSets;

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Kruskal's algorithm over a weight-sorted edge list.
///
/// One pass: an edge is kept iff its endpoints still resolve to different
/// representatives, then the two components are merged. Cycle-forming edges
/// are skipped, so the result is acyclic; the grid graph is connected, so the
/// pass ends with every cell in one component and exactly `cells - 1` edges
/// kept. The passable-edge set returned here *is* the maze.
pub(crate) fn span_kruskal(topology: &GridTopology, sorted_edges: &[Edge]) -> Vec<Edge> {
    let mut sets = DisjointSets::new(topology.cell_count());
    let mut tree: Vec<Edge> = Vec::with_capacity(topology.cell_count() as usize - 1);

    for edge in sorted_edges {
        let root_to = sets.find(edge.to);
        let root_from = sets.find(edge.from);
        if root_to != root_from {
            tree.push(*edge);
            sets.union_roots(root_to, root_from);
        }
    }

    tracing::debug!(
        "[kruskal] kept {} of {} edges for a {}x{} maze",
        tree.len(),
        sorted_edges.len(),
        topology.width(),
        topology.height()
    );
    debug_assert_eq!(tree.len() as u32, topology.cell_count() - 1);
    tree
}
