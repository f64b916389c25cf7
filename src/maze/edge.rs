use rand::Rng;

use super::grid::{CellId, GridTopology};

/// Whether an edge joins two cells side by side (same row) or stacked (same
/// column). Only the renderer cares; selection and traversal ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A candidate wall between two grid-adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The smaller index of the pair: the left or top cell.
    pub from: CellId,
    /// The larger index of the pair: the right or bottom cell.
    pub to: CellId,
    /// Ordering key for spanning-tree selection.
    pub weight: u64,
    pub orientation: Orientation,
}

impl Edge {
    /// Canonical unordered key for this edge's endpoints.
    pub fn pair(&self) -> (CellId, CellId) {
        (self.from, self.to)
    }
}

/// How candidate edges are weighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightMode {
    /// Uniform random integer in `[0, 2 * width * height)` per edge.
    Random,
    /// Weight equals creation order, for reproducible mazes in tests.
    Sequential,
}

/// Builds every grid-adjacent edge exactly once and returns them sorted by
/// ascending weight.
///
/// Cells are walked in index order; each emits an edge to its right neighbor,
/// then to the neighbor below. That covers the full undirected adjacency with
/// no duplicates, keeps `from` the smaller index by construction, and the
/// stable sort keeps ties in creation order.
pub(crate) fn collect_edges<R: Rng>(
    topology: &GridTopology,
    mode: WeightMode,
    rng: &mut R,
) -> Vec<Edge> {
    let width = topology.width() as u32;
    let height = topology.height() as u32;
    let weight_bound = 2 * topology.cell_count() as u64;
    let mut edges = Vec::with_capacity((2 * width * height - width - height) as usize);

    for cell in topology.cells() {
        if cell % width < width - 1 {
            let weight = next_weight(mode, weight_bound, edges.len(), rng);
            edges.push(Edge {
                from: cell,
                to: cell + 1,
                weight,
                orientation: Orientation::Horizontal,
            });
        }
        if cell + width < topology.cell_count() {
            let weight = next_weight(mode, weight_bound, edges.len(), rng);
            edges.push(Edge {
                from: cell,
                to: cell + width,
                weight,
                orientation: Orientation::Vertical,
            });
        }
    }

    edges.sort_by_key(|edge| edge.weight);
    edges
}

fn next_weight<R: Rng>(mode: WeightMode, bound: u64, created: usize, rng: &mut R) -> u64 {
    match mode {
        WeightMode::Random => rng.random_range(0..bound),
        WeightMode::Sequential => created as u64,
    }
}
