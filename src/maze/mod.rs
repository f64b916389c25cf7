pub mod edge;
pub mod grid;

use std::collections::HashSet;

pub use edge::{Edge, Orientation, WeightMode};
pub use grid::{CellId, Direction, GridTopology};

use crate::error::MazeError;
use crate::generators;

/// A generated perfect maze over a rectangular grid.
///
/// Owns the topology, the full weight-sorted candidate edge list, and the
/// spanning tree of knocked-down walls. All three are immutable once built;
/// solving never touches them, so any number of searches and sessions can
/// borrow one maze.
#[derive(Debug, Clone)]
pub struct Maze {
    topology: GridTopology,
    /// Every grid-adjacent candidate edge, sorted by ascending weight.
    edges: Vec<Edge>,
    /// The selected passable edges; exactly `cells - 1` of them.
    spanning_tree: Vec<Edge>,
    /// Canonical endpoint pairs of the spanning tree, for O(1) passage checks.
    passages: HashSet<(CellId, CellId)>,
}

impl Maze {
    /// Generates a maze: builds the weighted edge set for the grid and runs
    /// spanning-tree selection over it.
    ///
    /// `seed` pins the RNG for reproducible mazes; `None` draws from OS
    /// entropy. With [`WeightMode::Sequential`] the weights themselves are
    /// deterministic and the seed is irrelevant.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] when either dimension is
    /// below 2.
    pub fn build(
        width: u16,
        height: u16,
        mode: WeightMode,
        seed: Option<u64>,
    ) -> Result<Self, MazeError> {
        let topology = GridTopology::new(width, height)?;
        let mut rng = generators::get_rng(seed);
        let edges = edge::collect_edges(&topology, mode, &mut rng);
        let spanning_tree = generators::span_kruskal(&topology, &edges);
        let passages = spanning_tree.iter().map(Edge::pair).collect();
        tracing::debug!(
            "[maze] built {width}x{height} maze: {} candidate edges, {} passages",
            edges.len(),
            spanning_tree.len()
        );
        Ok(Maze {
            topology,
            edges,
            spanning_tree,
            passages,
        })
    }

    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    pub fn width(&self) -> u16 {
        self.topology.width()
    }

    pub fn height(&self) -> u16 {
        self.topology.height()
    }

    pub fn cell_count(&self) -> u32 {
        self.topology.cell_count()
    }

    /// All cell indices in row-major order, for renderers.
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        self.topology.cells()
    }

    /// Every candidate edge, sorted by ascending weight.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The passable edges of the maze, in selection order.
    pub fn spanning_tree(&self) -> &[Edge] {
        &self.spanning_tree
    }

    /// Whether the wall between two cells is down. False for any pair that is
    /// not grid-adjacent, including a cell and itself.
    pub fn has_passage(&self, a: CellId, b: CellId) -> bool {
        self.topology.assert_in_range(a);
        self.topology.assert_in_range(b);
        let pair = if a < b { (a, b) } else { (b, a) };
        self.passages.contains(&pair)
    }

    /// Neighbors of `cell` reachable through a passable edge, in the fixed
    /// left, right, up, down enumeration order.
    pub fn open_neighbors(&self, cell: CellId) -> impl Iterator<Item = CellId> {
        self.topology
            .neighbors(cell)
            .filter(move |&neighbor| self.has_passage(cell, neighbor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_small_grids() {
        let err = Maze::build(1, 8, WeightMode::Random, None).unwrap_err();
        assert_eq!(err, MazeError::InvalidDimensions { width: 1, height: 8 });
    }

    #[test]
    fn passages_match_the_spanning_tree() {
        let maze = Maze::build(2, 2, WeightMode::Sequential, None).unwrap();
        assert!(maze.has_passage(0, 1));
        assert!(maze.has_passage(1, 0));
        assert!(maze.has_passage(0, 2));
        assert!(maze.has_passage(1, 3));
        // The cycle-closing edge stayed a wall
        assert!(!maze.has_passage(2, 3));
        // Not grid-adjacent
        assert!(!maze.has_passage(0, 3));
        assert!(!maze.has_passage(2, 2));
    }

    #[test]
    fn open_neighbors_follow_enumeration_order() {
        let maze = Maze::build(2, 2, WeightMode::Sequential, None).unwrap();
        assert_eq!(maze.open_neighbors(0).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(maze.open_neighbors(3).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn same_seed_same_maze() {
        let a = Maze::build(6, 5, WeightMode::Random, Some(99)).unwrap();
        let b = Maze::build(6, 5, WeightMode::Random, Some(99)).unwrap();
        assert_eq!(a.spanning_tree(), b.spanning_tree());
    }
}
