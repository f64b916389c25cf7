//! Perfect-maze generation and solving over a rectangular grid.
//!
//! A maze is built by randomized Kruskal: every grid-adjacent cell pair gets
//! a weighted candidate edge, and a union-find pass over the weight-sorted
//! list selects the spanning tree of passable edges. Solving is one traversal
//! loop parameterized by worklist discipline (FIFO for BFS, LIFO for DFS),
//! with path reconstruction from the recorded parent-trace. Manual solving
//! shares the same trace and reconstruction machinery.

pub mod error;
pub mod game;
mod generators;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::{MazeError, Rejected};
pub use game::ManualSolve;
pub use maze::{CellId, Direction, Edge, GridTopology, Maze, Orientation, WeightMode};
pub use solvers::{Discipline, Search, SearchStep, Solver, Traversal, reconstruct_path, traverse};
