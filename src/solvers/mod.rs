mod path;
mod worklist;

use std::collections::HashSet;

use crate::maze::{CellId, Maze};

pub use path::reconstruct_path;
pub use worklist::Discipline;
use worklist::Worklist;

/// One (parent, child) discovery record, appended when `parent` pushes
/// `child` onto the worklist.
pub type TraceEntry = (CellId, CellId);

/// Which search drives the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl Solver {
    pub fn discipline(self) -> Discipline {
        match self {
            Solver::Dfs => Discipline::Lifo,
            Solver::Bfs => Discipline::Fifo,
        }
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

/// The result of a completed search.
pub struct Traversal {
    /// Cells in visitation order; always ends with the goal.
    pub visited: Vec<CellId>,
    /// Discovery records in append order, consumed by [`reconstruct_path`].
    pub trace: Vec<TraceEntry>,
}

/// What one [`Search::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// A cell came off the worklist and was processed for the first time.
    Visited(CellId),
    /// The popped cell had already been processed; nothing changed.
    Skipped(CellId),
    /// The search already finished; the worklist is empty.
    Done,
}

/// An in-flight search over a maze's spanning tree.
///
/// One worklist pop per [`step`] call, so an outer animation loop can pace
/// visitation; [`run`] drives the remaining steps to completion. The search
/// owns its visited set and trace for its whole lifetime and hands them over
/// as a [`Traversal`].
///
/// Because the spanning tree connects every cell, the goal is always reached,
/// in at most `cells` effective steps.
///
/// [`step`]: Search::step
/// [`run`]: Search::run
pub struct Search<'a> {
    maze: &'a Maze,
    goal: CellId,
    worklist: Worklist,
    seen: HashSet<CellId>,
    visited: Vec<CellId>,
    trace: Vec<TraceEntry>,
    done: bool,
}

impl<'a> Search<'a> {
    /// Starts a search; the start cell is the only pending work.
    pub fn new(maze: &'a Maze, start: CellId, goal: CellId, discipline: Discipline) -> Self {
        maze.topology().assert_in_range(start);
        maze.topology().assert_in_range(goal);
        let mut worklist = Worklist::new(discipline);
        worklist.add(start);
        Search {
            maze,
            goal,
            worklist,
            seen: HashSet::new(),
            visited: Vec::new(),
            trace: Vec::new(),
            done: false,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Pops one cell off the worklist and processes it.
    ///
    /// Reaching the goal marks it visited and clears the remaining pending
    /// work. Visiting any other cell pushes every neighbor behind a passable
    /// edge and traces the `(current, neighbor)` hop, even when the neighbor
    /// was already visited; reconstruction resolves such duplicates.
    pub fn step(&mut self) -> SearchStep {
        if self.done {
            return SearchStep::Done;
        }
        let Some(next) = self.worklist.remove() else {
            // Unreachable for a well-formed spanning tree
            self.done = true;
            return SearchStep::Done;
        };

        if next == self.goal {
            self.seen.insert(next);
            self.visited.push(next);
            self.worklist.clear();
            self.done = true;
            tracing::debug!("[search] goal {next} reached after {} visits", self.visited.len());
            SearchStep::Visited(next)
        } else if self.seen.contains(&next) {
            SearchStep::Skipped(next)
        } else {
            self.seen.insert(next);
            self.visited.push(next);
            let maze = self.maze;
            for neighbor in maze.open_neighbors(next) {
                self.worklist.add(neighbor);
                self.trace.push((next, neighbor));
            }
            SearchStep::Visited(next)
        }
    }

    /// Drives the search to completion.
    pub fn run(mut self) -> Traversal {
        while !self.done {
            self.step();
        }
        Traversal {
            visited: self.visited,
            trace: self.trace,
        }
    }
}

/// Runs a full search from `start` to `goal` under the given worklist
/// discipline.
pub fn traverse(maze: &Maze, start: CellId, goal: CellId, discipline: Discipline) -> Traversal {
    Search::new(maze, start, goal, discipline).run()
}
