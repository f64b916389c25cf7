use crate::error::Rejected;
use crate::maze::{CellId, Direction, Maze};
use crate::solvers::{TraceEntry, reconstruct_path};

/// One manual-solve session over a maze.
///
/// Owns the cursor position, the visited list, and the discovery trace for a
/// single attempt; dropping the session and starting a new one is the reset
/// boundary between attempts. The trace has the same shape a search produces,
/// so the same reconstruction serves both.
pub struct ManualSolve<'a> {
    maze: &'a Maze,
    start: CellId,
    goal: CellId,
    current: CellId,
    visited: Vec<CellId>,
    trace: Vec<TraceEntry>,
}

impl<'a> ManualSolve<'a> {
    pub fn new(maze: &'a Maze, start: CellId, goal: CellId) -> Self {
        maze.topology().assert_in_range(start);
        maze.topology().assert_in_range(goal);
        ManualSolve {
            maze,
            start,
            goal,
            current: start,
            visited: vec![start],
            trace: Vec::new(),
        }
    }

    pub fn current(&self) -> CellId {
        self.current
    }

    pub fn start(&self) -> CellId {
        self.start
    }

    pub fn goal(&self) -> CellId {
        self.goal
    }

    /// Cells stepped onto so far, in order, repeats included.
    pub fn visited(&self) -> &[CellId] {
        &self.visited
    }

    pub fn trace(&self) -> &[TraceEntry] {
        &self.trace
    }

    pub fn goal_reached(&self) -> bool {
        self.current == self.goal
    }

    /// Attempts one step in `direction`.
    ///
    /// Rejected at the grid border or when the wall in that direction is
    /// still up; the cursor, visited list, and trace are left unchanged.
    pub fn step(&mut self, direction: Direction) -> Result<CellId, Rejected> {
        let next = self
            .maze
            .topology()
            .neighbor(self.current, direction)
            .ok_or(Rejected)?;
        self.step_to(next)
    }

    /// Attempts to step onto `next` directly. Rejects any cell that is not
    /// grid-adjacent to the cursor or not connected to it by a passable
    /// edge.
    pub fn step_to(&mut self, next: CellId) -> Result<CellId, Rejected> {
        self.maze.topology().assert_in_range(next);
        if !self.maze.has_passage(self.current, next) {
            tracing::debug!("[game] rejected step from {} to {next}", self.current);
            return Err(Rejected);
        }
        self.trace.push((self.current, next));
        self.visited.push(next);
        self.current = next;
        Ok(next)
    }

    /// The start-to-goal path this session recorded, goal-first. `None`
    /// until the cursor stands on the goal.
    pub fn solution(&self) -> Option<Vec<CellId>> {
        self.goal_reached()
            .then(|| reconstruct_path(&self.trace, self.start, self.goal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::WeightMode;

    fn sequential_2x2() -> Maze {
        // Spanning tree {(0,1), (0,2), (1,3)}; wall between 2 and 3
        Maze::build(2, 2, WeightMode::Sequential, None).unwrap()
    }

    #[test]
    fn walks_open_passages_to_the_goal() {
        let maze = sequential_2x2();
        let mut session = ManualSolve::new(&maze, 0, 3);
        assert_eq!(session.step(Direction::Right), Ok(1));
        assert_eq!(session.step(Direction::Down), Ok(3));
        assert!(session.goal_reached());
        assert_eq!(session.visited(), &[0, 1, 3]);
        assert_eq!(session.solution(), Some(vec![3, 1, 0]));
    }

    #[test]
    fn rejects_walls_and_borders_without_state_change() {
        let maze = sequential_2x2();
        let mut session = ManualSolve::new(&maze, 2, 3);
        // Wall between 2 and 3
        assert_eq!(session.step(Direction::Right), Err(Rejected));
        // Grid border
        assert_eq!(session.step(Direction::Down), Err(Rejected));
        assert_eq!(session.current(), 2);
        assert_eq!(session.visited(), &[2]);
        assert!(session.trace().is_empty());
    }

    #[test]
    fn rejects_non_adjacent_cells() {
        let maze = sequential_2x2();
        let mut session = ManualSolve::new(&maze, 0, 3);
        assert_eq!(session.step_to(3), Err(Rejected));
        assert_eq!(session.current(), 0);
        assert!(session.trace().is_empty());
    }

    #[test]
    fn backtracking_still_reconstructs_the_simple_path() {
        let maze = sequential_2x2();
        let mut session = ManualSolve::new(&maze, 0, 3);
        // Wander: 0 -> 2, back to 0, then the real route
        session.step(Direction::Down).unwrap();
        session.step(Direction::Up).unwrap();
        session.step(Direction::Right).unwrap();
        session.step(Direction::Down).unwrap();
        assert_eq!(session.solution(), Some(vec![3, 1, 0]));
    }

    #[test]
    fn no_solution_before_the_goal() {
        let maze = sequential_2x2();
        let mut session = ManualSolve::new(&maze, 0, 3);
        assert_eq!(session.solution(), None);
        session.step(Direction::Right).unwrap();
        assert_eq!(session.solution(), None);
    }

    #[test]
    fn start_on_goal_is_solved_immediately() {
        let maze = sequential_2x2();
        let session = ManualSolve::new(&maze, 3, 3);
        assert!(session.goal_reached());
        assert_eq!(session.solution(), Some(vec![3]));
    }
}
