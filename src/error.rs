use thiserror::Error;

/// Failures surfaced by maze construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    /// Grids smaller than 2x2 cannot host a maze.
    #[error("maze must be at least 2x2, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
}

/// A manual step that does not cross an open passage. The session it was
/// attempted on is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no open passage in that direction")]
pub struct Rejected;
