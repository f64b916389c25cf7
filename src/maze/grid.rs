use crate::error::MazeError;

/// Index of one grid position, row-major.
pub type CellId = u32;

/// A cardinal step between grid-adjacent cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Fixed enumeration order used everywhere neighbors are walked, so
    /// traversal order is reproducible for a given maze.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];
}

/// Row-major rectangular grid topology: dimensions plus the index math that
/// maps a linear cell index to its position and neighbors. Pure data, cheap
/// to copy, immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTopology {
    width: u16,
    height: u16,
}

impl GridTopology {
    pub fn new(width: u16, height: u16) -> Result<Self, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(GridTopology { width, height })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells in the grid.
    pub fn cell_count(&self) -> u32 {
        // Overflow-safe: u16 * u16 always fits in u32
        self.width as u32 * self.height as u32
    }

    /// All cell indices in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellId> {
        0..self.cell_count()
    }

    pub fn contains(&self, cell: CellId) -> bool {
        cell < self.cell_count()
    }

    /// Passing a cell index outside the grid anywhere in the engine is a
    /// contract violation, not a recoverable condition.
    pub(crate) fn assert_in_range(&self, cell: CellId) {
        assert!(
            self.contains(cell),
            "cell index {cell} is out of range for a {}x{} grid",
            self.width,
            self.height
        );
    }

    /// Row of the cell, counted from the top.
    pub fn row(&self, cell: CellId) -> u16 {
        self.assert_in_range(cell);
        (cell / self.width as u32) as u16
    }

    /// Column of the cell, counted from the left.
    pub fn column(&self, cell: CellId) -> u16 {
        self.assert_in_range(cell);
        (cell % self.width as u32) as u16
    }

    /// The grid-adjacent cell one step in `direction`, or `None` at the
    /// corresponding border.
    pub fn neighbor(&self, cell: CellId, direction: Direction) -> Option<CellId> {
        self.assert_in_range(cell);
        let width = self.width as u32;
        match direction {
            Direction::Left => (cell % width > 0).then(|| cell - 1),
            Direction::Right => (cell % width < width - 1).then(|| cell + 1),
            Direction::Up => (cell >= width).then(|| cell - width),
            Direction::Down => (cell + width < self.cell_count()).then(|| cell + width),
        }
    }

    /// The up-to-4 grid-adjacent neighbors of a cell, in [`Direction::ALL`]
    /// order.
    pub fn neighbors(&self, cell: CellId) -> impl Iterator<Item = CellId> {
        let topology = *self;
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| topology.neighbor(cell, direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_dimensions() {
        assert_eq!(
            GridTopology::new(1, 5),
            Err(MazeError::InvalidDimensions { width: 1, height: 5 })
        );
        assert_eq!(
            GridTopology::new(4, 0),
            Err(MazeError::InvalidDimensions { width: 4, height: 0 })
        );
        assert!(GridTopology::new(2, 2).is_ok());
    }

    #[test]
    fn row_and_column_are_row_major() {
        let topology = GridTopology::new(4, 3).unwrap();
        assert_eq!(topology.row(0), 0);
        assert_eq!(topology.column(0), 0);
        assert_eq!(topology.row(5), 1);
        assert_eq!(topology.column(5), 1);
        assert_eq!(topology.row(11), 2);
        assert_eq!(topology.column(11), 3);
    }

    #[test]
    fn corner_and_interior_neighbors() {
        let topology = GridTopology::new(3, 3).unwrap();
        // Top-left corner: only right and down
        assert_eq!(topology.neighbors(0).collect::<Vec<_>>(), vec![1, 3]);
        // Bottom-right corner: only left and up
        assert_eq!(topology.neighbors(8).collect::<Vec<_>>(), vec![7, 5]);
        // Center: all four, in left, right, up, down order
        assert_eq!(topology.neighbors(4).collect::<Vec<_>>(), vec![3, 5, 1, 7]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_index_is_a_contract_violation() {
        let topology = GridTopology::new(2, 2).unwrap();
        topology.row(4);
    }
}
