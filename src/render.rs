//! Terminal drawing of a maze and its solve progress. Consumes the engine's
//! outputs (cells, passable edges, visited order, solution path); no
//! algorithmic content lives here.

use std::collections::HashSet;
use std::fmt;
use std::io::Write;

use crossterm::style::{Color, Stylize};
use crossterm::{cursor, queue, style, terminal};

use crate::maze::{CellId, Maze};

/// What one glyph position on screen represents.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Tile {
    Wall,
    Open,
    Start,
    Goal,
    Visited,
    Route,
    Cursor,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    const TILE_WIDTH: u16 = 2;
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Start => "🟩".with(Color::Green),
            Tile::Goal => "🟥".with(Color::Red),
            Tile::Visited => "* ".with(Color::Blue),
            Tile::Route => "██".with(Color::Yellow),
            Tile::Cursor => "🟡".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::TILE_WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}

/// Overlay state for one frame: which cells to highlight on top of the bare
/// maze.
#[derive(Default)]
pub struct Overlay<'a> {
    pub visited: &'a [CellId],
    /// Solution path, any order; consecutive cells also light up the passage
    /// tile between them.
    pub route: &'a [CellId],
    /// Current position during a manual solve.
    pub cursor: Option<CellId>,
}

/// Draws the full maze frame at the top of the screen.
///
/// The maze is drawn as a glyph grid of (2w + 1) x (2h + 1) tiles: cells at
/// odd/odd positions, passage or wall tiles between them, wall posts at the
/// even/even intersections.
pub fn draw(
    out: &mut impl Write,
    maze: &Maze,
    start: CellId,
    goal: CellId,
    overlay: &Overlay,
) -> std::io::Result<()> {
    let visited: HashSet<CellId> = overlay.visited.iter().copied().collect();
    let route: HashSet<CellId> = overlay.route.iter().copied().collect();
    let route_hops: HashSet<(CellId, CellId)> = overlay
        .route
        .windows(2)
        .map(|w| if w[0] < w[1] { (w[0], w[1]) } else { (w[1], w[0]) })
        .collect();

    let width = maze.width() as u32;
    let cell_tile = |cell: CellId| -> Tile {
        if overlay.cursor == Some(cell) {
            Tile::Cursor
        } else if cell == start {
            Tile::Start
        } else if cell == goal {
            Tile::Goal
        } else if route.contains(&cell) {
            Tile::Route
        } else if visited.contains(&cell) {
            Tile::Visited
        } else {
            Tile::Open
        }
    };
    let passage_tile = |a: CellId, b: CellId| -> Tile {
        if !maze.has_passage(a, b) {
            Tile::Wall
        } else if route_hops.contains(&(a, b)) {
            Tile::Route
        } else {
            Tile::Open
        }
    };

    queue!(out, cursor::MoveTo(0, 0))?;
    for y in 0..(maze.height() as u32 * 2 + 1) {
        for x in 0..(width * 2 + 1) {
            let tile = match (x % 2 == 1, y % 2 == 1) {
                // Odd/odd: a cell
                (true, true) => cell_tile((y / 2) * width + x / 2),
                // Even column, odd row: wall or passage between side-by-side
                // cells, boundary walls included
                (false, true) => {
                    if x == 0 || x == width * 2 {
                        Tile::Wall
                    } else {
                        let right = (y / 2) * width + x / 2;
                        passage_tile(right - 1, right)
                    }
                }
                // Odd column, even row: wall or passage between stacked cells
                (true, false) => {
                    if y == 0 || y == maze.height() as u32 * 2 {
                        Tile::Wall
                    } else {
                        let below = (y / 2) * width + x / 2;
                        passage_tile(below - width, below)
                    }
                }
                // Even/even: a wall post
                (false, false) => Tile::Wall,
            };
            queue!(out, style::Print(tile))?;
        }
        queue!(out, style::Print("\r\n"))?;
    }
    out.flush()
}

/// Clears the screen and redraws one frame.
pub fn redraw(
    out: &mut impl Write,
    maze: &Maze,
    start: CellId,
    goal: CellId,
    overlay: &Overlay,
) -> std::io::Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    draw(out, maze, start, goal, overlay)
}
