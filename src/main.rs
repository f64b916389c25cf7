use std::io::{Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal;

use mazeway::render::{self, Overlay};
use mazeway::{
    CellId, Direction, ManualSolve, Maze, Search, SearchStep, Solver, WeightMode, reconstruct_path,
};

fn main() -> std::io::Result<()> {
    // The terminal belongs to the maze; logs go to a file instead
    let file_appender = tracing_appender::rolling::never(".", "mazeway.log");
    let (writer, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut input = String::new();
    println!("Enter maze dimensions (width height). Minimum size is 2x2:");
    std::io::stdin().read_line(&mut input)?;

    let dims = input
        .split_whitespace()
        .take(2)
        .filter_map(|s| s.parse::<u16>().ok())
        .collect::<Vec<_>>();
    if dims.len() != 2 {
        eprintln!("Please enter two valid numbers for width and height.");
        return Ok(());
    }

    let maze = match Maze::build(dims[0], dims[1], WeightMode::Random, None) {
        Ok(maze) => maze,
        Err(err) => {
            eprintln!("{err}");
            return Ok(());
        }
    };
    let start = 0;
    let goal = maze.cell_count() - 1;

    println!("Select how to solve the maze:");
    println!("1. {}", Solver::Dfs);
    println!("2. {}", Solver::Bfs);
    println!("3. Manually (arrow keys; Esc gives up)");
    input.clear();
    std::io::stdin().read_line(&mut input)?;
    match input.trim() {
        "1" => animate_solve(&maze, start, goal, Solver::Dfs),
        "2" => animate_solve(&maze, start, goal, Solver::Bfs),
        "3" => manual_solve(&maze, start, goal),
        _ => {
            eprintln!("Invalid selection.");
            Ok(())
        }
    }
}

/// Runs the chosen search one step per frame, then reveals the reconstructed
/// path.
fn animate_solve(maze: &Maze, start: CellId, goal: CellId, solver: Solver) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    let mut search = Search::new(maze, start, goal, solver.discipline());
    let mut visited: Vec<CellId> = Vec::new();

    while !search.is_done() {
        if let SearchStep::Visited(cell) = search.step() {
            visited.push(cell);
            let overlay = Overlay {
                visited: &visited,
                ..Default::default()
            };
            render::redraw(&mut stdout, maze, start, goal, &overlay)?;
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    let traversal = search.run();
    let route = reconstruct_path(&traversal.trace, start, goal);
    let overlay = Overlay {
        visited: &traversal.visited,
        route: &route,
        cursor: None,
    };
    render::redraw(&mut stdout, maze, start, goal, &overlay)?;
    println!(
        "Maze solved with {} after visiting {} cells; the path is {} cells long.",
        solver,
        traversal.visited.len(),
        route.len()
    );
    Ok(())
}

/// Lets the user walk the maze with arrow keys; on reaching the goal, shows
/// the path their own steps traced.
fn manual_solve(maze: &Maze, start: CellId, goal: CellId) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    let mut session = ManualSolve::new(maze, start, goal);

    terminal::enable_raw_mode()?;
    let outcome = manual_loop(&mut stdout, maze, &mut session);
    terminal::disable_raw_mode()?;
    outcome?;

    match session.solution() {
        Some(route) => {
            let overlay = Overlay {
                visited: session.visited(),
                route: &route,
                cursor: None,
            };
            render::redraw(&mut stdout, maze, start, goal, &overlay)?;
            println!("You solved it! Your path is {} cells long.", route.len());
        }
        None => println!("Maze abandoned."),
    }
    Ok(())
}

fn manual_loop(
    stdout: &mut Stdout,
    maze: &Maze,
    session: &mut ManualSolve,
) -> std::io::Result<()> {
    loop {
        let overlay = Overlay {
            visited: session.visited(),
            route: &[],
            cursor: Some(session.current()),
        };
        render::redraw(stdout, maze, session.start(), session.goal(), &overlay)?;
        stdout.flush()?;
        if session.goal_reached() {
            return Ok(());
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let direction = match key.code {
                KeyCode::Up => Direction::Up,
                KeyCode::Down => Direction::Down,
                KeyCode::Left => Direction::Left,
                KeyCode::Right => Direction::Right,
                KeyCode::Esc => return Ok(()),
                _ => continue,
            };
            // A rejected step is a no-op; just keep reading keys
            let _ = session.step(direction);
        }
    }
}
