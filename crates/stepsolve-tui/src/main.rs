mod app;
mod headless;
mod render;
mod theme;

use anyhow::Context;
use app::{App, AppAction};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::time::Duration;
use stepsolve_core::{Board, Session};

/// Built-in demo puzzle (0 = empty).
const DEMO_PUZZLE: [[u8; 9]; 9] = [
    [7, 8, 0, 4, 0, 0, 1, 2, 0],
    [6, 0, 0, 0, 7, 5, 0, 0, 9],
    [0, 0, 0, 6, 0, 1, 0, 7, 8],
    [0, 0, 7, 0, 4, 0, 2, 6, 0],
    [0, 0, 1, 0, 5, 0, 9, 3, 0],
    [9, 0, 4, 0, 6, 0, 0, 0, 5],
    [0, 7, 0, 3, 0, 0, 0, 1, 2],
    [1, 2, 0, 0, 0, 7, 4, 0, 0],
    [0, 4, 9, 2, 0, 6, 0, 0, 7],
];

#[derive(Parser)]
#[command(
    name = "stepsolve",
    about = "Watch a backtracking solver work through a Sudoku"
)]
struct Args {
    /// Puzzle as 81 characters, row-major, `0` or `.` for empty cells
    puzzle: Option<String>,
    /// Pause between animation steps, in milliseconds
    #[arg(long, default_value_t = 50)]
    delay_ms: u64,
    /// Stream solve events as JSON lines instead of drawing a UI
    #[arg(long)]
    headless: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = match &args.puzzle {
        Some(s) => Board::from_string(s).context("invalid puzzle argument")?,
        None => Board::from_rows(DEMO_PUZZLE).expect("demo puzzle is well-formed"),
    };
    let session = Session::new(board);

    if args.headless {
        return headless::run(session);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, crossterm::cursor::Hide)?;

    let app = App::new(session, Duration::from_millis(args.delay_ms));
    let result = run_app(&mut stdout, app);

    // Restore terminal
    execute!(stdout, crossterm::cursor::Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result.map_err(Into::into)
}

fn run_app(stdout: &mut io::Stdout, mut app: App) -> io::Result<()> {
    loop {
        render::render(stdout, &app)?;

        if let Event::Key(key) = event::read()? {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app.handle_key(key, stdout)? {
                AppAction::Continue => {}
                AppAction::Quit => break,
            }
        }
    }

    Ok(())
}
