use crate::app::{App, Status};
use crate::theme::Theme;
use crossterm::{
    cursor::MoveTo,
    execute,
    style::{Attribute, Print, SetAttribute, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use stepsolve_core::{Board, Position, SolveEvent};

// Each cell is 3 chars wide plus a separator column, so 9 * 4 + 1.
const GRID_WIDTH: u16 = 37;
// 9 cell rows interleaved with separator lines, plus top and bottom.
const GRID_HEIGHT: u16 = 19;

const THICK_SEP: &str = "+===+===+===+===+===+===+===+===+===+";
const THIN_SEP: &str = "+---+---+---+---+---+---+---+---+---+";

/// Top-left corner for the grid, centered when the terminal allows it.
fn grid_origin() -> io::Result<(u16, u16)> {
    let (term_width, term_height) = terminal::size()?;
    let x = if term_width > GRID_WIDTH {
        (term_width - GRID_WIDTH) / 2
    } else {
        0
    };
    let y = if term_height > GRID_HEIGHT + 5 { 2 } else { 0 };
    Ok((x, y))
}

/// Full frame between solves: grid, status line, key hints.
pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (x, y) = grid_origin()?;
    execute!(stdout, Clear(ClearType::All))?;

    render_title(stdout, &app.theme, x, y.saturating_sub(2))?;
    render_grid(stdout, &app.theme, app.session.board(), app.last_event, x, y)?;

    let status = match app.status {
        Status::Ready => "Press s to watch the solver work",
        Status::Solved => "Solved",
        Status::Unsolvable => "No solution exists for this puzzle",
        Status::Aborted => "Solve cancelled",
        Status::Cleared => "Board restored to the original puzzle",
    };
    render_line(stdout, &app.theme, status, x, y + GRID_HEIGHT + 1)?;
    render_line(
        stdout,
        &app.theme,
        "s: solve   c: clear   q: quit",
        x,
        y + GRID_HEIGHT + 3,
    )?;
    Ok(())
}

/// Frame drawn for every solver event during animation.
pub fn render_step(
    stdout: &mut io::Stdout,
    theme: &Theme,
    board: &Board,
    event: SolveEvent,
) -> io::Result<()> {
    let (x, y) = grid_origin()?;
    execute!(stdout, Clear(ClearType::All))?;

    render_title(stdout, theme, x, y.saturating_sub(2))?;
    render_grid(stdout, theme, board, Some(event), x, y)?;
    render_line(
        stdout,
        theme,
        "Solving...   q: cancel",
        x,
        y + GRID_HEIGHT + 1,
    )?;
    Ok(())
}

fn render_title(stdout: &mut io::Stdout, theme: &Theme, x: u16, y: u16) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.given),
        SetAttribute(Attribute::Bold),
        Print("stepsolve"),
        SetAttribute(Attribute::Reset),
    )
}

fn render_line(
    stdout: &mut io::Stdout,
    theme: &Theme,
    text: &str,
    x: u16,
    y: u16,
) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.text),
        Print(text)
    )
}

fn render_grid(
    stdout: &mut io::Stdout,
    theme: &Theme,
    board: &Board,
    last_event: Option<SolveEvent>,
    x: u16,
    y: u16,
) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.box_border),
        Print(THICK_SEP)
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            // Thick borders at 3×3 boundaries
            if col % 3 == 0 {
                execute!(stdout, SetForegroundColor(theme.box_border), Print("║"))?;
            } else {
                execute!(stdout, SetForegroundColor(theme.border), Print("│"))?;
            }
            render_cell(stdout, theme, board, Position::new(row, col), last_event)?;
        }
        execute!(stdout, SetForegroundColor(theme.box_border), Print("║"))?;

        let sep = if (row + 1) % 3 == 0 { THICK_SEP } else { THIN_SEP };
        let sep_color = if (row + 1) % 3 == 0 {
            theme.box_border
        } else {
            theme.border
        };
        execute!(
            stdout,
            MoveTo(x, cell_y + 1),
            SetForegroundColor(sep_color),
            Print(sep)
        )?;
    }
    Ok(())
}

fn render_cell(
    stdout: &mut io::Stdout,
    theme: &Theme,
    board: &Board,
    pos: Position,
    last_event: Option<SolveEvent>,
) -> io::Result<()> {
    let value = board.get(pos);

    // Flash the cell the search just touched
    let color = match last_event {
        Some(SolveEvent::Place { pos: p, .. }) if p == pos => theme.place_flash,
        Some(SolveEvent::Retract { pos: p }) if p == pos => theme.retract_flash,
        _ if value == 0 => theme.empty,
        _ if board.is_given(pos) => theme.given,
        _ => theme.placed,
    };

    if board.is_given(pos) {
        execute!(stdout, SetAttribute(Attribute::Bold))?;
    }
    if value == 0 {
        execute!(stdout, SetForegroundColor(color), Print(" . "))?;
    } else {
        execute!(
            stdout,
            SetForegroundColor(color),
            Print(format!(" {} ", value))
        )?;
    }
    if board.is_given(pos) {
        execute!(stdout, SetAttribute(Attribute::Reset))?;
    }
    Ok(())
}
