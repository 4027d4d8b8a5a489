use crate::render;
use crate::theme::Theme;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use stepsolve_core::{Session, SolveEvent, SolveOutcome, StepControl};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// What the status line should say.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ready,
    Solved,
    Unsolvable,
    Aborted,
    Cleared,
}

/// The main application state
pub struct App {
    /// Puzzle owner: original board plus working copy
    pub session: Session,
    /// Outcome of the last action, for the status line
    pub status: Status,
    /// Most recent solver event, for cell highlighting
    pub last_event: Option<SolveEvent>,
    /// Color theme
    pub theme: Theme,
    /// Pause between animation steps
    delay: Duration,
}

impl App {
    pub fn new(session: Session, delay: Duration) -> Self {
        Self {
            session,
            status: Status::Ready,
            last_event: None,
            theme: Theme::dark(),
            delay,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, stdout: &mut io::Stdout) -> io::Result<AppAction> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Ok(AppAction::Quit),
            KeyCode::Char('s') => {
                self.solve_animated(stdout)?;
                Ok(AppAction::Continue)
            }
            KeyCode::Char('c') => {
                self.session.reset();
                self.last_event = None;
                self.status = Status::Cleared;
                Ok(AppAction::Continue)
            }
            _ => Ok(AppAction::Continue),
        }
    }

    /// Run the search, redrawing after every event. Blocks until the
    /// solver finishes or the user cancels with `q`/`Esc`; cancellation is
    /// only acted on between events.
    fn solve_animated(&mut self, stdout: &mut io::Stdout) -> io::Result<()> {
        let delay = self.delay;
        let theme = &self.theme;
        let mut io_error: Option<io::Error> = None;
        let mut last_event = None;

        let outcome = self.session.solve_with(|event, board| {
            last_event = Some(event);
            let drawn = render::render_step(stdout, theme, board, event).and_then(|_| {
                stdout.flush()?;
                thread::sleep(delay);
                poll_cancel()
            });
            match drawn {
                Ok(true) => StepControl::Abort,
                Ok(false) => StepControl::Continue,
                Err(e) => {
                    io_error = Some(e);
                    StepControl::Abort
                }
            }
        });

        if let Some(e) = io_error {
            return Err(e);
        }
        self.last_event = last_event;
        self.status = match outcome {
            SolveOutcome::Solved => Status::Solved,
            SolveOutcome::Unsolvable => Status::Unsolvable,
            SolveOutcome::Aborted => Status::Aborted,
        };
        Ok(())
    }
}

/// Drain pending input; `q` or `Esc` requests cancellation.
fn poll_cancel() -> io::Result<bool> {
    let mut cancel = false;
    while event::poll(Duration::ZERO)? {
        if let Event::Key(key) = event::read()? {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                cancel = true;
            }
        }
    }
    Ok(cancel)
}
