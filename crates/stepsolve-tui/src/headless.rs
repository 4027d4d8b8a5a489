use anyhow::Result;
use log::info;
use std::io::{self, Write};
use stepsolve_core::{Session, SolveOutcome, StepControl};

/// Run the solve without a terminal UI, writing one JSON line per solver
/// event to stdout, then the final grid. Lets tooling observe the event
/// stream without any display surface.
pub fn run(mut session: Session) -> Result<()> {
    info!("starting headless solve");
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut write_error: Option<io::Error> = None;
    let mut steps = 0u64;
    let outcome = session.solve_with(|event, _board| {
        steps += 1;
        // SolveEvent serialization is infallible; only the write can fail.
        let line = serde_json::to_string(&event).expect("event serializes");
        if let Err(e) = writeln!(out, "{}", line) {
            write_error = Some(e);
            return StepControl::Abort;
        }
        StepControl::Continue
    });

    if let Some(e) = write_error {
        return Err(e.into());
    }
    info!("search finished after {} events: {:?}", steps, outcome);

    match outcome {
        SolveOutcome::Solved => writeln!(out, "{}", session.board())?,
        SolveOutcome::Unsolvable => writeln!(out, "no solution")?,
        SolveOutcome::Aborted => {}
    }
    Ok(())
}
