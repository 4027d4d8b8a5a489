//! Basic example of driving the solver and watching its events.

use stepsolve_core::{Session, SolveEvent, StepControl};

fn main() {
    let puzzle =
        "780400120600075009000601078007040260001050930904060005070300012120007400049206007";
    let mut session = Session::from_string(puzzle).expect("well-formed demo puzzle");

    println!("Puzzle:");
    println!("{}\n", session.board());

    let mut places = 0usize;
    let mut retracts = 0usize;
    let outcome = session.solve_with(|event, _board| {
        match event {
            SolveEvent::Place { .. } => places += 1,
            SolveEvent::Retract { .. } => retracts += 1,
        }
        StepControl::Continue
    });

    println!("Outcome: {:?}", outcome);
    println!("Trials: {} placements, {} retractions\n", places, retracts);
    println!("Solution:");
    println!("{}", session.board());
}
