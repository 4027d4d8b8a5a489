//! Observable backtracking Sudoku solver.
//!
//! The engine is split into three pieces:
//!
//! - [`Board`]: a 9×9 grid of digits (0 = empty) that answers legality
//!   queries but performs no search of its own.
//! - [`Solver`]: recursive constraint-checked backtracking over a board,
//!   reporting every trial placement and retraction as a [`SolveEvent`] so
//!   an observer (a UI, a log, a test) can watch the search unfold.
//! - [`Session`]: owns the original puzzle and a working copy, so repeated
//!   solve/clear cycles always start from the pristine givens.
//!
//! The crate does no I/O and has no display dependencies; rendering
//! collaborators consume the event stream on their own schedule.

mod board;
mod session;
mod solver;

pub use board::{Board, BoardError, Position};
pub use session::Session;
pub use solver::{SolveEvent, SolveOutcome, Solver, StepControl};
