use crate::{Board, BoardError, SolveEvent, SolveOutcome, Solver, StepControl};

/// Single owner of a puzzle across solve/clear cycles.
///
/// Holds the original board and a working copy. Every solve attempt starts
/// from a fresh copy of the original, never from a partially solved state,
/// and [`Session::reset`] restores the working copy to the original.
#[derive(Debug, Clone)]
pub struct Session {
    original: Board,
    board: Board,
}

impl Session {
    /// Create a session from a validated board.
    pub fn new(original: Board) -> Self {
        let board = original.clone();
        Self { original, board }
    }

    /// Create a session from the compact 81-character puzzle form.
    pub fn from_string(s: &str) -> Result<Self, BoardError> {
        Ok(Self::new(Board::from_string(s)?))
    }

    /// The current working board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The pristine original puzzle.
    pub fn original(&self) -> &Board {
        &self.original
    }

    /// Solve without observation. See [`Session::solve_with`].
    pub fn solve(&mut self) -> SolveOutcome {
        self.solve_with(|_, _| StepControl::Continue)
    }

    /// Copy the original puzzle into the working board and run the search
    /// on it, forwarding every event to `observer`.
    pub fn solve_with<F>(&mut self, observer: F) -> SolveOutcome
    where
        F: FnMut(SolveEvent, &Board) -> StepControl,
    {
        self.board = self.original.clone();
        Solver::new().solve_with(&mut self.board, observer)
    }

    /// Restore the working board to the original puzzle.
    pub fn reset(&mut self) {
        self.board = self.original.clone();
    }
}
