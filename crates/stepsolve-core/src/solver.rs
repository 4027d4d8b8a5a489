use crate::{Board, Position};
use serde::{Deserialize, Serialize};

/// One state change performed by the search, in the exact order the
/// search performs them. Rejected candidates emit nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SolveEvent {
    /// A trial value was committed to an empty cell.
    Place { pos: Position, value: u8 },
    /// A committed trial was undone after the branch below it failed.
    Retract { pos: Position },
}

impl SolveEvent {
    /// The cell the event touched.
    pub fn pos(&self) -> Position {
        match *self {
            SolveEvent::Place { pos, .. } | SolveEvent::Retract { pos } => pos,
        }
    }
}

/// Observer verdict after consuming an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepControl {
    /// Keep searching.
    #[default]
    Continue,
    /// Stop the search at the next event boundary.
    Abort,
}

/// Terminal state of a solve call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    /// The board is fully and validly filled.
    Solved,
    /// No assignment of digits to the remaining empty cells satisfies the
    /// constraints given the fixed cells. Every trial along the way was
    /// undone, so the board is back in its entry state.
    Unsolvable,
    /// The observer requested cancellation; the board keeps whatever valid
    /// trial placements were standing when the request arrived.
    Aborted,
}

impl SolveOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved)
    }
}

/// Unit struct solver — stateless, all state is per-call.
///
/// The search recurses over the board's empty cells (row-major, first
/// empty cell first) trying candidates 1..=9 in ascending order. Depth is
/// bounded by the 81 cells, so plain call-stack recursion is safe.
pub struct Solver;

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Solve in place without observation.
    pub fn solve(&self, board: &mut Board) -> SolveOutcome {
        self.solve_with(board, |_, _| StepControl::Continue)
    }

    /// Solve in place, handing every [`SolveEvent`] to `observer` together
    /// with the board snapshot after the event was applied.
    ///
    /// The search blocks on the observer before proceeding; returning
    /// [`StepControl::Abort`] unwinds immediately with
    /// [`SolveOutcome::Aborted`]. Cancellation is only checked at event
    /// boundaries, never mid-validity-check.
    pub fn solve_with<F>(&self, board: &mut Board, mut observer: F) -> SolveOutcome
    where
        F: FnMut(SolveEvent, &Board) -> StepControl,
    {
        solve_recursive(board, &mut observer)
    }
}

fn solve_recursive<F>(board: &mut Board, observer: &mut F) -> SolveOutcome
where
    F: FnMut(SolveEvent, &Board) -> StepControl,
{
    // No empty cell left: every placement on the way down was valid, so a
    // full board is a correct solution.
    let pos = match board.find_empty() {
        Some(pos) => pos,
        None => return SolveOutcome::Solved,
    };

    for value in 1..=9 {
        if !board.is_valid(value, pos) {
            continue;
        }

        board.set(pos, value);
        if observer(SolveEvent::Place { pos, value }, board) == StepControl::Abort {
            return SolveOutcome::Aborted;
        }

        match solve_recursive(board, observer) {
            SolveOutcome::Solved => return SolveOutcome::Solved,
            SolveOutcome::Aborted => return SolveOutcome::Aborted,
            SolveOutcome::Unsolvable => {
                // Dead end below this placement: take it back and move on
                // to the next candidate.
                board.set(pos, 0);
                if observer(SolveEvent::Retract { pos }, board) == StepControl::Abort {
                    return SolveOutcome::Aborted;
                }
            }
        }
    }

    // All nine candidates failed; the parent choice point undoes its own
    // placement.
    SolveOutcome::Unsolvable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    /// The demo puzzle the binary ships with.
    fn demo_puzzle() -> [[u8; 9]; 9] {
        [
            [7, 8, 0, 4, 0, 0, 1, 2, 0],
            [6, 0, 0, 0, 7, 5, 0, 0, 9],
            [0, 0, 0, 6, 0, 1, 0, 7, 8],
            [0, 0, 7, 0, 4, 0, 2, 6, 0],
            [0, 0, 1, 0, 5, 0, 9, 3, 0],
            [9, 0, 4, 0, 6, 0, 0, 0, 5],
            [0, 7, 0, 3, 0, 0, 0, 1, 2],
            [1, 2, 0, 0, 0, 7, 4, 0, 0],
            [0, 4, 9, 2, 0, 6, 0, 0, 7],
        ]
    }

    /// Every row, column, and box holds 1..=9 exactly once.
    fn assert_solved_board(board: &Board) {
        let rows = board.rows();
        for unit in 0..9 {
            let mut row_seen = [false; 10];
            let mut col_seen = [false; 10];
            let mut box_seen = [false; 10];
            for i in 0..9 {
                let r = rows[unit][i] as usize;
                let c = rows[i][unit] as usize;
                let b = rows[(unit / 3) * 3 + i / 3][(unit % 3) * 3 + i % 3] as usize;
                assert!((1..=9).contains(&r), "row {} has a blank or junk", unit);
                assert!(!row_seen[r], "row {} repeats {}", unit, r);
                assert!(!col_seen[c], "column {} repeats {}", unit, c);
                assert!(!box_seen[b], "box {} repeats {}", unit, b);
                row_seen[r] = true;
                col_seen[c] = true;
                box_seen[b] = true;
            }
        }
    }

    #[test]
    fn test_solve_demo_puzzle() {
        let mut board = Board::from_rows(demo_puzzle()).unwrap();
        let outcome = Solver::new().solve(&mut board);
        assert_eq!(outcome, SolveOutcome::Solved);
        assert_solved_board(&board);
    }

    #[test]
    fn test_solve_preserves_givens() {
        let puzzle = demo_puzzle();
        let mut board = Board::from_rows(puzzle).unwrap();
        assert!(Solver::new().solve(&mut board).is_solved());
        for row in 0..9 {
            for col in 0..9 {
                if puzzle[row][col] != 0 {
                    assert_eq!(board.get(Position::new(row, col)), puzzle[row][col]);
                }
            }
        }
    }

    #[test]
    fn test_solve_empty_board() {
        let mut board = Board::from_rows([[0; 9]; 9]).unwrap();
        assert!(Solver::new().solve(&mut board).is_solved());
        assert_solved_board(&board);
    }

    #[test]
    fn test_already_complete_board_emits_nothing() {
        let mut board = Board::from_rows(demo_puzzle()).unwrap();
        Solver::new().solve(&mut board);
        let mut events = 0;
        let outcome = Solver::new().solve_with(&mut board, |_, _| {
            events += 1;
            StepControl::Continue
        });
        assert_eq!(outcome, SolveOutcome::Solved);
        assert_eq!(events, 0);
    }

    #[test]
    fn test_unsolvable_row_duplicate() {
        let mut rows = [[0u8; 9]; 9];
        rows[0][0] = 5;
        rows[0][8] = 5;
        let mut board = Board::from_rows(rows).unwrap();
        let before = board.rows();
        assert_eq!(Solver::new().solve(&mut board), SolveOutcome::Unsolvable);
        // Every trial was undone on the way out.
        assert_eq!(board.rows(), before);
    }

    #[test]
    fn test_event_stream_replays_to_final_board() {
        let original = Board::from_rows(demo_puzzle()).unwrap();
        let mut board = original.clone();
        let mut events = Vec::new();
        let outcome = Solver::new().solve_with(&mut board, |event, _| {
            events.push(event);
            StepControl::Continue
        });
        assert!(outcome.is_solved());

        // Applying the stream to a fresh copy reproduces the solution.
        let mut replay = original.clone();
        for event in &events {
            match *event {
                SolveEvent::Place { pos, value } => replay.set(pos, value),
                SolveEvent::Retract { pos } => replay.set(pos, 0),
            }
        }
        assert_eq!(replay.rows(), board.rows());
    }

    #[test]
    fn test_retract_pairs_with_prior_place() {
        let mut board = Board::from_rows(demo_puzzle()).unwrap();
        let mut open: Vec<Position> = Vec::new();
        let outcome = Solver::new().solve_with(&mut board, |event, _| {
            match event {
                SolveEvent::Place { pos, .. } => open.push(pos),
                SolveEvent::Retract { pos } => {
                    // Strict commit/undo pairing: a retraction always undoes
                    // the most recent standing placement.
                    assert_eq!(open.pop(), Some(pos));
                }
            }
            StepControl::Continue
        });
        assert!(outcome.is_solved());
        // What remains standing is exactly the solved-in cells.
        assert_eq!(
            open.len(),
            Board::from_rows(demo_puzzle())
                .unwrap()
                .rows()
                .iter()
                .flatten()
                .filter(|&&v| v == 0)
                .count()
        );
    }

    #[test]
    fn test_observer_snapshot_reflects_event() {
        let mut board = Board::from_rows(demo_puzzle()).unwrap();
        Solver::new().solve_with(&mut board, |event, snapshot| {
            match event {
                SolveEvent::Place { pos, value } => assert_eq!(snapshot.get(pos), value),
                SolveEvent::Retract { pos } => assert_eq!(snapshot.get(pos), 0),
            }
            StepControl::Continue
        });
    }

    #[test]
    fn test_abort_stops_search() {
        let mut board = Board::from_rows(demo_puzzle()).unwrap();
        let mut events = 0;
        let outcome = Solver::new().solve_with(&mut board, |_, _| {
            events += 1;
            if events >= 10 {
                StepControl::Abort
            } else {
                StepControl::Continue
            }
        });
        assert_eq!(outcome, SolveOutcome::Aborted);
        assert_eq!(events, 10);
        // Standing placements are still mutually consistent.
        assert!(!board.is_complete());
    }

    #[test]
    fn test_event_serialization() {
        let place = SolveEvent::Place {
            pos: Position::new(0, 2),
            value: 3,
        };
        let json = serde_json::to_string(&place).unwrap();
        assert_eq!(
            json,
            r#"{"action":"place","pos":{"row":0,"col":2},"value":3}"#
        );
        let back: SolveEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, place);

        let retract = SolveEvent::Retract {
            pos: Position::new(4, 4),
        };
        let json = serde_json::to_string(&retract).unwrap();
        assert_eq!(json, r#"{"action":"retract","pos":{"row":4,"col":4}}"#);
    }

    #[test]
    fn test_demo_puzzle_first_row_constraints() {
        let mut board = Board::from_rows(demo_puzzle()).unwrap();
        assert!(Solver::new().solve(&mut board).is_solved());
        let first_row = board.rows()[0];
        let mut seen = [false; 10];
        for v in first_row {
            assert_ne!(v, 0);
            assert!(!seen[v as usize]);
            seen[v as usize] = true;
        }
    }
}
