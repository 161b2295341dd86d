//! Match referee
//!
//! Keeps the authoritative board, hands out turn messages and validates the
//! replies. Any reply that does not parse, names the wrong mover or breaks
//! the rules is recorded as a pass.

use log::warn;

use crate::board::{Board, Side};
use crate::error::{OncaError, Result};
use crate::moves::Move;
use crate::notation::{format_board, format_move, parse_move};
use crate::rules::has_won;

/// State of a refereed game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Winner(Side),
    /// Ply budget exhausted without a winner
    Draw,
}

/// One refereed ply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ply {
    pub mover: Side,
    /// Move text as recorded (a pass when the reply was rejected)
    pub text: String,
    pub accepted: bool,
}

#[derive(Debug, Clone)]
pub struct Referee {
    board: Board,
    to_move: Side,
    plies_left: u32,
    last_move: String,
    winner: Option<Side>,
}

impl Referee {
    /// Start from the opening layout
    #[must_use]
    pub fn new(first: Side, max_plies: u32) -> Self {
        Self::with_board(Board::new(), first, max_plies)
    }

    /// Start from an arbitrary position
    #[must_use]
    pub fn with_board(board: Board, first: Side, max_plies: u32) -> Self {
        Self {
            board,
            to_move: first,
            plies_left: max_plies,
            last_move: format_move(first.opponent(), &Move::Pass),
            winner: None,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[must_use]
    pub fn plies_left(&self) -> u32 {
        self.plies_left
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        match self.winner {
            Some(side) => Outcome::Winner(side),
            None if self.plies_left == 0 => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Message for the side to move: side, last move, board snapshot
    #[must_use]
    pub fn turn_message(&self) -> String {
        format!(
            "{}\n{}\n{}",
            self.to_move,
            self.last_move,
            format_board(&self.board)
        )
    }

    /// Closing messages sent to both players once the game is over
    #[must_use]
    pub fn final_messages(&self) -> [(Side, String); 2] {
        let board = format_board(&self.board);
        [Side::Jaguar, Side::Dogs].map(|side| {
            let pass = format_move(side.opponent(), &Move::Pass);
            (side, format!("{side}\n{pass}\n{board}"))
        })
    }

    /// Record the reply of the side to move.
    ///
    /// # Errors
    /// [`OncaError::IllegalMove`] when the game is already over.
    pub fn submit(&mut self, text: &str) -> Result<Ply> {
        if self.outcome() != Outcome::InProgress {
            return Err(OncaError::IllegalMove("game is over".to_string()));
        }

        let mover = self.to_move;
        let played = match parse_move(text) {
            Ok((side, mv)) if side == mover => self
                .board
                .apply_move(side, &mv)
                .map(|next| (next, format_move(side, &mv))),
            Ok((side, _)) => Err(OncaError::IllegalMove(format!(
                "{side} moved out of turn"
            ))),
            Err(err) => Err(err),
        };

        let ply = match played {
            Ok((next, recorded)) => {
                self.board = next;
                Ply {
                    mover,
                    text: recorded,
                    accepted: true,
                }
            }
            Err(err) => {
                warn!("{mover}: rejected {:?}: {err}", text.trim());
                Ply {
                    mover,
                    text: format_move(mover, &Move::Pass),
                    accepted: false,
                }
            }
        };

        if has_won(&self.board, mover) {
            self.winner = Some(mover);
        } else {
            self.to_move = mover.opponent();
            self.last_move = ply.text.clone();
            self.plies_left = self.plies_left.saturating_sub(1);
        }
        Ok(ply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Pos;
    use crate::notation::parse_board;

    fn p(row: u8, col: u8) -> Pos {
        Pos::new(row, col)
    }

    #[test]
    fn test_initial_turn_message() {
        let referee = Referee::new(Side::Jaguar, 10);
        let message = referee.turn_message();
        let mut lines = message.splitn(3, '\n');
        assert_eq!(lines.next(), Some("o"));
        assert_eq!(lines.next(), Some("c n"));
        assert_eq!(parse_board(lines.next().unwrap()).unwrap(), Board::new());
        assert_eq!(referee.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_accepts_legal_move() {
        let mut referee = Referee::new(Side::Jaguar, 10);
        let ply = referee.submit("o m 3 3 4 3\n").unwrap();
        assert!(ply.accepted);
        assert_eq!(ply.text, "o m 3 3 4 3");
        assert_eq!(referee.board().jaguar(), p(4, 3));
        assert_eq!(referee.to_move(), Side::Dogs);
        assert_eq!(referee.plies_left(), 9);
        assert!(referee.turn_message().starts_with("c\no m 3 3 4 3\n"));
    }

    #[test]
    fn test_rejected_moves_become_passes() {
        for bad in ["garbage", "c m 3 1 4 1", "o m 3 3 5 3"] {
            let mut referee = Referee::new(Side::Jaguar, 10);
            let ply = referee.submit(bad).unwrap();
            assert!(!ply.accepted, "{bad}");
            assert_eq!(ply.text, "o n");
            assert_eq!(referee.board(), &Board::new());
            assert_eq!(referee.to_move(), Side::Dogs);
        }
    }

    #[test]
    fn test_jaguar_wins_by_capture() {
        let mut dogs: Vec<Pos> = (1..=5).flat_map(|c| [p(1, c), p(2, c)]).collect();
        dogs.retain(|&d| d != p(2, 3));
        dogs.push(p(4, 3));
        let board = Board::from_pieces(p(5, 3), dogs).unwrap();

        let mut referee = Referee::with_board(board, Side::Jaguar, 10);
        referee.submit("o s 1 5 3 3 3").unwrap();
        assert_eq!(referee.outcome(), Outcome::Winner(Side::Jaguar));
        assert!(referee.submit("c n").is_err());
    }

    #[test]
    fn test_dogs_win_by_trap() {
        let mut dogs = vec![p(6, 2), p(7, 3), p(5, 3), p(6, 4), p(7, 5)];
        dogs.extend((1..=5).map(|c| p(1, c)));
        let board = Board::from_pieces(p(7, 1), dogs).unwrap();

        let mut referee = Referee::with_board(board, Side::Dogs, 10);
        referee.submit("c m 6 4 6 3").unwrap();
        assert_eq!(referee.outcome(), Outcome::Winner(Side::Dogs));
    }

    #[test]
    fn test_draw_when_plies_run_out() {
        let mut referee = Referee::new(Side::Jaguar, 2);
        referee.submit("o n").unwrap();
        assert_eq!(referee.outcome(), Outcome::InProgress);
        referee.submit("c n").unwrap();
        assert_eq!(referee.outcome(), Outcome::Draw);
    }

    #[test]
    fn test_final_messages() {
        let referee = Referee::new(Side::Dogs, 1);
        let [(jaguar, to_jaguar), (dogs, to_dogs)] = referee.final_messages();
        assert_eq!(jaguar, Side::Jaguar);
        assert!(to_jaguar.starts_with("o\nc n\n#######\n"));
        assert_eq!(dogs, Side::Dogs);
        assert!(to_dogs.starts_with("c\no n\n#######\n"));
    }
}
