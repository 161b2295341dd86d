//! Player side of the turn-coordination transport
//!
//! Each turn the transport hands the player a message:
//!
//! ```text
//! <side to move>
//! <opponent's last move>
//! <board snapshot, 9 lines>
//! ```
//!
//! and expects one move line back.

use log::{info, warn};

use crate::board::{Board, Side};
use crate::engine::Engine;
use crate::error::{OncaError, Result};
use crate::moves::Move;
use crate::notation::{format_move, parse_board, parse_move, SNAPSHOT_LINES};

/// Lines in one turn message
pub const MESSAGE_LINES: usize = SNAPSHOT_LINES + 2;

/// A decoded turn message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnMessage {
    pub side: Side,
    /// Opponent's last move as the transport reported it
    pub last_move: (Side, Move),
    pub board: Board,
}

impl TurnMessage {
    /// Decode a turn message.
    ///
    /// # Errors
    /// [`OncaError::MalformedInput`] when any of the three parts is malformed.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim_start_matches(['\r', '\n']);
        let mut parts = text.splitn(3, '\n');
        let (Some(side_line), Some(move_line), Some(board_text)) =
            (parts.next(), parts.next(), parts.next())
        else {
            return Err(OncaError::MalformedInput(format!(
                "turn message needs {MESSAGE_LINES} lines"
            )));
        };

        let side_line = side_line.trim();
        let side = side_line
            .chars()
            .next()
            .filter(|_| side_line.len() == 1)
            .and_then(Side::from_symbol)
            .ok_or_else(|| OncaError::MalformedInput(format!("unknown side {side_line:?}")))?;

        Ok(Self {
            side,
            last_move: parse_move(move_line)?,
            board: parse_board(board_text)?,
        })
    }
}

/// Reply produced for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Move line, terminated by `\n`
    pub text: String,
    /// The board was already decided; the game is over for this player
    pub finished: bool,
}

/// One player's connection state across a game.
#[derive(Debug)]
pub struct Session {
    side: Side,
    engine: Engine,
    turn: u32,
}

impl Session {
    #[must_use]
    pub fn new(side: Side, engine: Engine) -> Self {
        Self {
            side,
            engine,
            turn: 0,
        }
    }

    #[must_use]
    pub fn side(&self) -> Side {
        self.side
    }

    /// Turn messages handled so far
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Answer one turn message.
    ///
    /// A decided board or a side without moves is answered with a pass.
    ///
    /// # Errors
    /// [`OncaError::MalformedInput`] when the message cannot be decoded or
    /// is addressed to the other side.
    pub fn respond(&mut self, message: &str) -> Result<Reply> {
        let message = TurnMessage::parse(message)?;
        if message.side != self.side {
            return Err(OncaError::MalformedInput(format!(
                "message for side {} sent to side {}",
                message.side, self.side
            )));
        }
        self.turn += 1;

        let (mover, last) = &message.last_move;
        info!(
            "turn {}: {} to move, opponent played {}",
            self.turn,
            self.side,
            format_move(*mover, last)
        );

        if let Some(winner) = message.board.winner() {
            info!("game over, winner {winner}");
            return Ok(Reply {
                text: self.line(&Move::Pass),
                finished: true,
            });
        }

        let mv = self.engine.get_move(&message.board, self.side).unwrap_or_else(|| {
            warn!("{}: no legal move, passing", self.side);
            Move::Pass
        });
        Ok(Reply {
            text: self.line(&mv),
            finished: false,
        })
    }

    fn line(&self, mv: &Move) -> String {
        let mut text = format_move(self.side, mv);
        text.push('\n');
        text
    }
}
