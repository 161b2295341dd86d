//! Text formats shared with the turn-coordination transport.
//!
//! Board snapshot: a 7-character `#` border line, seven `#.....#` rows and a
//! closing border. Cells are `o` (Jaguar), `c` (Dog), `-` (empty) and a space
//! where the row has no cell (row 6 columns 1 and 5, row 7 columns 2 and 4).
//!
//! Move text:
//! - `<side> m <r> <c> <r> <c>` for a step
//! - `<side> s <hops> <r1> <c1> ... <rN> <cN>` for a capture chain (N = hops + 1)
//! - `<side> n` for a pass

use std::str::FromStr;

use crate::board::{Board, Piece, Pos, Side, COLS, ROWS};
use crate::error::{OncaError, Result};
use crate::moves::Move;

/// Border line above and below the board rows
pub const BORDER: &str = "#######";

/// Lines in a snapshot block
pub const SNAPSHOT_LINES: usize = ROWS as usize + 2;

fn malformed(reason: String) -> OncaError {
    OncaError::MalformedInput(reason)
}

/// Render a board as a snapshot block, each line terminated by `\n`
pub fn format_board(board: &Board) -> String {
    let mut out = String::with_capacity(SNAPSHOT_LINES * 8);
    out.push_str(BORDER);
    out.push('\n');
    for row in 1..=ROWS {
        out.push('#');
        for col in 1..=COLS {
            let ch = match Pos::try_new(i32::from(row), i32::from(col)) {
                Some(pos) => board.get(pos).symbol(),
                None => ' ',
            };
            out.push(ch);
        }
        out.push_str("#\n");
    }
    out.push_str(BORDER);
    out.push('\n');
    out
}

/// Parse a snapshot block.
///
/// Blank lines before or after the block are ignored; everything else must
/// match the layout exactly.
///
/// # Errors
/// [`OncaError::MalformedInput`] on any layout deviation, unknown symbol,
/// missing or duplicate Jaguar, or too many Dogs.
pub fn parse_board(text: &str) -> Result<Board> {
    let lines: Vec<&str> = text
        .lines()
        .skip_while(|line| line.trim().is_empty())
        .collect();
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(0, |i| i + 1);
    let lines = &lines[..end];

    if lines.len() != SNAPSHOT_LINES {
        return Err(malformed(format!(
            "snapshot has {} lines, expected {SNAPSHOT_LINES}",
            lines.len()
        )));
    }
    if lines[0] != BORDER || lines[SNAPSHOT_LINES - 1] != BORDER {
        return Err(malformed("snapshot border missing".to_string()));
    }

    let mut jaguar = None;
    let mut dogs = Vec::new();
    for (row, line) in (1..=ROWS).zip(&lines[1..=ROWS as usize]) {
        let inner = line
            .strip_prefix('#')
            .and_then(|rest| rest.strip_suffix('#'))
            .ok_or_else(|| malformed(format!("row {row} is not enclosed by '#': {line:?}")))?;
        let symbols: Vec<char> = inner.chars().collect();
        if symbols.len() != COLS as usize {
            return Err(malformed(format!(
                "row {row} has {} cells, expected {COLS}",
                symbols.len()
            )));
        }

        for (col, &ch) in (1..=COLS).zip(&symbols) {
            let Some(pos) = Pos::try_new(i32::from(row), i32::from(col)) else {
                if ch != ' ' {
                    return Err(malformed(format!(
                        "({row}, {col}) is off the board but holds {ch:?}"
                    )));
                }
                continue;
            };
            match Piece::from_symbol(ch) {
                Some(Piece::Jaguar) => {
                    if jaguar.replace(pos).is_some() {
                        return Err(malformed("more than one jaguar".to_string()));
                    }
                }
                Some(Piece::Dog) => dogs.push(pos),
                Some(Piece::Empty) => {}
                None => {
                    return Err(malformed(format!("unknown symbol {ch:?} at ({row}, {col})")));
                }
            }
        }
    }

    let jaguar = jaguar.ok_or_else(|| malformed("no jaguar on board".to_string()))?;
    Board::from_pieces(jaguar, dogs)
}

/// Render a move as wire text (no trailing newline)
pub fn format_move(side: Side, mv: &Move) -> String {
    match mv {
        Move::Step { from, to } => format!("{side} m {from} {to}"),
        Move::Capture(path) => {
            let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
            format!("{side} s {} {}", path.len().saturating_sub(1), cells.join(" "))
        }
        Move::Pass => format!("{side} n"),
    }
}

/// Parse wire move text into the mover and the move.
///
/// Only the shape is checked here; board legality is the job of
/// [`crate::rules::apply_move`].
///
/// # Errors
/// [`OncaError::MalformedInput`] on unknown side or kind, wrong token count,
/// non-numeric coordinates or coordinates outside the board.
pub fn parse_move(text: &str) -> Result<(Side, Move)> {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let (&side_tok, rest) = tokens
        .split_first()
        .ok_or_else(|| malformed("empty move text".to_string()))?;
    let side = single_char(side_tok)
        .and_then(Side::from_symbol)
        .ok_or_else(|| malformed(format!("unknown side {side_tok:?}")))?;
    let (&kind, args) = rest
        .split_first()
        .ok_or_else(|| malformed(format!("move kind missing in {text:?}")))?;

    let mv = match kind {
        "n" => {
            expect_len(args, 0, text)?;
            Move::Pass
        }
        "m" => {
            expect_len(args, 4, text)?;
            let cells = parse_cells(args)?;
            Move::step(cells[0], cells[1])
        }
        "s" => {
            let (&hops_tok, coords) = args
                .split_first()
                .ok_or_else(|| malformed(format!("hop count missing in {text:?}")))?;
            let hops: usize = hops_tok
                .parse()
                .map_err(|_| malformed(format!("bad hop count {hops_tok:?}")))?;
            if hops == 0 {
                return Err(malformed("capture needs at least one hop".to_string()));
            }
            expect_len(coords, 2 * (hops + 1), text)?;
            Move::Capture(parse_cells(coords)?)
        }
        other => return Err(malformed(format!("unknown move kind {other:?}"))),
    };
    Ok((side, mv))
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

fn expect_len(args: &[&str], expected: usize, text: &str) -> Result<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(malformed(format!(
            "expected {expected} arguments, got {} in {text:?}",
            args.len()
        )))
    }
}

fn parse_cells(coords: &[&str]) -> Result<Vec<Pos>> {
    coords
        .chunks(2)
        .map(|pair| {
            let row: i32 = pair[0]
                .parse()
                .map_err(|_| malformed(format!("bad row {:?}", pair[0])))?;
            let col: i32 = pair[1]
                .parse()
                .map_err(|_| malformed(format!("bad column {:?}", pair[1])))?;
            Pos::try_new(row, col)
                .ok_or_else(|| malformed(format!("({row}, {col}) is not a board cell")))
        })
        .collect()
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_board(self))
    }
}

impl FromStr for Board {
    type Err = OncaError;

    fn from_str(s: &str) -> Result<Self> {
        parse_board(s)
    }
}
