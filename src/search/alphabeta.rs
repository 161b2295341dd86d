//! Alpha-Beta search with iterative deepening
//!
//! This module implements the core search algorithm for the Onça AI.
//! It uses minimax with alpha-beta pruning from the point of view of the
//! side to move at the root.
//!
//! # Features
//!
//! - Iterative deepening for time management and move ordering
//! - Previous depth's best move searched first at the root
//! - Early exit once a decided score is found
//! - Cooperative wall-clock budget, polled at every node
//!
//! # Example
//!
//! ```
//! use onca::board::{Board, Side};
//! use onca::search::Searcher;
//!
//! let mut searcher = Searcher::new();
//! let board = Board::new();
//!
//! let result = searcher.search(&board, Side::Jaguar, 2, None);
//! if let Some(best_move) = result.best_move {
//!     println!("Best move: {best_move:?} (score {})", result.score);
//! }
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Side};
use crate::eval::{evaluate, Weights};
use crate::moves::Move;
use crate::rules::generate_moves;

use super::ordering::order_moves;

/// Infinity score for alpha-beta bounds
pub const INF: i32 = Weights::WIN + 1;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Total `minimax` calls
    pub nodes: u64,
    /// Cutoffs on minimizing plies (beta fell to alpha)
    pub alpha_cutoffs: u64,
    /// Cutoffs on maximizing plies (alpha rose to beta)
    pub beta_cutoffs: u64,
    /// Depth of the iteration the result was taken from
    pub depth: u8,
    /// Wall-clock time of the whole search
    pub elapsed: Duration,
}

impl SearchStats {
    /// Total cutoffs of both kinds
    pub fn cutoffs(&self) -> u64 {
        self.alpha_cutoffs + self.beta_cutoffs
    }
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Evaluation score of the best move for the searching side
    pub score: i32,
    /// Depth the result was taken from
    pub depth: u8,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Alpha-Beta search engine with iterative deepening.
///
/// A searcher holds only per-search bookkeeping, so one value can be reused
/// for any number of positions. Statistics of the last search stay readable
/// through [`Searcher::stats`].
#[derive(Debug, Default)]
pub struct Searcher {
    stats: SearchStats,
    start: Option<Instant>,
    time_limit: Option<Duration>,
    timed_out: bool,
}

impl Searcher {
    /// Create a new searcher.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of the most recent search
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for `side`, or `None` when `side` has no legal move or the
    /// budget ran out before a single root move was evaluated.
    pub fn best_move(
        &mut self,
        board: &Board,
        side: Side,
        max_depth: u8,
        time_limit: Option<Duration>,
    ) -> Option<Move> {
        self.search(board, side, max_depth, time_limit).best_move
    }

    /// Search for the best move using iterative deepening.
    ///
    /// Depths run from 1 to `max_depth` (at least 1). A deeper iteration cut
    /// short by the time limit still replaces the previous answer when it
    /// finished at least one root move, since the previous best is always
    /// searched first.
    pub fn search(
        &mut self,
        board: &Board,
        side: Side,
        max_depth: u8,
        time_limit: Option<Duration>,
    ) -> SearchResult {
        self.stats = SearchStats::default();
        self.start = Some(Instant::now());
        self.time_limit = time_limit;
        self.timed_out = false;

        let mut best_result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            stats: SearchStats::default(),
        };

        let mut moves = generate_moves(board, side);
        order_moves(board, side, &mut moves);

        if !moves.is_empty() {
            for depth in 1..=max_depth.max(1) {
                if self.check_time() {
                    break;
                }
                let Some((index, score)) = self.search_root(board, side, &moves, depth) else {
                    break;
                };

                best_result.best_move = Some(moves[index].clone());
                best_result.score = score;
                best_result.depth = depth;
                debug!(
                    "depth {depth}: {:?} score {score} nodes {}{}",
                    moves[index],
                    self.stats.nodes,
                    if self.timed_out { " (partial)" } else { "" }
                );

                // Previous best goes first at the next depth
                moves[..=index].rotate_right(1);

                if self.timed_out || score.abs() >= Weights::WIN {
                    break;
                }
            }
        }

        self.stats.depth = best_result.depth;
        self.stats.elapsed = self.elapsed();
        best_result.stats = self.stats.clone();
        best_result
    }

    /// One root iteration. Returns the index and score of the best root move
    /// among those searched to completion.
    fn search_root(
        &mut self,
        board: &Board,
        side: Side,
        moves: &[Move],
        depth: u8,
    ) -> Option<(usize, i32)> {
        let mut alpha = -INF;
        let beta = INF;
        let mut best: Option<(usize, i32)> = None;

        for (i, mv) in moves.iter().enumerate() {
            if self.check_time() {
                break;
            }
            // Generated moves always apply
            let Ok(child) = board.apply_move(side, mv) else {
                continue;
            };
            let score = self.minimax(&child, depth - 1, alpha, beta, false, side);
            if self.timed_out {
                break;
            }

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((i, score));
            }
            alpha = alpha.max(score);
        }

        best
    }

    /// Minimax with alpha-beta pruning.
    ///
    /// Scores are always from `root_side`'s point of view; `maximizing` says
    /// whether `root_side` is the side to move at this node.
    fn minimax(
        &mut self,
        board: &Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
        root_side: Side,
    ) -> i32 {
        self.stats.nodes += 1;

        if self.check_time() || depth == 0 || board.is_terminal() {
            return evaluate(board, root_side);
        }

        let side = if maximizing {
            root_side
        } else {
            root_side.opponent()
        };
        let mut moves = generate_moves(board, side);
        if moves.is_empty() {
            return evaluate(board, root_side);
        }
        order_moves(board, side, &mut moves);

        if maximizing {
            let mut best = -INF;
            for mv in &moves {
                let Ok(child) = board.apply_move(side, mv) else {
                    continue;
                };
                let score = self.minimax(&child, depth - 1, alpha, beta, false, root_side);
                if self.timed_out {
                    break;
                }
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    self.stats.beta_cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = INF;
            for mv in &moves {
                let Ok(child) = board.apply_move(side, mv) else {
                    continue;
                };
                let score = self.minimax(&child, depth - 1, alpha, beta, true, root_side);
                if self.timed_out {
                    break;
                }
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    self.stats.alpha_cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    /// Check the time limit, latching the timeout once reached.
    #[inline]
    fn check_time(&mut self) -> bool {
        if self.timed_out {
            return true;
        }
        if let (Some(start), Some(limit)) = (self.start, self.time_limit) {
            if start.elapsed() >= limit {
                self.timed_out = true;
            }
        }
        self.timed_out
    }

    fn elapsed(&self) -> Duration {
        self.start.map_or(Duration::ZERO, |start| start.elapsed())
    }
}
