//! Main AI engine wrapping the search
//!
//! This module provides the engine used by the transport session and the
//! referee. Before searching it handles the cases that need no search:
//!
//! 1. **Terminal**: the position is already decided, no move is returned
//! 2. **Forced**: exactly one legal move exists
//! 3. **Alpha-Beta**: iterative-deepening search within the configured bounds
//! 4. **Fallback**: the budget ran out before any root move was scored
//!
//! # Example
//!
//! ```
//! use onca::{Board, Engine, SearchConfig, Side};
//!
//! let mut engine = Engine::with_config(SearchConfig::with_time_limit_ms(2, 500));
//! let board = Board::new();
//!
//! let result = engine.get_move_with_stats(&board, Side::Jaguar);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::board::{Board, Side};
use crate::config::SearchConfig;
use crate::eval::evaluate;
use crate::moves::Move;
use crate::rules::generate_moves;
use crate::search::{order_moves, SearchResult, Searcher};

/// Type of search that produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Position already decided; nothing to play
    Terminal,
    /// Only one legal move
    Forced,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Search produced nothing in time; first ordered move played
    Fallback,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Evaluation score for the moving side
    pub score: i32,
    /// Type of search that found this move
    pub search_type: SearchType,
    /// Depth the move was taken from (0 when no search ran)
    pub depth: u8,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
    /// Cutoffs on minimizing plies
    pub alpha_cutoffs: u64,
    /// Cutoffs on maximizing plies
    pub beta_cutoffs: u64,
}

impl MoveResult {
    #[inline]
    fn unsearched(best_move: Option<Move>, score: i32, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move,
            score,
            search_type,
            depth: 0,
            time_ms,
            nodes: 0,
            alpha_cutoffs: 0,
            beta_cutoffs: 0,
        }
    }

    /// Create a result from alpha-beta search
    #[inline]
    fn from_alphabeta(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type: SearchType::AlphaBeta,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            alpha_cutoffs: result.stats.alpha_cutoffs,
            beta_cutoffs: result.stats.beta_cutoffs,
        }
    }
}

/// Main AI engine for Onça.
///
/// # Example
///
/// ```
/// use onca::{Board, Engine, SearchConfig, Side};
/// use onca::notation::format_move;
///
/// let mut engine = Engine::with_config(SearchConfig::unlimited(1));
/// let board = Board::new();
/// if let Some(mv) = engine.get_move(&board, Side::Jaguar) {
///     println!("{}", format_move(Side::Jaguar, &mv));
/// }
/// ```
#[derive(Debug, Default)]
pub struct Engine {
    searcher: Searcher,
    config: SearchConfig,
}

impl Engine {
    /// Create an engine with the default configuration (depth 5, 30 s).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(),
            config,
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` when the position is decided or `side` cannot move.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, side: Side) -> Option<Move> {
        self.get_move_with_stats(board, side).best_move
    }

    /// Get the best move with detailed search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, side: Side) -> MoveResult {
        let start = Instant::now();
        let elapsed_ms = |start: Instant| start.elapsed().as_millis() as u64;

        if board.is_terminal() {
            return MoveResult::unsearched(
                None,
                evaluate(board, side),
                SearchType::Terminal,
                elapsed_ms(start),
            );
        }

        let mut moves = generate_moves(board, side);
        if moves.is_empty() {
            return MoveResult::unsearched(
                None,
                evaluate(board, side),
                SearchType::Terminal,
                elapsed_ms(start),
            );
        }
        if moves.len() == 1 {
            let mv = moves.remove(0);
            let score = board
                .apply_move(side, &mv)
                .map_or_else(|_| evaluate(board, side), |next| evaluate(&next, side));
            info!("{side}: forced move {mv:?}");
            return MoveResult::unsearched(Some(mv), score, SearchType::Forced, elapsed_ms(start));
        }

        let search = self.searcher.search(
            board,
            side,
            self.config.max_depth,
            self.config.time_limit,
        );
        let mut result = MoveResult::from_alphabeta(search, elapsed_ms(start));

        if result.best_move.is_none() {
            order_moves(board, side, &mut moves);
            warn!("{side}: search returned no move, playing first ordered move");
            result.best_move = moves.into_iter().next();
            result.search_type = SearchType::Fallback;
        }

        info!(
            "{side}: {:?} score {} depth {} nodes {} cutoffs {}/{} in {}ms",
            result.best_move,
            result.score,
            result.depth,
            result.nodes,
            result.alpha_cutoffs,
            result.beta_cutoffs,
            result.time_ms
        );
        result
    }

    /// Set the maximum search depth.
    pub fn set_max_depth(&mut self, depth: u8) {
        self.config.max_depth = depth;
    }

    /// Set the time limit for search; `None` removes it.
    pub fn set_time_limit(&mut self, time_limit: Option<Duration>) {
        self.config.time_limit = time_limit;
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Get the current maximum search depth.
    #[must_use]
    pub fn max_depth(&self) -> u8 {
        self.config.max_depth
    }
}
