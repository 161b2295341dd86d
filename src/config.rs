//! Search configuration

use std::time::Duration;

/// Default maximum search depth
pub const DEFAULT_MAX_DEPTH: u8 = 5;
/// Default wall-clock budget per move
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

/// Depth and time bounds for one move search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Deepest iteration to run (at least 1 is always searched)
    pub max_depth: u8,
    /// Wall-clock budget; `None` searches to `max_depth` unconditionally
    pub time_limit: Option<Duration>,
}

impl SearchConfig {
    #[must_use]
    pub fn new(max_depth: u8, time_limit: Option<Duration>) -> Self {
        Self {
            max_depth,
            time_limit,
        }
    }

    /// Depth bound plus a budget in milliseconds
    #[must_use]
    pub fn with_time_limit_ms(max_depth: u8, time_limit_ms: u64) -> Self {
        Self::new(max_depth, Some(Duration::from_millis(time_limit_ms)))
    }

    /// Depth bound only
    #[must_use]
    pub fn unlimited(max_depth: u8) -> Self {
        Self::new(max_depth, None)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, Some(DEFAULT_TIME_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 5);
        assert_eq!(config.time_limit, Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_constructors() {
        assert_eq!(
            SearchConfig::with_time_limit_ms(3, 250).time_limit,
            Some(Duration::from_millis(250))
        );
        assert_eq!(SearchConfig::unlimited(7), SearchConfig::new(7, None));
    }
}
