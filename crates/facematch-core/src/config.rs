use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for a puzzle session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Delay between solving a level and loading the next one
    pub advance_delay_ms: u64,
    /// Level to open with (wrapped into range)
    pub start_level: i64,
    /// Fixed seed for reproducible levels; `None` seeds from the platform
    pub seed: Option<u64>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: 3000,
            start_level: 0,
            seed: None,
        }
    }
}

impl PuzzleConfig {
    pub fn advance_delay(&self) -> Duration {
        Duration::from_millis(self.advance_delay_ms)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start_level(mut self, level: i64) -> Self {
        self.start_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PuzzleConfig::default();
        assert_eq!(config.advance_delay(), Duration::from_secs(3));
        assert_eq!(config.start_level, 0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: PuzzleConfig = serde_json::from_str(r#"{"seed": 12}"#).unwrap();
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.advance_delay_ms, 3000);

        let config: PuzzleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PuzzleConfig::default());
    }
}
