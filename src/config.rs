//! Environment-driven application settings.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `SNAKE_GRID_CELLS` | 20 | Cells per grid side (even, ≥ 4) |
//! | `SNAKE_STEP_MS` | 130 | Simulation step length |
//! | `SNAKE_SEED` | time-derived | Food placement seed |
//! | `SNAKE_LOG_PATH` | unset | Write tracing output to this file |
//! | `SNAKE_RECORD_PATH` | unset | Write one JSON line per tick to this file |
//!
//! Values that fail to parse fall back to the default.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::GameConfig;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub game: GameConfig,
    pub log_path: Option<String>,
    pub record_path: Option<String>,
}

impl AppConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = GameConfig::default();

        let grid_cells = lookup("SNAKE_GRID_CELLS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.grid_cells);

        let step_interval_ms = lookup("SNAKE_STEP_MS")
            .and_then(|s| s.trim().parse().ok())
            .filter(|&ms: &u32| ms > 0)
            .unwrap_or(defaults.step_interval_ms);

        let seed = lookup("SNAKE_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(time_seed);

        Self {
            game: GameConfig {
                grid_cells,
                step_interval_ms,
                seed,
            },
            log_path: non_empty(lookup("SNAKE_LOG_PATH")),
            record_path: non_empty(lookup("SNAKE_RECORD_PATH")),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .and_then(|s| if s.is_empty() { None } else { Some(s) })
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("SNAKE_GRID_CELLS", "12"),
            ("SNAKE_STEP_MS", "90"),
            ("SNAKE_SEED", "42"),
            ("SNAKE_LOG_PATH", "/tmp/snake.log"),
            ("SNAKE_RECORD_PATH", " /tmp/ticks.jsonl "),
        ]));
        assert_eq!(cfg.game.grid_cells, 12);
        assert_eq!(cfg.game.step_interval_ms, 90);
        assert_eq!(cfg.game.seed, 42);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/snake.log"));
        assert_eq!(cfg.record_path.as_deref(), Some("/tmp/ticks.jsonl"));
    }

    #[test]
    fn bad_values_fall_back_to_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("SNAKE_GRID_CELLS", "big"),
            ("SNAKE_STEP_MS", "0"),
            ("SNAKE_SEED", "7"),
            ("SNAKE_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg.game.grid_cells, 20);
        assert_eq!(cfg.game.step_interval_ms, 130);
        assert_eq!(cfg.log_path, None);
        assert_eq!(cfg.record_path, None);
    }
}
