//! Motion tuning knobs.

use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

/// Timing options for animated behavior. Loaded from the JSON file named by
/// `LUNETTE_CONFIG` when that variable is set, otherwise defaults. Any
/// field may be omitted.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MotionOptions {
    /// Carousel auto-advance period, in milliseconds.
    pub auto_advance_ms: u64,
    /// Bound on the wait for a destination page to mount before a deferred
    /// anchor scroll is dropped, in milliseconds.
    pub anchor_wait_ms: u64,
    /// Animation frame period for the showcase scene, in milliseconds.
    pub frame_ms: u64,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            auto_advance_ms: 5000,
            anchor_wait_ms: 400,
            frame_ms: 33,
        }
    }
}

impl MotionOptions {
    pub fn load() -> Self {
        let Ok(path) = std::env::var("LUNETTE_CONFIG") else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw).unwrap_or_else(|err| {
                warn!(%err, path, "invalid motion config; using defaults");
                Self::default()
            }),
            Err(err) => {
                warn!(%err, path, "unreadable motion config; using defaults");
                Self::default()
            }
        }
    }

    fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn auto_advance(&self) -> Duration {
        Duration::from_millis(self.auto_advance_ms)
    }

    pub fn anchor_wait(&self) -> Duration {
        Duration::from_millis(self.anchor_wait_ms)
    }

    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_site_timings() {
        let opts = MotionOptions::default();
        assert_eq!(opts.auto_advance(), Duration::from_secs(5));
        assert_eq!(opts.anchor_wait(), Duration::from_millis(400));
    }

    #[test]
    fn partial_overrides_keep_the_rest_default() {
        let opts = MotionOptions::parse(r#"{"auto_advance_ms": 2500}"#).unwrap();
        assert_eq!(opts.auto_advance_ms, 2500);
        assert_eq!(opts.anchor_wait_ms, 400);
        assert_eq!(opts.frame_ms, 33);
    }
}
