//! Queue configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Frame interval used when none (or an unusable one) is given
pub const DEFAULT_INTERVAL_MS: u32 = 10;

/// Settings for an [`AnimationQueue`](crate::AnimationQueue)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Milliseconds between frames when the queue is driven by a fixed-rate
    /// loop. Progress itself always follows the clock.
    pub interval_ms: u32,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }
}

impl QueueConfig {
    /// Config with the given interval; zero falls back to the default
    pub fn with_interval(interval_ms: u32) -> Self {
        Self {
            interval_ms: if interval_ms == 0 {
                DEFAULT_INTERVAL_MS
            } else {
                interval_ms
            },
        }
    }

    /// Parse the leading integer of `raw` as the interval
    ///
    /// Anything without a positive leading integer (`""`, `"fast"`, `"0"`)
    /// falls back to the default.
    pub fn from_interval_str(raw: &str) -> Self {
        let digits: String = raw
            .trim_start()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        Self::with_interval(digits.parse().unwrap_or(DEFAULT_INTERVAL_MS))
    }

    /// Interval as a `Duration`, never zero
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1) as u64)
    }
}
