//! Easing functions for tweens
//!
//! Every curve maps `(elapsed, duration, start, delta)` to the value at that
//! point of progress. All three are exact at both ends: `elapsed == 0` yields
//! `start` and `elapsed == duration` yields `start + delta`.

use serde::{Deserialize, Serialize};

/// Easing curve applied to every property of a tween
///
/// Names that do not match a known curve resolve to [`Easing::Linear`], both
/// through [`Easing::from_name`] and when deserializing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum Easing {
    #[default]
    Linear,
    /// Quadratic acceleration from rest
    EaseIn,
    /// Quadratic deceleration to rest
    EaseOut,
}

impl Easing {
    /// Resolve an easing name, falling back to `Linear` for anything unknown
    ///
    /// Matching ignores case and accepts `easeIn`, `ease-in` and `ease_in`
    /// spellings.
    pub fn from_name(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "easein" => Easing::EaseIn,
            "easeout" => Easing::EaseOut,
            _ => Easing::Linear,
        }
    }

    /// Canonical camelCase name
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::EaseIn => "easeIn",
            Easing::EaseOut => "easeOut",
        }
    }

    /// Value at `elapsed` into a `duration`-long transition from `start` by `delta`
    pub fn apply(&self, elapsed: f32, duration: f32, start: f32, delta: f32) -> f32 {
        match self {
            Easing::Linear => linear(elapsed, duration, start, delta),
            Easing::EaseIn => ease_in(elapsed, duration, start, delta),
            Easing::EaseOut => ease_out(elapsed, duration, start, delta),
        }
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Easing::from_name(name)
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Easing::from_name(&name)
    }
}

impl From<Option<&str>> for Easing {
    fn from(name: Option<&str>) -> Self {
        name.map(Easing::from_name).unwrap_or_default()
    }
}

/// Fraction of the transition completed, or `None` for a degenerate duration
#[inline]
fn percent(elapsed: f32, duration: f32) -> Option<f32> {
    if duration <= 0.0 {
        None
    } else {
        Some(elapsed / duration)
    }
}

/// `delta * p + start`
pub fn linear(elapsed: f32, duration: f32, start: f32, delta: f32) -> f32 {
    match percent(elapsed, duration) {
        Some(p) => delta * p + start,
        None => start + delta,
    }
}

/// `delta * p² + start`
pub fn ease_in(elapsed: f32, duration: f32, start: f32, delta: f32) -> f32 {
    match percent(elapsed, duration) {
        Some(p) => delta * (p * p) + start,
        None => start + delta,
    }
}

/// `-delta * p(p - 2) + start`
pub fn ease_out(elapsed: f32, duration: f32, start: f32, delta: f32) -> f32 {
    match percent(elapsed, duration) {
        // At p == 1 this is -delta * -1 + start, i.e. start + delta
        Some(p) => -delta * (p * (p - 2.0)) + start,
        None => start + delta,
    }
}
