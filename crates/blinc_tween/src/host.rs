//! Host capabilities
//!
//! The queue never reaches for ambient globals. The host injects:
//! - a [`Clock`] for wall-clock progress
//! - a [`FrameScheduler`] that delivers the next frame callback
//! - a [`PropertyStore`] that reads and writes presentation values
//!
//! In-tree implementations cover headless use and tests.

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::error::{Result, TweenError};
use crate::property::{Property, StyleValue};

// ============================================================================
// Clock
// ============================================================================

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Milliseconds since the clock was created
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock that only moves when told to
#[derive(Clone, Copy, Debug, Default)]
pub struct ManualClock {
    now_ms: f64,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self {
        Self { now_ms }
    }

    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    pub fn advance(&mut self, ms: f64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }
}

// ============================================================================
// Frame scheduling
// ============================================================================

/// Ticket for a requested frame callback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameRequest(pub u64);

/// Requests a callback at the next frame boundary
///
/// When the frame fires the host calls
/// [`AnimationQueue::on_frame`](crate::AnimationQueue::on_frame).
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameRequest;
    fn cancel_frame(&mut self, request: FrameRequest);

    /// The queue is handling `request`; it is no longer outstanding
    fn frame_fired(&mut self, _request: FrameRequest) {}
}

/// Scheduler that records the outstanding request for the host to poll
#[derive(Debug, Default)]
pub struct ManualFrames {
    next_id: u64,
    pending: Option<FrameRequest>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrames {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request waiting to fire, if any
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Total frames requested so far
    pub fn requested_count(&self) -> usize {
        self.requested
    }

    /// Total requests cancelled before firing
    pub fn cancelled_count(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualFrames {
    fn request_frame(&mut self) -> FrameRequest {
        self.next_id += 1;
        self.requested += 1;
        let request = FrameRequest(self.next_id);
        self.pending = Some(request);
        request
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
            self.cancelled += 1;
        }
    }

    fn frame_fired(&mut self, request: FrameRequest) {
        if self.pending == Some(request) {
            self.pending = None;
        }
    }
}

// ============================================================================
// Property store
// ============================================================================

/// Reads and writes the presentation values of targets
pub trait PropertyStore<T> {
    /// Current computed value, units included (e.g. `"12px"`)
    fn read(&self, target: &T, property: Property) -> Result<String>;

    /// Commit a presentation value
    fn write(&mut self, target: &T, property: Property, value: StyleValue) -> Result<()>;
}

/// In-memory computed styles keyed by target
///
/// Every write is also appended to a log so hosts and tests can replay the
/// values a tween produced.
#[derive(Debug)]
pub struct MemoryStore<T> {
    styles: FxHashMap<T, FxHashMap<Property, String>>,
    log: Vec<(T, Property, StyleValue)>,
}

impl<T: Clone + Eq + Hash> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            styles: FxHashMap::default(),
            log: Vec::new(),
        }
    }

    /// Register a target with no computed values
    pub fn insert(&mut self, target: T) {
        self.styles.entry(target).or_default();
    }

    /// Set a computed value directly, bypassing the write log
    pub fn set_raw(&mut self, target: T, property: Property, raw: impl Into<String>) {
        self.styles
            .entry(target)
            .or_default()
            .insert(property, raw.into());
    }

    /// Builder: set a numeric computed value in the property's unit
    pub fn with(mut self, target: T, property: Property, value: f32) -> Self {
        let raw = StyleValue::for_property(property, value).to_string();
        self.set_raw(target, property, raw);
        self
    }

    pub fn raw(&self, target: &T, property: Property) -> Option<&str> {
        self.styles.get(target)?.get(&property).map(String::as_str)
    }

    /// Current value with units stripped
    pub fn value(&self, target: &T, property: Property) -> Option<f32> {
        self.raw(target, property)
            .and_then(crate::property::parse_numeric)
    }

    /// Values written for one property of one target, oldest first
    pub fn history(&self, target: &T, property: Property) -> Vec<f32> {
        self.log
            .iter()
            .filter(|(t, p, _)| t == target && *p == property)
            .map(|(_, _, v)| v.value)
            .collect()
    }

    pub fn write_count(&self) -> usize {
        self.log.len()
    }
}

impl<T: Clone + Eq + Hash> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Eq + Hash + Debug> PropertyStore<T> for MemoryStore<T> {
    fn read(&self, target: &T, property: Property) -> Result<String> {
        let styles = self
            .styles
            .get(target)
            .ok_or_else(|| TweenError::UnknownTarget(format!("{target:?}")))?;
        styles.get(&property).cloned().ok_or_else(|| TweenError::Read {
            property,
            reason: "no computed value".to_string(),
        })
    }

    fn write(&mut self, target: &T, property: Property, value: StyleValue) -> Result<()> {
        let styles = self
            .styles
            .get_mut(target)
            .ok_or_else(|| TweenError::UnknownTarget(format!("{target:?}")))?;
        styles.insert(property, value.to_string());
        self.log.push((target.clone(), property, value));
        Ok(())
    }
}
