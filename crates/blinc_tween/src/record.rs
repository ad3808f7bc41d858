//! In-flight tween state

use smallvec::SmallVec;

use crate::easing::Easing;
use crate::property::Property;

/// Start, end and change of one property
///
/// `delta` is computed once from `start` and `end` and never touched again.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyTrack {
    property: Property,
    start: f32,
    end: f32,
    delta: f32,
}

impl PropertyTrack {
    pub fn new(property: Property, start: f32, end: f32) -> Self {
        Self {
            property,
            start,
            end,
            delta: end - start,
        }
    }

    pub fn property(&self) -> Property {
        self.property
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Interpolated value `elapsed_ms` into the transition
    pub fn sample(&self, easing: Easing, elapsed_ms: f32, duration_ms: f32) -> f32 {
        easing.apply(elapsed_ms, duration_ms, self.start, self.delta)
    }
}

/// One multi-property tween on one target
///
/// The track set is fixed at creation. Progress is measured on the wall
/// clock, so nothing needs advancing between ticks.
#[derive(Clone, Debug)]
pub struct TweenRecord<T> {
    target: T,
    easing: Easing,
    tracks: SmallVec<[PropertyTrack; 4]>,
    start_ms: f64,
    end_ms: f64,
    active: bool,
}

impl<T> TweenRecord<T> {
    pub fn new(
        target: T,
        easing: Easing,
        tracks: impl IntoIterator<Item = PropertyTrack>,
        start_ms: f64,
        duration_ms: u32,
    ) -> Self {
        Self {
            target,
            easing,
            tracks: tracks.into_iter().collect(),
            start_ms,
            end_ms: start_ms + duration_ms as f64,
            active: false,
        }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    pub fn tracks(&self) -> &[PropertyTrack] {
        &self.tracks
    }

    pub fn start_ms(&self) -> f64 {
        self.start_ms
    }

    pub fn end_ms(&self) -> f64 {
        self.end_ms
    }

    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Whether `now_ms` has reached the end of the transition
    pub fn is_finished_at(&self, now_ms: f64) -> bool {
        now_ms >= self.end_ms
    }

    /// Milliseconds of progress at `now_ms`, clamped at zero
    pub fn elapsed_at(&self, now_ms: f64) -> f64 {
        (now_ms - self.start_ms).max(0.0)
    }
}
