//! Animation queue
//!
//! Owns the active set and the frame loop for one independent group of
//! tweens. Queues share nothing, so several can run side by side.

use smallvec::SmallVec;

use crate::active::{ActiveSet, TweenId};
use crate::config::QueueConfig;
use crate::easing::Easing;
use crate::error::{Result, TweenError};
use crate::host::{Clock, FrameRequest, FrameScheduler, ManualFrames, PropertyStore, SystemClock};
use crate::property::{parse_numeric, EndPoints, StyleValue};
use crate::record::{PropertyTrack, TweenRecord};

/// Demand-driven tween queue
///
/// A frame is requested only while tweens are in flight: submitting into an
/// empty queue starts the loop and the tick that retires the last record
/// ends it.
///
/// # Example
///
/// ```rust
/// use blinc_tween::{AnimationQueue, ManualClock, ManualFrames, MemoryStore, Property};
///
/// let mut store = MemoryStore::new().with("box", Property::Left, 0.0);
/// let mut queue = AnimationQueue::new(ManualFrames::new(), ManualClock::new(0.0));
///
/// queue
///     .animate(&mut store, "box", [(Property::Left, 100.0)], 100, "linear")
///     .unwrap();
/// assert!(queue.is_running());
///
/// queue.clock_mut().advance(50.0);
/// queue.on_frame(&mut store).unwrap();
/// assert_eq!(store.value(&"box", Property::Left), Some(50.0));
///
/// queue.clock_mut().advance(50.0);
/// queue.on_frame(&mut store).unwrap();
/// assert_eq!(store.value(&"box", Property::Left), Some(100.0));
/// assert!(!queue.is_running());
/// ```
pub struct AnimationQueue<T, F = ManualFrames, C = SystemClock> {
    config: QueueConfig,
    pub(crate) active: ActiveSet<T>,
    pub(crate) scheduler: F,
    pub(crate) clock: C,
    /// Outstanding frame request; `Some` exactly while the loop runs
    pub(crate) pending: Option<FrameRequest>,
    pub(crate) ticks: u64,
}

impl<T, F: FrameScheduler, C: Clock> AnimationQueue<T, F, C> {
    pub fn new(scheduler: F, clock: C) -> Self {
        Self::with_config(QueueConfig::default(), scheduler, clock)
    }

    pub fn with_config(config: QueueConfig, scheduler: F, clock: C) -> Self {
        Self {
            config,
            active: ActiveSet::new(),
            scheduler,
            clock,
            pending: None,
            ticks: 0,
        }
    }

    /// Tween `target` from its current values to `end_points` over `duration_ms`
    ///
    /// Current values are read from `store` and written back as explicit
    /// numbers before the record is queued. Unknown easing names resolve to
    /// linear. A zero duration completes on the first tick.
    ///
    /// Nothing is queued or written when a read fails or a current value is
    /// not numeric. When a pinning write fails, nothing is queued but the
    /// properties pinned before it keep their re-committed current value;
    /// no earlier write is rolled back.
    pub fn animate<S>(
        &mut self,
        store: &mut S,
        target: T,
        end_points: impl Into<EndPoints>,
        duration_ms: u32,
        easing: impl Into<Easing>,
    ) -> Result<TweenId>
    where
        S: PropertyStore<T> + ?Sized,
    {
        let easing = easing.into();
        let end_points = end_points.into();

        let mut tracks: SmallVec<[PropertyTrack; 4]> = SmallVec::new();
        for (property, end) in end_points.iter() {
            let raw = store.read(&target, property)?;
            let start = parse_numeric(&raw).ok_or_else(|| TweenError::NotNumeric {
                property,
                value: raw.clone(),
            })?;
            tracks.push(PropertyTrack::new(property, start, end));
        }

        // Pin the presentation to the values just read
        for track in &tracks {
            store.write(
                &target,
                track.property(),
                StyleValue::for_property(track.property(), track.start()),
            )?;
        }

        let start_ms = self.clock.now_ms();
        let record = TweenRecord::new(target, easing, tracks, start_ms, duration_ms);
        let (id, was_empty) = self.active.submit(record);

        tracing::trace!(
            "tween {:?} queued ({} properties, {}ms, {})",
            id,
            end_points.len(),
            duration_ms,
            easing.name()
        );

        if was_empty {
            self.start_loop();
        }

        Ok(id)
    }

    /// Stop the frame loop and drop every in-flight tween
    ///
    /// Values already committed stay where they are. Not needed in normal
    /// operation since the loop stops by itself once idle.
    pub fn stop(&mut self) {
        let dropped = self.active.len();
        self.halt();
        tracing::debug!("AnimationQueue: stopped, dropped {} tweens", dropped);
    }

    /// Whether a frame is currently requested
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the tween is still in flight
    pub fn is_animating(&self, id: TweenId) -> bool {
        self.active.contains(id)
    }

    pub fn get(&self, id: TweenId) -> Option<&TweenRecord<T>> {
        self.active.get(id)
    }

    /// Number of tweens in flight
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    /// Ticks performed since the queue was created
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    fn start_loop(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.request_frame());
            tracing::debug!("AnimationQueue: frame loop started");
        }
    }

    /// Cancel the pending frame and clear the active set
    pub(crate) fn halt(&mut self) {
        if let Some(request) = self.pending.take() {
            self.scheduler.cancel_frame(request);
        }
        self.active.clear();
    }
}

impl<T> Default for AnimationQueue<T, ManualFrames, SystemClock> {
    fn default() -> Self {
        Self::new(ManualFrames::new(), SystemClock::new())
    }
}
