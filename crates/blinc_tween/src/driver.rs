//! Frame driver
//!
//! One tick advances every tween that was in flight when the frame fired,
//! commits the resulting values, retires finished tweens and then either
//! requests the next frame or lets the loop go idle.

use crate::error::Result;
use crate::host::{Clock, FrameScheduler, PropertyStore};
use crate::property::StyleValue;
use crate::queue::AnimationQueue;

impl<T, F: FrameScheduler, C: Clock> AnimationQueue<T, F, C> {
    /// Run the tick for a frame this queue requested
    ///
    /// Returns `true` when another frame was requested. Calling this while
    /// no frame is pending does nothing and returns `false`.
    ///
    /// A store write error stops the loop and drops every in-flight tween
    /// before the error is returned.
    ///
    /// Finished properties are committed as their exact end value in the
    /// property's unit (`100px`, unitless opacity), the same form used for
    /// intermediate values, rather than as a bare number.
    pub fn on_frame<S>(&mut self, store: &mut S) -> Result<bool>
    where
        S: PropertyStore<T> + ?Sized,
    {
        let Some(request) = self.pending.take() else {
            tracing::trace!("AnimationQueue: ignoring frame with no pending request");
            return Ok(false);
        };
        self.scheduler.frame_fired(request);

        if let Err(err) = self.tick(store) {
            tracing::debug!("AnimationQueue: tick failed, stopping loop: {}", err);
            self.halt();
            return Err(err);
        }

        if self.active.is_empty() {
            tracing::debug!(
                "AnimationQueue: idle after {} ticks, frame loop stopped",
                self.ticks
            );
            return Ok(false);
        }

        self.pending = Some(self.scheduler.request_frame());
        Ok(true)
    }

    /// Advance every record in the snapshot; returns how many were processed
    fn tick<S>(&mut self, store: &mut S) -> Result<usize>
    where
        S: PropertyStore<T> + ?Sized,
    {
        self.ticks += 1;
        let now = self.clock.now_ms();
        // Records queued from here on wait for the next tick
        let snapshot = self.active.snapshot();
        let mut processed = 0;

        for id in snapshot {
            let Some(record) = self.active.get_mut(id) else {
                continue;
            };
            processed += 1;

            let finished = record.is_finished_at(now);
            let elapsed = record.elapsed_at(now) as f32;
            let duration = record.duration_ms() as f32;
            let easing = record.easing();

            for track in record.tracks() {
                let property = track.property();
                let value = if finished {
                    track.end()
                } else {
                    track.sample(easing, elapsed, duration)
                };
                store.write(
                    record.target(),
                    property,
                    StyleValue::for_property(property, value),
                )?;
            }

            if finished {
                record.set_active(false);
                self.active.retire(id);
                tracing::trace!("tween {:?} finished", id);
            }
        }

        tracing::trace!(
            "AnimationQueue: tick {} advanced {} tweens, {} remaining",
            self.ticks,
            processed,
            self.active.len()
        );
        Ok(processed)
    }
}
