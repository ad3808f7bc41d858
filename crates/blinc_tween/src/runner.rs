//! Fixed-rate blocking driver
//!
//! For headless hosts without their own frame callback: fires the queue's
//! pending frame every `interval_ms` on the calling thread until it goes idle.

use std::thread;
use std::time::Instant;

use crate::error::Result;
use crate::host::{Clock, FrameScheduler, PropertyStore};
use crate::queue::AnimationQueue;

/// Drive `queue` until no frame is pending; returns the number of ticks run
///
/// Each iteration sleeps for whatever is left of the configured interval
/// after the previous tick, so slow stores do not stretch the frame rate.
/// Returns immediately for an idle queue.
pub fn run_until_idle<T, F, C, S>(queue: &mut AnimationQueue<T, F, C>, store: &mut S) -> Result<usize>
where
    F: FrameScheduler,
    C: Clock,
    S: PropertyStore<T> + ?Sized,
{
    let frame_duration = queue.config().interval();
    let mut ticks = 0;
    let mut frame_start = Instant::now();

    while queue.is_running() {
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
        frame_start = Instant::now();

        queue.on_frame(store)?;
        ticks += 1;
    }

    tracing::debug!("run_until_idle: queue idle after {} ticks", ticks);
    Ok(ticks)
}
