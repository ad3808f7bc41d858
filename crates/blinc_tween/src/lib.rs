//! Blinc Tween Queue
//!
//! Demand-driven property tweens for presentation values.
//!
//! # Features
//!
//! - **Fixed Easing Curves**: linear, quadratic ease-in and ease-out, exact at both ends
//! - **Wall-Clock Progress**: dropped frames never stretch a tween's duration
//! - **Idle When Done**: a frame is requested only while tweens are in flight
//! - **Injected Host**: clock, frame scheduler and property store are traits,
//!   so queues run headless and deterministically in tests
//!
//! Each [`AnimationQueue`] is independent. Submit with
//! [`AnimationQueue::animate`], call [`AnimationQueue::on_frame`] whenever a
//! requested frame fires, or hand the queue to [`run_until_idle`].

pub mod active;
pub mod config;
mod driver;
pub mod easing;
pub mod error;
pub mod host;
pub mod property;
pub mod queue;
pub mod record;
pub mod runner;

pub use active::{ActiveSet, TweenId};
pub use config::{QueueConfig, DEFAULT_INTERVAL_MS};
pub use easing::Easing;
pub use error::{Result, TweenError};
pub use host::{
    Clock, FrameRequest, FrameScheduler, ManualClock, ManualFrames, MemoryStore, PropertyStore,
    SystemClock,
};
pub use property::{parse_numeric, EndPoints, Property, StyleValue, Unit};
pub use queue::AnimationQueue;
pub use record::{PropertyTrack, TweenRecord};
pub use runner::run_until_idle;
