//! Tween error types

use thiserror::Error;

use crate::property::Property;

/// Errors raised while submitting or driving tweens
///
/// Most misuse falls back silently (unknown easing names, bad intervals,
/// retiring a finished record). Errors are reserved for the property store
/// and for values the engine cannot interpolate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TweenError {
    /// Property name is not in the animatable set
    #[error("Unknown animatable property: {0}")]
    UnknownProperty(String),

    /// Current or requested value has no leading number
    #[error("Value {value:?} for property {property} is not numeric")]
    NotNumeric { property: Property, value: String },

    /// Store has no entry for the target
    #[error("Unknown tween target: {0}")]
    UnknownTarget(String),

    /// Store failed to read a property
    #[error("Failed to read {property}: {reason}")]
    Read { property: Property, reason: String },

    /// Store failed to write a property
    #[error("Failed to write {property}: {reason}")]
    Write { property: Property, reason: String },
}

/// Result type for tween operations
pub type Result<T> = std::result::Result<T, TweenError>;
