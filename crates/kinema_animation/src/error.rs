//! Animation error types

use thiserror::Error;

/// Animation-related errors
#[derive(Error, Debug)]
pub enum AnimationError {
    /// Requested easing curve name is not in the library
    #[error("unknown easing curve: {0:?}")]
    UnknownCurve(String),

    /// Interval registered with a start at or past its end
    #[error("invalid interval: start ({start}) must be less than end ({end})")]
    InvalidInterval { start: f32, end: f32 },
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
