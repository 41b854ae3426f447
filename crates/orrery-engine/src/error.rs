//! Engine error types.
//!
//! Only initialization can fail. Once a game is running, every frame
//! operation is infallible.

use thiserror::Error;

/// Result type for engine setup operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while configuring or initializing a game.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid world size {width}x{height}")]
    InvalidWorldSize { width: f32, height: f32 },

    #[error("invalid fixed timestep {0}")]
    InvalidTimestep(f32),

    #[error("window title must not be empty")]
    EmptyTitle,

    #[error("{section} capacity exceeded: {required} > {capacity}")]
    CapacityExceeded {
        section: &'static str,
        required: usize,
        capacity: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
