//! Draft Error Definitions
//!
//! Defines error types used throughout the crate.

use thiserror::Error;

use super::Microseconds;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Metadata Errors
    // =========================================================================
    #[error("Unknown {kind} name: {name}")]
    UnknownEffectName { kind: &'static str, name: String },

    #[error("Too many parameters for '{name}': got {given}, accepts at most {expected}")]
    InvalidParameterCount {
        name: String,
        given: usize,
        expected: usize,
    },

    // =========================================================================
    // Decoration Errors
    // =========================================================================
    #[error("Duplicate animation type '{0}'")]
    DuplicateAnimation(&'static str),

    #[error("Incompatible animation: {0}")]
    IncompatibleAnimation(String),

    #[error("Cannot add multiple masks")]
    MultipleMasks,

    #[error("Cannot add multiple transitions")]
    MultipleTransitions,

    #[error("Cannot set uniform_scale when scale_x or scale_y already exist")]
    UniformScaleConflict,

    #[error("Invalid mask configuration: {0}")]
    InvalidMaskConfiguration(String),

    // =========================================================================
    // Timing Errors
    // =========================================================================
    #[error(
        "Source timerange {start}~{end} exceeds material duration {material_duration}"
    )]
    SourceRangeExceeded {
        start: Microseconds,
        end: Microseconds,
        material_duration: Microseconds,
    },

    #[error("Invalid time string: {0}")]
    InvalidTimeString(String),

    #[error("Invalid timerange: {0}")]
    InvalidTimerange(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Core result type
pub type CoreResult<T> = Result<T, CoreError>;
