//! Callback error types

use thiserror::Error;

/// Errors raised by the reactive binding layer
#[derive(Error, Debug)]
pub enum CallbackError {
    /// No control with this identifier exists
    #[error("Unknown control: {0}")]
    UnknownControl(String),

    /// The value does not fit the control's type
    #[error("Invalid value for control {control}: {reason}")]
    InvalidValue { control: String, reason: String },

    /// An output may only be produced by one callback
    #[error("Output already registered: {0}")]
    DuplicateOutput(String),

    /// A callback must depend on at least one control
    #[error("Callback for {0} has no inputs")]
    NoInputs(String),
}

/// Result type for callback operations
pub type CallbackResult<T> = Result<T, CallbackError>;
