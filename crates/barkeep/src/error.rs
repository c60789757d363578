use std::{io, result::Result as StdResult};

use thiserror::Error;

/// Custom Result type for barkeep operations.
pub type Result<T> = StdResult<T, BarkeepError>;

/// Barkeep-specific error types
#[derive(Error, Debug)]
pub enum BarkeepError {
    /// The widget has reached a terminal state and cannot be used again.
    #[error("{widget} has already finished and cannot be {action}")]
    AlreadyFinished {
        /// Kind of widget the operation was attempted on.
        widget: &'static str,
        /// The rejected operation, past tense.
        action: &'static str,
    },

    /// The operation requires the widget to be running.
    #[error("cannot {action} {widget}: it is not running")]
    NotRunning {
        /// Kind of widget the operation was attempted on.
        widget: &'static str,
        /// The rejected operation.
        action: &'static str,
    },

    /// The progress bar has reached its total.
    #[error("progress bar already reached its total of {total}, cannot advance further")]
    Exhausted {
        /// The total the bar was created with.
        total: u64,
    },

    /// An underlying terminal write failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
