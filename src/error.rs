//! Error types for the task heap
//!
//! Library operations return [`QueueError`]. A single record that cannot be
//! decoded is described by [`RecordError`], which `load_from` wraps together
//! with the offending line number.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by queue and store operations.
#[derive(Error, Debug)]
pub enum QueueError {
    /// `peek_min` or `extract_min` was called on an empty queue.
    #[error("queue is empty")]
    EmptyQueue,

    /// A line of the backing store could not be decoded.
    #[error("malformed record on line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number within the store.
        line: usize,
        #[source]
        source: RecordError,
    },

    /// The backing store could not be read or written.
    #[error("store unavailable at {}: {source}", path.display())]
    StoreUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A task name that the store format cannot represent.
    #[error("invalid task name {0:?}: names must be non-empty and contain no ',' or line breaks")]
    InvalidName(String),
}

/// Reasons a single encoded record fails to decode.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("missing {0}")]
    MissingField(&'static str),

    #[error("{field} is not an integer: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("line is not valid UTF-8")]
    InvalidUtf8,

    #[error("unexpected ',' (task names may not contain commas)")]
    UnexpectedComma,

    #[error("expected {expected}, found {found:?}")]
    BadShape {
        expected: &'static str,
        found: String,
    },
}

/// Result type alias for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;
