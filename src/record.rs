//! Line-oriented record encoding used by the backing store

use crate::error::RecordError;

/// A value that can be persisted as a single line of text.
///
/// `decode(&x.encode())` must yield a value equal to `x`, and the encoded
/// form must not contain a line break.
pub trait Record: Sized {
    /// Encode the value as one store line (without terminator).
    fn encode(&self) -> String;

    /// Decode a value from one store line.
    fn decode(line: &str) -> Result<Self, RecordError>;
}
