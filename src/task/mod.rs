//! Task domain model
//!
//! - `timestamp`: minute-resolution due dates with chronological ordering
//! - `item`: the immutable `Task` and its total order
//! - `codec`: the one-line store encoding of a `Task`

mod codec;
mod item;
mod timestamp;

pub use item::Task;
pub use timestamp::Timestamp;
