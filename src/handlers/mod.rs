//! MCP tool handlers for the task heap server
//!
//! Each handler is in a separate file. Handlers only go through the public
//! `MinHeap` operations; the list view is always rebuilt from a fresh
//! ascending snapshot.

pub mod add;
pub mod complete;
pub mod current;
pub mod list;
pub mod postpone;
pub mod save;
