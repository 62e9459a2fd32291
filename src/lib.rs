//! Task Heap Library
//!
//! A prioritized list of due-dated tasks that survives process restarts.
//! Tasks are kept in an array-backed binary min-heap ordered by due date,
//! then by name, and persisted to a line-oriented text file.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TaskHeapServer` - Exposes the queue as MCP tools
//! - **Domain Layer**: `MinHeap` and `Task` - The priority queue and what it stores
//! - **Persistence Layer**: `TextStore` - One encoded task per line, atomic replace on save
//!
//! # Example
//!
//! ```no_run
//! use task_heap::{MinHeap, Task, TextStore, Timestamp};
//!
//! # fn main() -> Result<(), task_heap::QueueError> {
//! let store = TextStore::new("taskList.txt");
//! let mut heap = MinHeap::new();
//! heap.load_from(&store)?;
//!
//! heap.insert(Task::new("Call", Timestamp::new(2023, 2, 15, 8, 0))?);
//! println!("next up: {}", heap.peek_min()?.name());
//!
//! heap.save_to(&store)?;
//! # Ok(())
//! # }
//! ```

mod error;
mod formatting;
mod handlers;
mod heap;
mod record;
mod storage;
mod task;
mod validation;

use anyhow::{Context, Result};
use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

// Re-export commonly used types
pub use error::{QueueError, RecordError};
pub use heap::{MinHeap, SkippedRecord};
pub use record::Record;
pub use storage::TextStore;
pub use task::{Task, Timestamp};

/// MCP Server handler for the task queue
///
/// Holds the queue behind a mutex so tool calls are serialized; the queue
/// itself has no internal locking. Every mutating tool saves the store, and
/// the store is saved once more when the handler is dropped.
pub struct TaskHeapServer {
    pub(crate) heap: Mutex<MinHeap<Task>>,
    pub(crate) store: TextStore,
}

impl TaskHeapServer {
    /// Create a new server handler, hydrating the queue from `store_path`
    ///
    /// # Arguments
    /// * `store_path` - Path to the task list file; a missing file means an empty queue
    /// * `skip_malformed` - Skip records that fail to decode instead of failing
    ///
    /// # Example
    /// ```no_run
    /// # use task_heap::TaskHeapServer;
    /// # use anyhow::Result;
    /// # fn main() -> Result<()> {
    /// let server = TaskHeapServer::new("taskList.txt", false)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(store_path: impl AsRef<Path>, skip_malformed: bool) -> Result<Self> {
        let store = TextStore::new(store_path);
        let mut heap = MinHeap::new();

        if skip_malformed {
            let skipped = heap
                .load_from_skipping(&store)
                .with_context(|| format!("Failed to load {}", store.file_path().display()))?;
            if !skipped.is_empty() {
                // Keep the raw lines before any save overwrites the store
                let raw: Vec<Vec<u8>> = skipped.into_iter().map(|s| s.raw).collect();
                store.append_rejected(&raw).with_context(|| {
                    format!(
                        "Failed to keep skipped records in {}",
                        store.rejected_path().display()
                    )
                })?;
                warn!(
                    count = raw.len(),
                    path = %store.rejected_path().display(),
                    "skipped malformed records; moved them aside for manual repair"
                );
            }
        } else {
            heap.load_from(&store)
                .with_context(|| format!("Failed to load {}", store.file_path().display()))?;
        }

        info!(path = %store.file_path().display(), count = heap.len(), "task queue ready");
        Ok(Self {
            heap: Mutex::new(heap),
            store,
        })
    }

    pub fn store(&self) -> &TextStore {
        &self.store
    }

    /// All tasks in ascending order
    pub fn snapshot(&self) -> Vec<Task> {
        self.lock_heap().ascending_snapshot()
    }

    pub(crate) fn lock_heap(&self) -> MutexGuard<'_, MinHeap<Task>> {
        // The heap is never left half-updated by a panicking caller
        self.heap.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn save_data_with_message(&self, message: &str) -> Result<()> {
        let heap = self.lock_heap();
        heap.save_to(&self.store)
            .with_context(|| format!("Failed to save {}", self.store.file_path().display()))?;
        info!(path = %self.store.file_path().display(), count = heap.len(), "{}", message);
        Ok(())
    }
}

impl Drop for TaskHeapServer {
    fn drop(&mut self) {
        if let Err(e) = self.save_data_with_message("Save on shutdown") {
            warn!("Shutdown save failed: {:#}", e);
        }
    }
}

/// Due-date task queue: always work on the task that is due soonest.
///
/// Tasks are ordered by due date (earliest first); tasks due at the same
/// minute are ordered by name. Dates are entered as separate fields, the way
/// a form would collect them: month (1-12), day (1-31), year (0 or later),
/// hour (0-23), minute (0-60).
#[mcp_server]
impl McpServer for TaskHeapServer {
    /// **List**: Show every task, earliest due date first. Overdue tasks are marked.
    #[tool]
    async fn list(&self) -> McpResult<String> {
        self.handle_list().await
    }

    /// **Current**: Show the task due soonest, i.e. the one to work on now.
    #[tool]
    async fn current(&self) -> McpResult<String> {
        self.handle_current().await
    }

    /// **Complete**: Mark the current task as done and remove it from the queue.
    #[tool]
    async fn complete(&self) -> McpResult<String> {
        self.handle_complete().await
    }

    /// **Postpone**: Give the current task a new due date. It is re-queued, so another task may become current.
    #[tool]
    async fn postpone(
        &self,
        /// Month: 1-12
        month: String,
        /// Day of month: 1-31
        day: String,
        /// Year: e.g. "2025"
        year: String,
        /// Hour: 0-23
        hour: String,
        /// Minute: 0-60
        minute: String,
    ) -> McpResult<String> {
        self.handle_postpone(month, day, year, hour, minute).await
    }

    /// **Add**: Add a new task. Commas and '=' in the name are replaced with spaces.
    #[tool]
    async fn add(
        &self,
        /// Name: brief description of the task
        name: String,
        /// Month: 1-12
        month: String,
        /// Day of month: 1-31
        day: String,
        /// Year: e.g. "2025"
        year: String,
        /// Hour: 0-23
        hour: String,
        /// Minute: 0-60
        minute: String,
    ) -> McpResult<String> {
        self.handle_add(name, month, day, year, hour, minute).await
    }

    /// **Save**: Write the task list to disk now. Changes are saved automatically; use this to retry after a failed save.
    #[tool]
    async fn save(&self) -> McpResult<String> {
        self.handle_save().await
    }
}
