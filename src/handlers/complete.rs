//! Complete handler for the task heap MCP server

use crate::TaskHeapServer;
use crate::formatting;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskHeapServer {
    /// Removes the task due soonest and persists the queue.
    pub async fn handle_complete(&self) -> McpResult<String> {
        let mut heap = self.lock_heap();

        let task = match heap.extract_min() {
            Ok(task) => task,
            Err(_) => {
                drop(heap);
                bail_public!(_, "No task to complete: the queue is empty.");
            }
        };
        let next = heap.peek_min().ok().map(formatting::format_current);
        drop(heap);

        if let Err(e) = self.save_data_with_message(&format!("Complete task {}", task.name())) {
            bail_public!(_, "Completed '{}' but failed to save: {:#}", task.name(), e);
        }

        let mut result = format!("Completed task: {}", task.name());
        match next {
            Some(next) => {
                result.push('\n');
                result.push_str(&next);
            }
            None => result.push_str("\nNo tasks remaining."),
        }
        Ok(result)
    }
}
