//! Postpone handler for the task heap MCP server

use crate::TaskHeapServer;
use crate::formatting;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskHeapServer {
    /// Moves the current task to a new due date.
    ///
    /// The task is extracted and a copy with the new date is re-inserted, so
    /// another task may become current afterwards. Invalid date fields are
    /// rejected before the queue is touched.
    pub async fn handle_postpone(
        &self,
        month: String,
        day: String,
        year: String,
        hour: String,
        minute: String,
    ) -> McpResult<String> {
        let due = validation::parse_due(&month, &day, &year, &hour, &minute)?;

        let mut heap = self.lock_heap();
        let current = match heap.extract_min() {
            Ok(task) => task,
            Err(_) => {
                drop(heap);
                bail_public!(_, "No task to postpone: the queue is empty.");
            }
        };

        let postponed = current.postpone(due);
        let name = postponed.name().to_string();
        heap.insert(postponed);
        let next = heap.peek_min().ok().map(formatting::format_current);
        drop(heap);

        if let Err(e) = self.save_data_with_message(&format!("Postpone task {}", name)) {
            bail_public!(_, "Postponed '{}' but failed to save: {:#}", name, e);
        }

        let mut result = format!("Postponed '{}' to {}", name, due);
        if let Some(next) = next {
            result.push('\n');
            result.push_str(&next);
        }
        Ok(result)
    }
}
