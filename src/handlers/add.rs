//! Add handler for the task heap MCP server

use crate::TaskHeapServer;
use crate::task::Task;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskHeapServer {
    /// Creates a task from raw form fields and inserts it into the queue.
    ///
    /// The name is sanitized (commas, `=` and line breaks become spaces)
    /// before the task is built.
    pub async fn handle_add(
        &self,
        name: String,
        month: String,
        day: String,
        year: String,
        hour: String,
        minute: String,
    ) -> McpResult<String> {
        let name = validation::parse_name(&name)?;
        let due = validation::parse_due(&month, &day, &year, &hour, &minute)?;

        let task = match Task::new(name, due) {
            Ok(task) => task,
            Err(e) => bail_public!(_, "{}", e),
        };
        let summary = format!("Task added: {} (due: {})", task.name(), task.due());

        let mut heap = self.lock_heap();
        heap.insert(task);
        let count = heap.len();
        drop(heap);

        if let Err(e) = self.save_data_with_message("Add task") {
            bail_public!(_, "Task added but failed to save: {:#}", e);
        }

        Ok(format!("{}\n{} task(s) in queue", summary, count))
    }
}
