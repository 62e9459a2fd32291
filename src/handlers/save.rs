//! Save handler for the task heap MCP server

use crate::TaskHeapServer;
use mcp_attr::{Result as McpResult, bail_public};

impl TaskHeapServer {
    /// Flushes the queue to the store, e.g. to retry after a failed save.
    pub async fn handle_save(&self) -> McpResult<String> {
        if let Err(e) = self.save_data_with_message("Save task list") {
            bail_public!(_, "Failed to save: {:#}", e);
        }

        let count = self.lock_heap().len();
        Ok(format!(
            "Saved {} task(s) to {}",
            count,
            self.store().file_path().display()
        ))
    }
}
