//! Current-task handler for the task heap MCP server

use crate::TaskHeapServer;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TaskHeapServer {
    /// Shows the task due soonest.
    pub async fn handle_current(&self) -> McpResult<String> {
        let heap = self.lock_heap();
        match heap.peek_min() {
            Ok(task) => Ok(formatting::format_current(task)),
            Err(_) => Ok("No tasks. Use add() to create one.".to_string()),
        }
    }
}
