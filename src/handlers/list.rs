//! List handler for the task heap MCP server

use crate::TaskHeapServer;
use crate::formatting;
use chrono::Local;
use mcp_attr::Result as McpResult;

impl TaskHeapServer {
    /// Renders every task in ascending order without touching the queue.
    pub async fn handle_list(&self) -> McpResult<String> {
        let tasks = self.snapshot();
        let now = Local::now().naive_local();
        Ok(formatting::format_tasks(&tasks, now))
    }
}
