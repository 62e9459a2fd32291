//! Formatting helper functions for the task heap MCP server
//!
//! This module renders queue snapshots for display.

use crate::task::Task;
use chrono::NaiveDateTime;

/// Check whether a task's due date lies before `now`
///
/// Tasks whose due date is not a real calendar minute are never overdue.
pub fn is_overdue(task: &Task, now: NaiveDateTime) -> bool {
    task.due().to_naive().is_some_and(|due| due < now)
}

/// Format tasks (already in ascending order) into a display string
///
/// # Arguments
/// * `tasks` - Tasks in the order they should be listed
/// * `now` - Reference time for overdue markers
pub fn format_tasks(tasks: &[Task], now: NaiveDateTime) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for (position, task) in tasks.iter().enumerate() {
        result.push_str(&format!(
            "{}. {} (due: {})",
            position + 1,
            task.name(),
            task.due()
        ));
        if is_overdue(task, now) {
            result.push_str(" [overdue]");
        }
        result.push('\n');
    }

    result
}

/// Format the task at the front of the queue
pub fn format_current(task: &Task) -> String {
    format!("Current task: {}\nComplete by: {}", task.name(), task.due())
}
