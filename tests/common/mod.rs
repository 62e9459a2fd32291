//! Common test utilities for integration tests

#![allow(dead_code)]

use std::path::PathBuf;
use task_heap::{Task, TaskHeapServer, Timestamp};
use tempfile::TempDir;

/// Create a test server backed by a not-yet-existing file in a temp dir
///
/// The directory comes first so it outlives the server (which saves on drop).
pub fn get_test_server() -> (TempDir, TaskHeapServer) {
    let dir = TempDir::new().unwrap();
    let server = TaskHeapServer::new(store_path(&dir), false).unwrap();
    (dir, server)
}

pub fn store_path(dir: &TempDir) -> PathBuf {
    dir.path().join("taskList.txt")
}

/// Build a task, panicking on invalid names
pub fn task(name: &str, year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Task {
    Task::new(name, Timestamp::new(year, month, day, hour, minute)).unwrap()
}

/// Names of the server's tasks in ascending order
pub fn snapshot_names(server: &TaskHeapServer) -> Vec<String> {
    server
        .snapshot()
        .iter()
        .map(|t| t.name().to_string())
        .collect()
}
