//! Task Heap MCP Server - Main Entry Point
//!
//! This is the main entry point for the task heap server application.
//! The actual implementation is in the `task_heap` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use task_heap::TaskHeapServer;
use tracing_subscriber::{EnvFilter, fmt};

/// Task Heap MCP Server - a due-date ordered task queue via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task list file
    #[arg(default_value = "taskList.txt")]
    file: PathBuf,

    /// Skip records that cannot be decoded instead of refusing to start
    #[arg(long)]
    skip_malformed: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // stdout carries the MCP protocol, so logs go to stderr
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let server = TaskHeapServer::new(&args.file, args.skip_malformed)?;
    serve_stdio(server).await?;
    Ok(())
}
