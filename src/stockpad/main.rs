//! # Stockpad CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, while this file
//! only invokes `cli::run()` and maps the outcome to a process exit code.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  CLI Layer (src/stockpad/cli/)                           │
//! │  - clap argument parsing (setup.rs)                      │
//! │  - Context wiring + dispatch (commands.rs)               │
//! │  - Terminal rendering via minijinja templates (render.rs)│
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs) → Command Layer (commands/*)         │
//! │  - Structured `CmdResult` values, no terminal I/O        │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Store (store/*) → StorageBackend (file or memory)       │
//! └──────────────────────────────────────────────────────────┘
//! ```

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
