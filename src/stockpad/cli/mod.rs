//! # CLI Behavior
//!
//! This is **one possible UI client** for stockpad, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and
//! output formatting. For the overall architecture, see the library docs.
//!
//! ## Naked Execution (`stockpad`)
//!
//! Running `stockpad` with no arguments shows the dashboard: counters for items,
//! categories, low-stock items and total value, followed by the most recently
//! added items.
//!
//! ## Data Location
//!
//! 1. `--data-dir <DIR>` (highest priority)
//! 2. `STOCKPAD_HOME`
//! 3. The platform data directory (`directories::ProjectDirs`)
//!
//! The directory holds `inventory.json`, `categories.json`, `theme.json` and
//! `config.json`. A fresh directory is seeded with a sample dataset unless
//! `seed-sample-data` is turned off in the config.
//!
//! ## Destructive Commands
//!
//! `delete` and `category-delete` ask for confirmation on the terminal. Pass
//! `--yes` to skip the prompt. A category that items still reference is
//! refused before any prompt is shown.
//!
//! ## Output
//!
//! Output is rendered through minijinja templates in `cli/templates/` and styled
//! with the stored theme. Styling is dropped with `--no-color` or when stdout is
//! not a terminal. Error messages go to stderr and make the process exit with 1.
//!
//! ## Logging
//!
//! Diagnostics are emitted with `tracing` on stderr. The filter comes from
//! `STOCKPAD_LOG` (e.g. `STOCKPAD_LOG=stockpad=trace`), defaulting to `warn`,
//! or to debug level with `--verbose`.

mod commands;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
