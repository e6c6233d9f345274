//! # Stockpad Architecture
//!
//! Stockpad is a **UI-agnostic inventory library**: it tracks stock items and the
//! categories they belong to, persists both to a key-value backend, and computes
//! dashboard and report views from them. The `stockpad` binary is one client of
//! the library; a web or desktop front end would sit in the same place.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prompts, renders output                │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)    Derived Views (views.rs)  │
//! │  - Business operations            - Pure recomputation      │
//! │  - Domain failures → messages     - No state, no caching    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - InventoryStore owns items and categories                 │
//! │  - StorageBackend: FsBackend (production), MemBackend       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors and Notifications
//!
//! Domain failures (unknown id, category still in use, unknown category) are
//! not exceptional: commands turn them into [`api::CmdMessage`] errors inside
//! an `Ok(CmdResult)`, and the UI shows them as notifications. Only backend
//! failures come back as `Err`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`views`]: Dashboard, badge, report, and filter computations
//! - [`store`]: Storage abstraction, codec, and the inventory store
//! - [`model`]: Core data types (`Item`, `Category`, `StockBadge`, `Theme`)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod views;
