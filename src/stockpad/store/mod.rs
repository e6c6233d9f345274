//! # Storage Layer
//!
//! Persistence for stockpad is a plain key-value store. The [`backend::StorageBackend`]
//! trait covers the raw I/O; [`inventory_store::InventoryStore`] owns the two
//! collections and decides what gets written when.
//!
//! ## Keys
//!
//! | key          | value                                   |
//! |--------------|-----------------------------------------|
//! | `inventory`  | JSON array of items, insertion order    |
//! | `categories` | JSON array of categories                |
//! | `theme`      | `light` or `dark`                       |
//!
//! Every mutation rewrites the affected collection as a whole. Writes are atomic
//! per key, so a failed write leaves the previous value in place.
//!
//! ## Loading
//!
//! - Missing key: empty collection.
//! - Malformed value: logged, treated as an empty collection.
//! - First run (neither collection key stored): the sample dataset is installed (when enabled).
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: one `<key>.json` file per key in the data directory.
//! - [`mem_backend::MemBackend`]: for testing logic without filesystem I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── inventory.json
//! ├── categories.json
//! ├── theme.json
//! └── config.json      # CLI configuration, see config.rs
//! ```

pub mod backend;
pub mod codec;
pub mod fs_backend;
pub mod inventory_store;
pub mod mem_backend;
pub mod seed;

pub use backend::StorageBackend;
pub use inventory_store::InventoryStore;
