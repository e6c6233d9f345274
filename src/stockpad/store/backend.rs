use crate::error::Result;

/// Key under which the item collection is persisted.
pub const INVENTORY_KEY: &str = "inventory";
/// Key under which the category collection is persisted.
pub const CATEGORIES_KEY: &str = "categories";
/// Key holding the presentation theme. Not read by the store's collections.
pub const THEME_KEY: &str = "theme";

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `InventoryStore` handles the "what" (collections, ids, invariants).
pub trait StorageBackend {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic per key: a failed write leaves the previous value intact.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
