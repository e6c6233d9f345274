//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for all stockpad operations, whichever UI is driving them.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! It holds no business logic, performs no terminal I/O, and formats nothing.
//!
//! ## Generic Over StorageBackend
//!
//! `InventoryApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `InventoryApi<FsBackend>`
//! - Testing: `InventoryApi<MemBackend>`

use crate::commands;
use crate::config::StockConfig;
use crate::error::Result;
use crate::model::{ItemPatch, NewCategory, NewItem, Theme};
use crate::store::{InventoryStore, StorageBackend};
use crate::views::ItemFilter;

/// The main API facade for stockpad operations.
pub struct InventoryApi<B: StorageBackend> {
    store: InventoryStore<B>,
    paths: commands::StockPaths,
    config: StockConfig,
}

impl<B: StorageBackend> InventoryApi<B> {
    /// Boot the store on `backend`, seeding sample data when configured to.
    pub fn open(backend: B, paths: commands::StockPaths, config: StockConfig) -> Result<Self> {
        let store = InventoryStore::open(backend, config.seed_sample_data)?;
        Ok(Self {
            store,
            paths,
            config,
        })
    }

    pub fn dashboard(&self) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.store, self.config.recent_limit)
    }

    pub fn list_items(&self, filter: &ItemFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, filter)
    }

    pub fn show_item(&self, id: u64) -> Result<commands::CmdResult> {
        commands::list::show(&self.store, id)
    }

    pub fn add_item(&mut self, fields: NewItem) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, fields)
    }

    pub fn update_item(&mut self, id: u64, patch: ItemPatch) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, patch)
    }

    pub fn delete_item<C: Confirm + ?Sized>(
        &mut self,
        id: u64,
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, id, confirm)
    }

    pub fn list_categories(&self) -> Result<commands::CmdResult> {
        commands::categories::list(&self.store)
    }

    pub fn add_category(&mut self, fields: NewCategory) -> Result<commands::CmdResult> {
        commands::categories::add(&mut self.store, fields)
    }

    pub fn delete_category<C: Confirm + ?Sized>(
        &mut self,
        id: u64,
        confirm: &mut C,
    ) -> Result<commands::CmdResult> {
        commands::categories::delete(&mut self.store, id, confirm)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.store)
    }

    pub fn theme(&self, set: Option<Theme>) -> Result<commands::CmdResult> {
        commands::theme::run(&self.store, set)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{
    AlwaysConfirm, CategoryEntry, CmdMessage, CmdResult, Confirm, Dashboard, MessageLevel, Report,
    StockPaths,
};
