use crate::commands::{CmdResult, Dashboard};
use crate::error::Result;
use crate::store::{InventoryStore, StorageBackend};
use crate::views::{dashboard_summary, recent_items};

pub fn run<B: StorageBackend>(
    store: &InventoryStore<B>,
    recent_limit: usize,
) -> Result<CmdResult> {
    let items = store.list_items();
    let dashboard = Dashboard {
        summary: dashboard_summary(items, store.list_categories()),
        recent: recent_items(items, recent_limit).into_iter().cloned().collect(),
    };
    Ok(CmdResult {
        dashboard: Some(dashboard),
        ..Default::default()
    })
}
