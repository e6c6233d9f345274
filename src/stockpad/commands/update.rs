use crate::commands::{notify, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::ItemPatch;
use crate::store::{InventoryStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    id: u64,
    patch: ItemPatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        // Still report unknown ids, even with nothing to change.
        return match store.get_item(id) {
            Ok(_) => {
                let mut result = CmdResult::default();
                result.add_message(CmdMessage::info("Nothing to update."));
                Ok(result)
            }
            Err(e) => notify(e),
        };
    }

    let item = match store.update_item(id, patch) {
        Ok(item) => item,
        Err(e) => return notify(e),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item updated (#{}): {}",
        item.id, item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}
