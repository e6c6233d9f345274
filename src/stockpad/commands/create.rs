use crate::commands::{notify, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewItem;
use crate::store::{InventoryStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    fields: NewItem,
) -> Result<CmdResult> {
    let item = match store.add_item(fields) {
        Ok(item) => item,
        Err(e) => return notify(e),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item added (#{}): {}",
        item.id, item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}
