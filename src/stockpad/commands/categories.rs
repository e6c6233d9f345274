use crate::commands::{notify, CategoryEntry, CmdMessage, CmdResult, Confirm};
use crate::error::Result;
use crate::model::NewCategory;
use crate::store::{InventoryStore, StorageBackend};

pub fn list<B: StorageBackend>(store: &InventoryStore<B>) -> Result<CmdResult> {
    let entries = store
        .list_categories()
        .iter()
        .map(|category| CategoryEntry {
            item_count: store.category_item_count(&category.name),
            category: category.clone(),
        })
        .collect();
    Ok(CmdResult::default().with_categories(entries))
}

pub fn add<B: StorageBackend>(
    store: &mut InventoryStore<B>,
    fields: NewCategory,
) -> Result<CmdResult> {
    let category = match store.add_category(fields) {
        Ok(category) => category,
        Err(e) => return notify(e),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category added (#{}): {} {}",
        category.id, category.icon, category.name
    )));
    if store
        .list_categories()
        .iter()
        .filter(|c| c.name == category.name)
        .count()
        > 1
    {
        result.add_message(CmdMessage::warning(format!(
            "Another category is already named '{}'",
            category.name
        )));
    }
    result.categories.push(CategoryEntry {
        category,
        item_count: 0,
    });
    Ok(result)
}

/// Delete a category. The in-use check runs before asking for confirmation.
pub fn delete<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut InventoryStore<B>,
    id: u64,
    confirm: &mut C,
) -> Result<CmdResult> {
    let category = match store.ensure_category_deletable(id) {
        Ok(category) => category.clone(),
        Err(e) => return notify(e),
    };

    let prompt = format!("Delete category \"{}\"?", category.name);
    if !confirm.confirm(&prompt) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Delete cancelled."));
        return Ok(result);
    }

    let removed = match store.delete_category(id) {
        Ok(removed) => removed,
        Err(e) => return notify(e),
    };

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Category deleted (#{}): {}",
        removed.id, removed.name
    )));
    result.categories.push(CategoryEntry {
        category: removed,
        item_count: 0,
    });
    Ok(result)
}
