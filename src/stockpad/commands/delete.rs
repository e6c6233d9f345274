use crate::commands::{notify, CmdMessage, CmdResult, Confirm};
use crate::error::{Result, StockError};
use crate::store::{InventoryStore, StorageBackend};

pub fn run<B: StorageBackend, C: Confirm + ?Sized>(
    store: &mut InventoryStore<B>,
    id: u64,
    confirm: &mut C,
) -> Result<CmdResult> {
    let item = match store.get_item(id) {
        Ok(item) => item.clone(),
        Err(e) => return notify(e),
    };

    let prompt = format!("Delete \"{}\"? This cannot be undone.", item.name);
    if !confirm.confirm(&prompt) {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info("Delete cancelled."));
        return Ok(result);
    }

    if !store.delete_item(id)? {
        return notify(StockError::ItemNotFound(id));
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Item deleted (#{}): {}",
        item.id, item.name
    )));
    result.affected_items.push(item);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{coffee, pen, store};
    use crate::commands::{create, AlwaysConfirm, MessageLevel};

    #[test]
    fn deletes_after_confirmation() {
        let mut store = store();
        create::run(&mut store, pen()).unwrap();
        create::run(&mut store, coffee()).unwrap();

        let mut asked = Vec::new();
        let mut confirm = |prompt: &str| {
            asked.push(prompt.to_string());
            true
        };
        let result = run(&mut store, 1, &mut confirm).unwrap();

        assert_eq!(result.affected_items[0].name, "Pilot Pen");
        assert_eq!(asked.len(), 1);
        assert!(asked[0].contains("Pilot Pen"));
        assert_eq!(store.list_items().len(), 1);
        assert_eq!(store.list_items()[0].code, "MKN001");
    }

    #[test]
    fn declined_confirmation_keeps_item() {
        let mut store = store();
        create::run(&mut store, pen()).unwrap();

        let result = run(&mut store, 1, &mut |_: &str| false).unwrap();

        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert_eq!(store.list_items().len(), 1);
    }

    #[test]
    fn unknown_id_never_prompts() {
        let mut store = store();
        let mut prompted = false;
        let result = run(&mut store, 3, &mut |_: &str| {
            prompted = true;
            true
        })
        .unwrap();

        assert!(!prompted);
        assert!(result.has_errors());
    }

    #[test]
    fn always_confirm_skips_prompt() {
        let mut store = store();
        create::run(&mut store, pen()).unwrap();
        run(&mut store, 1, &mut AlwaysConfirm).unwrap();
        assert!(store.list_items().is_empty());
    }
}
