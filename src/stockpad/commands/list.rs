use crate::commands::{notify, CmdResult};
use crate::error::Result;
use crate::store::{InventoryStore, StorageBackend};
use crate::views::{filter_items, ItemFilter};

pub fn run<B: StorageBackend>(
    store: &InventoryStore<B>,
    filter: &ItemFilter,
) -> Result<CmdResult> {
    let listed = filter_items(store.list_items(), filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_listed_items(listed))
}

/// A single item by id.
pub fn show<B: StorageBackend>(store: &InventoryStore<B>, id: u64) -> Result<CmdResult> {
    match store.get_item(id) {
        Ok(item) => Ok(CmdResult::default().with_listed_items(vec![item.clone()])),
        Err(e) => notify(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::commands::test_support::{coffee, pen, store};

    #[test]
    fn lists_in_insertion_order() {
        let mut store = store();
        create::run(&mut store, coffee()).unwrap();
        create::run(&mut store, pen()).unwrap();

        let result = run(&store, &ItemFilter::default()).unwrap();
        let codes: Vec<_> = result.listed_items.iter().map(|i| i.code.as_str()).collect();
        assert_eq!(codes, ["MKN001", "ATK001"]);
    }

    #[test]
    fn applies_filter() {
        let mut store = store();
        create::run(&mut store, coffee()).unwrap();
        create::run(&mut store, pen()).unwrap();

        let filter = ItemFilter {
            search: Some("pen".into()),
            category: None,
        };
        let result = run(&store, &filter).unwrap();
        assert_eq!(result.listed_items.len(), 1);
        assert_eq!(result.listed_items[0].name, "Pilot Pen");

        let filter = ItemFilter {
            search: None,
            category: Some("Food".into()),
        };
        let result = run(&store, &filter).unwrap();
        assert_eq!(result.listed_items[0].code, "MKN001");
    }

    #[test]
    fn show_missing_item_reports_error() {
        let store = store();
        let result = show(&store, 5).unwrap();
        assert!(result.listed_items.is_empty());
        assert!(result.has_errors());
    }
}
