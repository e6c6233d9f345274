use crate::commands::{CmdResult, Report};
use crate::error::Result;
use crate::store::{InventoryStore, StorageBackend};
use crate::views::{category_report, critical_item, inventory_totals, top_category};

pub fn run<B: StorageBackend>(store: &InventoryStore<B>) -> Result<CmdResult> {
    let items = store.list_items();
    let report = Report {
        totals: inventory_totals(items),
        top_category: top_category(items),
        critical_item: critical_item(items).cloned(),
        rows: category_report(items),
    };
    Ok(CmdResult {
        report: Some(report),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::commands::test_support::{coffee, pen, store};

    #[test]
    fn report_over_items() {
        let mut store = store();
        create::run(&mut store, coffee()).unwrap();
        create::run(&mut store, pen()).unwrap();
        create::run(&mut store, pen()).unwrap();

        let report = run(&store).unwrap().report.unwrap();
        assert_eq!(report.top_category.as_deref(), Some("Stationery"));
        assert_eq!(report.critical_item.map(|i| i.id), Some(2));
        assert_eq!(report.rows.len(), 2);
        assert_eq!(report.rows[0].category, "Food");
        assert_eq!(report.totals.total_stock, 106);
    }

    #[test]
    fn empty_store_report() {
        let store = store();
        let report = run(&store).unwrap().report.unwrap();
        assert!(report.top_category.is_none());
        assert!(report.critical_item.is_none());
        assert!(report.rows.is_empty());
        assert_eq!(report.totals.average_price, 0.0);
    }
}
