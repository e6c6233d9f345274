//! # Derived Views
//!
//! Pure functions over the current store contents. Nothing here is cached or
//! persisted: every view is recomputed from the collections each time a UI asks
//! for it, which is cheap at inventory scale.
//!
//! Ordering rules matter for the "top" style views:
//! - [`category_report`] lists categories in first-encountered item order.
//! - [`top_category`] and [`critical_item`] break ties towards the earlier entry.
//! - [`recent_items`] goes by collection order, newest first.

use crate::model::{Category, Item, StockBadge};
use serde::Serialize;

/// Number of entries [`recent_items`] returns when not configured otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_items: usize,
    pub total_categories: usize,
    pub low_stock_count: usize,
    pub total_value: f64,
}

pub fn dashboard_summary(items: &[Item], categories: &[Category]) -> DashboardSummary {
    DashboardSummary {
        total_items: items.len(),
        total_categories: categories.len(),
        low_stock_count: items.iter().filter(|i| i.is_low_stock()).count(),
        total_value: items.iter().map(Item::value).sum(),
    }
}

pub fn low_stock_badge(item: &Item) -> StockBadge {
    StockBadge::for_item(item)
}

/// Aggregate for one category name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    pub total_stock: u64,
    pub total_value: f64,
}

impl CategoryStats {
    fn new(category: &str) -> Self {
        Self {
            category: category.to_string(),
            count: 0,
            total_stock: 0,
            total_value: 0.0,
        }
    }

    /// Stock-weighted average price, 0 when nothing is in stock.
    pub fn average_price(&self) -> f64 {
        weighted_average(self.total_value, self.total_stock)
    }
}

fn weighted_average(total_value: f64, total_stock: u64) -> f64 {
    if total_stock == 0 {
        0.0
    } else {
        total_value / total_stock as f64
    }
}

/// Per-category aggregates, keyed by the category name items carry.
///
/// Rows appear in the order their category is first seen in `items`, so the
/// report is stable across runs. Categories without items do not appear.
pub fn category_report(items: &[Item]) -> Vec<CategoryStats> {
    let mut rows: Vec<CategoryStats> = Vec::new();
    for item in items {
        let pos = match rows.iter().position(|r| r.category == item.category) {
            Some(pos) => pos,
            None => {
                rows.push(CategoryStats::new(&item.category));
                rows.len() - 1
            }
        };
        let row = &mut rows[pos];
        row.count += 1;
        row.total_stock += u64::from(item.stock);
        row.total_value += item.value();
    }
    rows
}

/// Category with the most items. Ties go to the first one encountered.
pub fn top_category(items: &[Item]) -> Option<String> {
    let mut best: Option<CategoryStats> = None;
    for row in category_report(items) {
        if best.as_ref().map_or(true, |b| row.count > b.count) {
            best = Some(row);
        }
    }
    best.map(|row| row.category)
}

/// Item with the lowest stock. Ties go to the first one encountered.
pub fn critical_item(items: &[Item]) -> Option<&Item> {
    items.iter().reduce(|min, item| if item.stock < min.stock { item } else { min })
}

/// The last `n` items in collection order, most recent first.
pub fn recent_items(items: &[Item], n: usize) -> Vec<&Item> {
    items.iter().rev().take(n).collect()
}

/// Whole-inventory totals shown above the category report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryTotals {
    pub total_stock: u64,
    pub total_value: f64,
    pub average_price: f64,
}

pub fn inventory_totals(items: &[Item]) -> InventoryTotals {
    let total_stock = items.iter().map(|i| u64::from(i.stock)).sum();
    let total_value = items.iter().map(Item::value).sum();
    InventoryTotals {
        total_stock,
        total_value,
        average_price: weighted_average(total_value, total_stock),
    }
}

/// List filter. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Case-insensitive substring of the item name or code.
    pub search: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        let matches_search = match &self.search {
            Some(term) => {
                let term = term.to_lowercase();
                item.name.to_lowercase().contains(&term) || item.code.to_lowercase().contains(&term)
            }
            None => true,
        };
        let matches_category = match &self.category {
            Some(category) if !category.is_empty() => item.category == *category,
            _ => true,
        };
        matches_search && matches_category
    }

    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, str::is_empty)
            && self.category.as_deref().map_or(true, str::is_empty)
    }
}

pub fn filter_items<'a>(items: &'a [Item], filter: &ItemFilter) -> Vec<&'a Item> {
    items.iter().filter(|item| filter.matches(item)).collect()
}
