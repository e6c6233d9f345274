//! Output templates, kept as stand-alone files and embedded at compile time.
//!
//! Templates are minijinja based and rendered with `trim_blocks`, `lstrip_blocks`
//! and `keep_trailing_newline`, so each line a template prints is a line of
//! output and block tags never leave blank lines behind. Column layout is
//! computed in Rust; templates only pick styles.

pub const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.tmp");
pub const ITEMS_TEMPLATE: &str = include_str!("templates/items.tmp");
pub const ITEM_ROW_TEMPLATE: &str = include_str!("templates/item_row.tmp");
pub const ITEM_DETAIL_TEMPLATE: &str = include_str!("templates/item_detail.tmp");
pub const CATEGORIES_TEMPLATE: &str = include_str!("templates/categories.tmp");
pub const REPORT_TEMPLATE: &str = include_str!("templates/report.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");

/// Name/source pairs registered on the rendering environment.
pub const ALL: [(&str, &str); 7] = [
    ("dashboard", DASHBOARD_TEMPLATE),
    ("items", ITEMS_TEMPLATE),
    ("item_row", ITEM_ROW_TEMPLATE),
    ("item_detail", ITEM_DETAIL_TEMPLATE),
    ("categories", CATEGORIES_TEMPLATE),
    ("report", REPORT_TEMPLATE),
    ("messages", MESSAGES_TEMPLATE),
];
