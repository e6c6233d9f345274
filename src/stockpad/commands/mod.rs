use crate::config::StockConfig;
use crate::error::{Result, StockError};
use crate::model::{Category, Item, Theme};
use crate::views::{CategoryStats, DashboardSummary, InventoryTotals};
use std::path::PathBuf;

pub mod categories;
pub mod config;
pub mod create;
pub mod dashboard;
pub mod delete;
pub mod list;
pub mod report;
pub mod theme;
pub mod update;

#[derive(Debug, Clone)]
pub struct StockPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A category together with how many items reference it.
#[derive(Debug, Clone)]
pub struct CategoryEntry {
    pub category: Category,
    pub item_count: usize,
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub summary: DashboardSummary,
    pub recent: Vec<Item>,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub totals: InventoryTotals,
    pub top_category: Option<String>,
    pub critical_item: Option<Item>,
    pub rows: Vec<CategoryStats>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub categories: Vec<CategoryEntry>,
    pub dashboard: Option<Dashboard>,
    pub report: Option<Report>,
    pub config: Option<StockConfig>,
    pub theme: Option<Theme>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_categories(mut self, categories: Vec<CategoryEntry>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: StockConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// True when any message is an error notification.
    pub fn has_errors(&self) -> bool {
        self.messages.iter().any(|m| m.level == MessageLevel::Error)
    }
}

/// Approval for a destructive action. Returns true to proceed.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F: FnMut(&str) -> bool + ?Sized> Confirm for F {
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// Approves everything, for `--yes` and scripted use.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}

/// Turn a domain failure into an error notification; backend failures propagate.
pub(crate) fn notify(err: StockError) -> Result<CmdResult> {
    if !err.is_recoverable() {
        return Err(err);
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(err.to_string()));
    Ok(result)
}
