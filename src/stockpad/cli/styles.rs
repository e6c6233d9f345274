use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use stockpad::model::{StockBadge, Theme};

pub type Palette = HashMap<&'static str, Style>;

/// Style names used by the templates.
pub mod names {
    pub const TITLE: &str = "title";
    pub const HEADING: &str = "heading";
    pub const LABEL: &str = "label";
    pub const MUTED: &str = "muted";
    pub const ID: &str = "id";
    pub const VALUE: &str = "value";
    pub const BADGE_OUT: &str = "badge_out";
    pub const BADGE_LOW: &str = "badge_low";
    pub const BADGE_OK: &str = "badge_ok";
    pub const MSG_INFO: &str = "msg_info";
    pub const MSG_SUCCESS: &str = "msg_success";
    pub const MSG_WARNING: &str = "msg_warning";
    pub const MSG_ERROR: &str = "msg_error";
}

static DARK: Lazy<Palette> = Lazy::new(|| {
    HashMap::from([
        (names::TITLE, Style::new().bold().cyan()),
        (names::HEADING, Style::new().bold()),
        (names::LABEL, Style::new().dim()),
        (names::MUTED, Style::new().dim().italic()),
        (names::ID, Style::new().yellow()),
        (names::VALUE, Style::new().green()),
        (names::BADGE_OUT, Style::new().red().bold()),
        (names::BADGE_LOW, Style::new().yellow()),
        (names::BADGE_OK, Style::new().green()),
        (names::MSG_INFO, Style::new().dim()),
        (names::MSG_SUCCESS, Style::new().green()),
        (names::MSG_WARNING, Style::new().yellow()),
        (names::MSG_ERROR, Style::new().red()),
    ])
});

static LIGHT: Lazy<Palette> = Lazy::new(|| {
    HashMap::from([
        (names::TITLE, Style::new().bold().blue()),
        (names::HEADING, Style::new().bold().black()),
        (names::LABEL, Style::new().color256(242)),
        (names::MUTED, Style::new().color256(244).italic()),
        (names::ID, Style::new().color256(130)),
        (names::VALUE, Style::new().color256(28)),
        (names::BADGE_OUT, Style::new().red().bold()),
        (names::BADGE_LOW, Style::new().color256(166)),
        (names::BADGE_OK, Style::new().color256(28)),
        (names::MSG_INFO, Style::new().color256(242)),
        (names::MSG_SUCCESS, Style::new().color256(28)),
        (names::MSG_WARNING, Style::new().color256(166)),
        (names::MSG_ERROR, Style::new().red()),
    ])
});

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &*DARK,
        Theme::Light => &*LIGHT,
    }
}

pub fn badge_style(badge: StockBadge) -> &'static str {
    match badge {
        StockBadge::OutOfStock => names::BADGE_OUT,
        StockBadge::LowStock => names::BADGE_LOW,
        StockBadge::InStock => names::BADGE_OK,
    }
}
