//! # Rendering Module
//!
//! Styled terminal output via minijinja templates (see `templates.rs`) and
//! `console` styles (see `styles.rs`).
//!
//! Layout calculations (column widths, truncation, padding) stay in Rust because
//! they require Unicode-aware processing. Templates handle presentation: which
//! style a value gets and how sections are laid out.

use super::styles::{badge_style, names, palette, Palette};
use super::templates;
use minijinja::{Environment, Value};
use serde::Serialize;
use stockpad::api::{CategoryEntry, CmdMessage, Dashboard, MessageLevel, Report};
use stockpad::model::{Item, Theme};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Longest item name shown in tables before truncation.
const NAME_WIDTH: usize = 32;

pub struct Renderer {
    env: Environment<'static>,
    currency: String,
}

#[derive(Serialize)]
struct ItemRow {
    id: String,
    code: String,
    name: String,
    category: String,
    stock: String,
    price: String,
    badge: String,
    badge_style: &'static str,
}

#[derive(Serialize)]
struct ItemsData {
    header: String,
    rows: Vec<ItemRow>,
    empty_message: String,
}

#[derive(Serialize)]
struct DashboardData<'a> {
    summary: &'a stockpad::views::DashboardSummary,
    low_stock_style: &'static str,
    total_value: String,
    header: String,
    rows: Vec<ItemRow>,
}

#[derive(Serialize)]
struct ItemDetailData<'a> {
    item: &'a Item,
    badge: String,
    badge_style: &'static str,
    price: String,
    value: String,
}

#[derive(Serialize)]
struct CategoryData {
    id: String,
    icon: String,
    name: String,
    description: String,
    count_label: String,
}

#[derive(Serialize)]
struct CategoriesData {
    entries: Vec<CategoryData>,
}

#[derive(Serialize)]
struct ReportRow {
    category: String,
    count: String,
    total_stock: String,
    average_price: String,
    total_value: String,
}

#[derive(Serialize)]
struct ReportData {
    critical_item: String,
    top_category: String,
    total_stock: u64,
    average_price: String,
    header: String,
    rows: Vec<ReportRow>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

impl Renderer {
    pub fn new(theme: Theme, use_color: bool, currency: &str) -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        register_style_filter(&mut env, palette(theme), use_color);
        for (name, source) in templates::ALL {
            env.add_template(name, source)?;
        }
        Ok(Self {
            env,
            currency: currency.to_string(),
        })
    }

    fn render<T: Serialize>(&self, name: &str, data: &T) -> String {
        self.env
            .get_template(name)
            .and_then(|tmpl| tmpl.render(data))
            .unwrap_or_else(|e| format!("Render error: {}\n", e))
    }

    pub fn dashboard(&self, dashboard: &Dashboard) -> String {
        let (header, rows) = self.item_table(&dashboard.recent);
        let low_stock_style = if dashboard.summary.low_stock_count > 0 {
            names::BADGE_LOW
        } else {
            names::BADGE_OK
        };
        self.render(
            "dashboard",
            &DashboardData {
                summary: &dashboard.summary,
                low_stock_style,
                total_value: self.money(dashboard.summary.total_value),
                header,
                rows,
            },
        )
    }

    pub fn items(&self, items: &[Item], empty_message: &str) -> String {
        let (header, rows) = self.item_table(items);
        self.render(
            "items",
            &ItemsData {
                header,
                rows,
                empty_message: empty_message.to_string(),
            },
        )
    }

    pub fn item_detail(&self, item: &Item) -> String {
        let badge = item.badge();
        self.render(
            "item_detail",
            &ItemDetailData {
                item,
                badge: badge.to_string(),
                badge_style: badge_style(badge),
                price: self.money(item.price),
                value: self.money(item.value()),
            },
        )
    }

    pub fn categories(&self, entries: &[CategoryEntry]) -> String {
        let name_width = entries
            .iter()
            .map(|e| e.category.name.width())
            .max()
            .unwrap_or(0);
        let entries = entries
            .iter()
            .map(|e| CategoryData {
                id: format!("{:>3}", e.category.id),
                icon: e.category.icon.clone(),
                name: pad_to_width(&e.category.name, name_width),
                description: if e.category.description.is_empty() {
                    "No description".to_string()
                } else {
                    e.category.description.clone()
                },
                count_label: match e.item_count {
                    1 => "1 item".to_string(),
                    n => format!("{} items", n),
                },
            })
            .collect();
        self.render("categories", &CategoriesData { entries })
    }

    pub fn report(&self, report: &Report) -> String {
        let headers = ["CATEGORY", "ITEMS", "STOCK", "AVG PRICE", "VALUE"];
        let cells: Vec<[String; 5]> = report
            .rows
            .iter()
            .map(|row| {
                [
                    row.category.clone(),
                    row.count.to_string(),
                    row.total_stock.to_string(),
                    self.money(row.average_price()),
                    self.money(row.total_value),
                ]
            })
            .collect();
        let widths = column_widths(&headers, &cells);
        let rows = cells
            .iter()
            .map(|c| ReportRow {
                category: pad_to_width(&c[0], widths[0]),
                count: pad_left(&c[1], widths[1]),
                total_stock: pad_left(&c[2], widths[2]),
                average_price: pad_left(&c[3], widths[3]),
                total_value: pad_left(&c[4], widths[4]),
            })
            .collect();

        self.render(
            "report",
            &ReportData {
                critical_item: report
                    .critical_item
                    .as_ref()
                    .map(|i| format!("{} ({} left)", i.name, i.stock))
                    .unwrap_or_else(|| "-".to_string()),
                top_category: report.top_category.clone().unwrap_or_else(|| "-".to_string()),
                total_stock: report.totals.total_stock,
                average_price: self.money(report.totals.average_price),
                header: header_line(&headers, &widths),
                rows,
            },
        )
    }

    pub fn messages(&self, messages: &[&CmdMessage]) -> String {
        let messages = messages
            .iter()
            .map(|m| MessageData {
                content: m.content.clone(),
                style: match m.level {
                    MessageLevel::Info => names::MSG_INFO,
                    MessageLevel::Success => names::MSG_SUCCESS,
                    MessageLevel::Warning => names::MSG_WARNING,
                    MessageLevel::Error => names::MSG_ERROR,
                },
            })
            .collect();
        self.render("messages", &MessagesData { messages })
    }

    fn item_table(&self, items: &[Item]) -> (String, Vec<ItemRow>) {
        let headers = ["ID", "CODE", "NAME", "CATEGORY", "STOCK", "PRICE", "STATUS"];
        let cells: Vec<[String; 7]> = items
            .iter()
            .map(|item| {
                [
                    item.id.to_string(),
                    item.code.clone(),
                    truncate_to_width(&item.name, NAME_WIDTH),
                    item.category.clone(),
                    item.stock.to_string(),
                    self.money(item.price),
                    item.badge().to_string(),
                ]
            })
            .collect();
        let widths = column_widths(&headers, &cells);

        let rows = items
            .iter()
            .zip(cells.iter())
            .map(|(item, c)| ItemRow {
                id: pad_left(&c[0], widths[0]),
                code: pad_to_width(&c[1], widths[1]),
                name: pad_to_width(&c[2], widths[2]),
                category: pad_to_width(&c[3], widths[3]),
                stock: pad_left(&c[4], widths[4]),
                price: pad_left(&c[5], widths[5]),
                badge: c[6].clone(),
                badge_style: badge_style(item.badge()),
            })
            .collect();
        (header_line(&headers, &widths), rows)
    }

    fn money(&self, value: f64) -> String {
        format_money(value, &self.currency)
    }
}

/// Registers the `style` filter on a minijinja environment.
fn register_style_filter(env: &mut Environment<'static>, palette: &'static Palette, use_color: bool) {
    env.add_filter("style", move |value: Value, name: String| -> String {
        let text = value.to_string();
        match palette.get(name.as_str()) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text,
        }
    });
}

fn column_widths<const N: usize>(headers: &[&str; N], cells: &[[String; N]]) -> [usize; N] {
    let mut widths = [0usize; N];
    for (width, header) in widths.iter_mut().zip(headers.iter()) {
        *width = header.width();
    }
    for row in cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }
    widths
}

fn header_line<const N: usize>(headers: &[&str; N], widths: &[usize; N]) -> String {
    headers
        .iter()
        .zip(widths.iter())
        .map(|(h, w)| pad_to_width(h, *w))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", " ".repeat(padding), s)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Whole-unit amount with `.` thousands separators, e.g. `Rp 15.000.000`.
pub fn format_money(value: f64, symbol: &str) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if symbol.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{} {}", sign, symbol, grouped)
    }
}
