use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Icon used for categories created without one.
pub const DEFAULT_CATEGORY_ICON: &str = "📦";

/// A tracked inventory record.
///
/// Field names follow the persisted layout (`minStock` on the wire), so data
/// written by older clients loads unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub min_stock: u32,
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

impl Item {
    /// Value of the stock on hand.
    pub fn value(&self) -> f64 {
        f64::from(self.stock) * self.price
    }

    pub fn badge(&self) -> StockBadge {
        StockBadge::for_item(self)
    }

    pub fn is_low_stock(&self) -> bool {
        self.stock <= self.min_stock
    }
}

/// Fields for a new item. The id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub code: String,
    pub name: String,
    pub category: String,
    pub stock: u32,
    pub min_stock: u32,
    pub price: f64,
    pub description: String,
}

impl NewItem {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            category: category.into(),
            stock: 0,
            min_stock: 0,
            price: 0.0,
            description: String::new(),
        }
    }

    pub fn stock(mut self, stock: u32, min_stock: u32) -> Self {
        self.stock = stock;
        self.min_stock = min_stock;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn into_item(self, id: u64) -> Item {
        Item {
            id,
            code: self.code,
            name: self.name,
            category: self.category,
            stock: self.stock,
            min_stock: self.min_stock,
            price: self.price,
            description: self.description,
        }
    }
}

/// Partial update for an item: only the `Some` fields are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub code: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub stock: Option<u32>,
    pub min_stock: Option<u32>,
    pub price: Option<f64>,
    pub description: Option<String>,
}

impl ItemPatch {
    pub fn is_empty(&self) -> bool {
        *self == ItemPatch::default()
    }

    pub(crate) fn apply(self, item: &mut Item) {
        if let Some(code) = self.code {
            item.code = code;
        }
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(stock) = self.stock {
            item.stock = stock;
        }
        if let Some(min_stock) = self.min_stock {
            item.min_stock = min_stock;
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
    }
}

/// A named grouping that items reference by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub icon: String,
    pub description: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: String::new(),
            description: String::new(),
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub(crate) fn into_category(self, id: u64) -> Category {
        let icon = if self.icon.trim().is_empty() {
            DEFAULT_CATEGORY_ICON.to_string()
        } else {
            self.icon
        };
        Category {
            id,
            name: self.name,
            icon,
            description: self.description,
        }
    }
}

/// Tri-state stock classification. Stock equal to the minimum counts as low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StockBadge {
    OutOfStock,
    LowStock,
    InStock,
}

impl StockBadge {
    pub fn for_item(item: &Item) -> Self {
        if item.stock == 0 {
            StockBadge::OutOfStock
        } else if item.stock <= item.min_stock {
            StockBadge::LowStock
        } else {
            StockBadge::InStock
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockBadge::OutOfStock => "Out of stock",
            StockBadge::LowStock => "Low stock",
            StockBadge::InStock => "In stock",
        }
    }
}

impl fmt::Display for StockBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation preference persisted under the `theme` key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("Unknown theme: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: u32, min_stock: u32) -> Item {
        NewItem::new("X1", "Thing", "Misc")
            .stock(stock, min_stock)
            .into_item(1)
    }

    #[test]
    fn badge_boundaries() {
        assert_eq!(item(0, 0).badge(), StockBadge::OutOfStock);
        assert_eq!(item(0, 5).badge(), StockBadge::OutOfStock);
        assert_eq!(item(3, 5).badge(), StockBadge::LowStock);
        assert_eq!(item(5, 5).badge(), StockBadge::LowStock);
        assert_eq!(item(6, 5).badge(), StockBadge::InStock);
        assert_eq!(item(1, 0).badge(), StockBadge::InStock);
    }

    #[test]
    fn patch_merges_only_given_fields() {
        let mut it = item(10, 2);
        ItemPatch {
            name: Some("Renamed".into()),
            stock: Some(4),
            ..Default::default()
        }
        .apply(&mut it);

        assert_eq!(it.name, "Renamed");
        assert_eq!(it.stock, 4);
        assert_eq!(it.min_stock, 2);
        assert_eq!(it.code, "X1");
    }

    #[test]
    fn empty_icon_gets_placeholder() {
        let cat = NewCategory::new("Tools").icon("  ").into_category(1);
        assert_eq!(cat.icon, DEFAULT_CATEGORY_ICON);

        let cat = NewCategory::new("Tools").icon("🔧").into_category(2);
        assert_eq!(cat.icon, "🔧");
    }

    #[test]
    fn item_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&item(3, 20)).unwrap();
        assert!(json.contains("\"minStock\":20"));

        let parsed: Item = serde_json::from_str(
            r#"{"id":7,"code":"A","name":"B","category":"C","stock":1,"minStock":2,"price":3}"#,
        )
        .unwrap();
        assert_eq!(parsed.min_stock, 2);
        assert_eq!(parsed.description, "");
    }

    #[test]
    fn theme_parsing() {
        assert_eq!("Light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
