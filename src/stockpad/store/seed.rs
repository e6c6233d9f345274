use crate::model::{Category, Item};

/// Sample categories installed on first boot.
pub fn sample_categories() -> Vec<Category> {
    [
        (1, "Electronics", "📱", "Electronic devices and accessories"),
        (2, "Furniture", "🪑", "Office furniture"),
        (3, "Stationery", "✏️", "Writing and office supplies"),
        (4, "Food", "🍔", "Food and beverage products"),
    ]
    .into_iter()
    .map(|(id, name, icon, description)| Category {
        id,
        name: name.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
    })
    .collect()
}

/// Sample items installed on first boot. Every item references a sample category.
pub fn sample_items() -> Vec<Item> {
    [
        (1, "ELK001", "Laptop Dell XPS 13", "Electronics", 15, 5, 15_000_000.0, "Premium business laptop"),
        (2, "FRN001", "Ergonomic Office Chair", "Furniture", 25, 10, 2_500_000.0, "Chair with adjustable back support"),
        (3, "ATK001", "Pilot Pen", "Stationery", 3, 20, 5_000.0, "Blue ink pen, 0.7mm"),
        (4, "ELK002", "Logitech Wireless Mouse", "Electronics", 45, 15, 250_000.0, "Wireless mouse with long battery life"),
        (5, "MKN001", "Premium Arabica Coffee", "Food", 100, 30, 150_000.0, "Highland arabica coffee"),
    ]
    .into_iter()
    .map(
        |(id, code, name, category, stock, min_stock, price, description)| Item {
            id,
            code: code.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            stock,
            min_stock,
            price,
            description: description.to_string(),
        },
    )
    .collect()
}
