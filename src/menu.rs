use crate::models::MenuItem;

/// The fixed menu. Items are defined once at startup and never mutated;
/// insertion order is display order.
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Menu { items }
    }

    /// The standard counter menu.
    pub fn standard() -> Self {
        let entries = [
            ("idli", "Idli", 6.0),
            ("dosa", "Dosa", 25.0),
            ("vada", "Vada", 7.0),
            ("poori", "Poori", 60.0),
            ("pongal", "Pongal", 80.0),
            ("tea", "Tea", 20.0),
            ("coffee", "Coffee", 35.0),
        ];

        Menu::new(
            entries
                .into_iter()
                .map(|(id, name, price)| MenuItem {
                    id: id.to_string(),
                    name: name.to_string(),
                    price,
                })
                .collect(),
        )
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.id.as_str())
    }
}
