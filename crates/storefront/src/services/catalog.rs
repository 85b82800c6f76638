//! Product catalog.
//!
//! Local stand-in for the upstream catalog collaborator: a read-only,
//! in-memory product list. Products are read-only to the state core; carts
//! snapshot them and never write back.

use rust_decimal::Decimal;

use lumina_core::{CurrencyCode, Price, Product, ProductId};

/// Read-only product catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog over the given products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The demo catalog the storefront ships with.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(demo_products())
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories, in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category.as_str()) {
                seen.push(product.category.as_str());
            }
        }
        seen
    }
}

fn usd(cents: i64) -> Price {
    Price::new(Decimal::new(cents, 2), CurrencyCode::USD)
}

/// Demo products: minimalist hardware and software accessories.
fn demo_products() -> Vec<Product> {
    let entries: [(&str, &str, &str, i64, &str, u32); 6] = [
        (
            "p-keyboard",
            "Aurora Mechanical Keyboard",
            "Low-profile 75% board with hot-swappable switches and a milled aluminum case.",
            12999,
            "keyboards",
            24,
        ),
        (
            "p-mouse",
            "Drift Wireless Mouse",
            "Lightweight 58g mouse with a flawless sensor and a week of battery.",
            5999,
            "accessories",
            40,
        ),
        (
            "p-hub",
            "Pulse USB-C Hub",
            "Eight ports in anodized aluminum, with 100W passthrough charging.",
            4999,
            "accessories",
            31,
        ),
        (
            "p-light",
            "Halo Desk Lamp",
            "Bias lighting bar with automatic color temperature tracking.",
            7499,
            "lighting",
            12,
        ),
        (
            "p-mat",
            "Lumen Desk Mat",
            "Stitched-edge mat in muted wool felt, sized for keyboard and mouse.",
            2499,
            "desk",
            60,
        ),
        (
            "p-stand",
            "Nimbus Laptop Stand",
            "Folding stand in recycled aluminum, stable up to 16-inch laptops.",
            3999,
            "desk",
            0,
        ),
    ];

    entries
        .into_iter()
        .map(|(id, name, description, cents, category, stock)| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            description: description.to_owned(),
            price: usd(cents),
            image: format!("/images/{id}.jpg"),
            category: category.to_owned(),
            stock,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog_lookup() {
        let catalog = Catalog::demo();
        assert!(!catalog.list().is_empty());

        let keyboard = catalog.get(&ProductId::new("p-keyboard")).unwrap();
        assert_eq!(keyboard.price.to_string(), "$129.99");
    }

    #[test]
    fn test_get_unknown_product() {
        let catalog = Catalog::demo();
        assert!(catalog.get(&ProductId::new("p-ghost")).is_none());
    }

    #[test]
    fn test_categories_deduped_in_order() {
        let catalog = Catalog::demo();
        let categories = catalog.categories();

        assert_eq!(categories, ["keyboards", "accessories", "lighting", "desk"]);
    }
}
