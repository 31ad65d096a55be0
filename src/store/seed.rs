//! Starter catalog written on first run when seeding is enabled.

use std::path::Path;
use uuid::Uuid;

use crate::models::{CatalogDocument, CatalogItem, Category};

fn category(name: &str, image: &str) -> Category {
    Category {
        name: name.to_string(),
        image: Some(image.to_string()),
    }
}

#[allow(clippy::too_many_arguments)]
fn cake(
    name: &str,
    price: f64,
    image: &str,
    category: &str,
    flavour: &str,
    weight: &str,
    short: &str,
    long: &str,
    tags: &[&str],
) -> CatalogItem {
    CatalogItem {
        id: Uuid::new_v4().to_string(),
        name: name.to_string(),
        flavour: Some(flavour.to_string()),
        categories: vec![category.to_string()],
        weight_options: vec![weight.to_string()],
        prices: vec![price],
        cut_prices: vec![0.0],
        tags: tags.iter().map(|t| t.to_string()).collect(),
        short_description: Some(short.to_string()),
        long_description: Some(long.to_string()),
        veg: Some(true),
        images: vec![image.to_string()],
    }
}

pub fn sample_catalog() -> CatalogDocument {
    CatalogDocument {
        categories: vec![
            category("Chocolate", "https://images.unsplash.com/photo-1559628233.jpg"),
            category("Wedding", "https://images.unsplash.com/photo-1543007143.jpg"),
            category("Birthday", "https://images.unsplash.com/photo-1587242900751.jpg"),
        ],
        cakes: vec![
            cake(
                "Dark Chocolate Cake",
                400.0,
                "https://images.unsplash.com/photo-1600.jpg",
                "Chocolate",
                "Dark Chocolate",
                "500g",
                "Rich dark chocolate cake",
                "A moist dark chocolate cake topped with ganache.",
                &["chocolate"],
            ),
            cake(
                "Wedding White Cake",
                1200.0,
                "https://images.unsplash.com/photo-1200.jpg",
                "Wedding",
                "Vanilla",
                "1kg",
                "Elegant wedding cake",
                "Classic multi-tiered white wedding cake.",
                &["wedding"],
            ),
            cake(
                "Kids Birthday Cake",
                600.0,
                "https://images.unsplash.com/photo-1300.jpg",
                "Birthday",
                "Vanilla",
                "500g",
                "Fun kids' birthday cake",
                "Colorful cake perfect for kids birthday parties.",
                &["kids", "birthday"],
            ),
        ],
    }
}

/// Write the sample catalog to `path` unless a catalog already exists there.
/// Returns whether anything was written.
pub fn seed_if_missing(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    super::write_document(path, &sample_catalog())?;
    tracing::info!("Seeded sample catalog at {}", path.display());
    Ok(true)
}
