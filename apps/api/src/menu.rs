//! # Menu Seed Data
//!
//! The hard-coded KnightShop Cafe menu. There is no persistence layer; this
//! is the in-memory catalog the server boots with, loaded exactly once and
//! then read-only for the life of the process.

use knight_core::catalog::{CatalogItem, PriceCatalog};

/// Builds the seed catalog.
pub fn seed_catalog() -> PriceCatalog {
    PriceCatalog::from_items(seed_items())
}

fn item(id: &str, name: &str, description: &str, price_cents: i64) -> CatalogItem {
    CatalogItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price_cents,
    }
}

/// The cafe menu. Prices are cents; the API converts to decimal for display.
fn seed_items() -> Vec<CatalogItem> {
    vec![
        item(
            "prod_espresso",
            "Espresso",
            "Double shot, dark roast",
            275,
        ),
        item(
            "prod_americano",
            "Americano",
            "Espresso over hot water",
            325,
        ),
        item(
            "prod_latte",
            "Caffe Latte",
            "Espresso with steamed milk",
            450,
        ),
        item(
            "prod_cappuccino",
            "Cappuccino",
            "Equal parts espresso, milk, foam",
            425,
        ),
        item(
            "prod_mocha",
            "Mocha",
            "Espresso, chocolate, steamed milk",
            495,
        ),
        item(
            "prod_coldbrew",
            "Cold Brew",
            "Slow-steeped overnight, served over ice",
            475,
        ),
        item(
            "prod_chai",
            "Chai Latte",
            "Spiced black tea with steamed milk",
            435,
        ),
        item(
            "prod_croissant",
            "Butter Croissant",
            "Baked fresh every morning",
            350,
        ),
        item(
            "prod_muffin",
            "Blueberry Muffin",
            "With a crumble top",
            325,
        ),
        item(
            "prod_bagel",
            "Sesame Bagel",
            "Toasted, with cream cheese",
            295,
        ),
    ]
}
