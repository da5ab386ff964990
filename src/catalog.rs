//! The product data model and the catalog shipped with the app.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One selectable size and the surcharge it adds to the base price.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SizeOption {
    pub name: String,
    pub additional_price: f64,
}

/// A single catalog record.
///
/// `colors` and `sizes` are guaranteed non-empty by [`load_embedded`]; the
/// card seeds its selection from their first entries.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    /// Slug that image references are built from.
    pub name: String,
    pub title: String,
    pub base_price: f64,
    pub colors: Vec<String>,
    pub sizes: Vec<SizeOption>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product {id} has no sizes")]
    NoSizes { id: u32 },
    #[error("product {id} has no colors")]
    NoColors { id: u32 },
}

const EMBEDDED_CATALOG: &str = include_str!("../assets/products.json");

/// Parses the embedded catalog, rejecting records the card cannot render.
pub fn load_embedded() -> Result<Vec<Product>, CatalogError> {
    parse(EMBEDDED_CATALOG)
}

fn parse(raw: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(raw)?;
    for product in &products {
        if product.sizes.is_empty() {
            return Err(CatalogError::NoSizes { id: product.id });
        }
        if product.colors.is_empty() {
            return Err(CatalogError::NoColors { id: product.id });
        }
    }
    Ok(products)
}
