// src/catalog/mod.rs - Product catalog domain types

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{ProductId, VariantLabel};

pub mod query;

pub use query::{
    matches_search, resolve, sort_products, CatalogQuery, CatalogView, PaginationMode, ServerPage,
    SortBy,
};

/// A product as served by the catalog endpoints. Read-only on the buyer side;
/// seller mutations happen through separate endpoints not modeled here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price, backend-validated to be >= 0
    pub price: f64,
    pub category: Category,
    /// Per-variant stock counts. Products without variants carry a single
    /// entry under the empty label.
    #[serde(default)]
    pub stock: BTreeMap<VariantLabel, u32>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub times_ordered: u64,
    /// Backend-computed popularity score
    #[serde(default)]
    pub popularity: f64,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Star rating in [1, 5]
    pub rating: u8,
    pub comment: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl Product {
    /// Total available stock across all variants
    pub fn total_stock(&self) -> u32 {
        self.stock.values().sum()
    }

    /// A product with all-zero variant counts is out of stock
    pub fn is_out_of_stock(&self) -> bool {
        self.total_stock() == 0
    }

    /// Whether adding to cart requires the user to pick a variant first
    pub fn requires_variant_selection(&self) -> bool {
        self.stock.keys().any(|label| !label.is_empty())
    }

    /// Stock remaining for one variant label
    pub fn stock_for(&self, variant: Option<&str>) -> u32 {
        let label = variant.unwrap_or("");
        self.stock.get(label).copied().unwrap_or(0)
    }

    /// Mean review rating; a product with no reviews rates 0
    pub fn average_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating)).sum();
        f64::from(sum) / self.reviews.len() as f64
    }
}
