// src/catalog/query.rs - Catalog query engine: pagination, search, sorting

//! Resolves the visible product slice for the products page.
//!
//! Two mutually exclusive regimes exist and must never be mixed in one render:
//! without a search term, the backend's slice and counts are authoritative and
//! pass through verbatim; with a search term, filtering and pagination run over
//! the client-held set and the backend's counts are ignored. The regime is
//! carried in the result as a tagged `PaginationMode` so rendering code
//! branches on the tag instead of ambient flags.

use serde::{Deserialize, Serialize};

use super::Product;

/// Sort orders the backend understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    #[default]
    Popularity,
    PriceLow,
    PriceHigh,
    Rating,
    Views,
}

impl SortBy {
    /// Wire value for the `sortBy` query parameter
    pub fn as_param(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::PriceLow => "price-low",
            Self::PriceHigh => "price-high",
            Self::Rating => "rating",
            Self::Views => "views",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Popularity => "Most Popular",
            Self::PriceLow => "Price: Low to High",
            Self::PriceHigh => "Price: High to Low",
            Self::Rating => "Top Rated",
            Self::Views => "Most Viewed",
        }
    }

    pub const ALL: [SortBy; 5] = [
        Self::Popularity,
        Self::PriceLow,
        Self::PriceHigh,
        Self::Rating,
        Self::Views,
    ];
}

/// One catalog request as the user has configured it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogQuery {
    /// 0-indexed page
    pub page: usize,
    /// Products per page, > 0
    pub limit: usize,
    pub sort_by: SortBy,
    pub category: Option<String>,
    pub search_term: Option<String>,
}

impl CatalogQuery {
    pub fn new(limit: usize, sort_by: SortBy) -> Self {
        Self {
            page: 0,
            // limit is a divisor in the client-paged page count
            limit: limit.max(1),
            sort_by,
            category: None,
            search_term: None,
        }
    }

    pub fn is_searching(&self) -> bool {
        self.search_term
            .as_deref()
            .is_some_and(|t| !t.trim().is_empty())
    }

    /// Switches search mode on or off. Crossing the boundary in either
    /// direction resets the page so the new regime never starts from an
    /// out-of-range slice.
    pub fn with_search(mut self, term: Option<String>) -> Self {
        let was_searching = self.is_searching();
        self.search_term = term.filter(|t| !t.trim().is_empty());
        if was_searching != self.is_searching() {
            self.page = 0;
        }
        self
    }

    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self.page = 0;
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self.page = 0;
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

/// Which counting scheme produced the pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaginationMode {
    /// Backend-declared slice and counts; the client did not re-sort or
    /// re-filter anything
    ServerPaged {
        page: usize,
        total_pages: usize,
        total_count: usize,
    },
    /// Counts computed over the client-held filtered set
    ClientPaged {
        page: usize,
        total_pages: usize,
        total_count: usize,
    },
}

impl PaginationMode {
    pub fn page(&self) -> usize {
        match *self {
            Self::ServerPaged { page, .. } | Self::ClientPaged { page, .. } => page,
        }
    }

    pub fn total_pages(&self) -> usize {
        match *self {
            Self::ServerPaged { total_pages, .. } | Self::ClientPaged { total_pages, .. } => {
                total_pages
            }
        }
    }

    pub fn total_count(&self) -> usize {
        match *self {
            Self::ServerPaged { total_count, .. } | Self::ClientPaged { total_count, .. } => {
                total_count
            }
        }
    }
}

/// A page as the backend returned it: an already sorted and sliced product
/// list plus its own pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ServerPage {
    pub products: Vec<Product>,
    pub total_count: usize,
    pub total_pages: usize,
}

/// The resolved slice plus the metadata the pager should render
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub products: Vec<Product>,
    pub mode: PaginationMode,
}

/// Resolves what the products page shows for `query` given the most recently
/// fetched server page.
pub fn resolve(loaded: &ServerPage, query: &CatalogQuery) -> CatalogView {
    if !query.is_searching() {
        // Server-paginated regime: the slice is authoritative, including its
        // ordering and tie-breaks. No local re-sort, no local re-filter.
        return CatalogView {
            products: loaded.products.clone(),
            mode: PaginationMode::ServerPaged {
                page: query.page,
                total_pages: loaded.total_pages,
                total_count: loaded.total_count,
            },
        };
    }

    let term = query.search_term.as_deref().unwrap_or("");
    let filtered: Vec<&Product> = loaded
        .products
        .iter()
        .filter(|p| matches_search(p, term))
        .collect();

    let total_count = filtered.len();
    let total_pages = total_count.div_ceil(query.limit);

    let start = query.page.saturating_mul(query.limit);
    let products = filtered
        .into_iter()
        .skip(start)
        .take(query.limit)
        .cloned()
        .collect();

    CatalogView {
        products,
        mode: PaginationMode::ClientPaged {
            page: query.page,
            total_pages,
            total_count,
        },
    }
}

/// Case-insensitive substring match against name, description, and category name
pub fn matches_search(product: &Product, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(&needle)
        || product.description.to_lowercase().contains(&needle)
        || product.category.name.to_lowercase().contains(&needle)
}

/// The ordering contract the backend applies per `SortBy`, as a stable local
/// sort. The engine never runs this over a server slice; it exists for the
/// seller-side product table and to pin the contract down in tests.
pub fn sort_products(products: &mut [Product], sort_by: SortBy) {
    match sort_by {
        SortBy::PriceLow => {
            products.sort_by(|a, b| a.price.partial_cmp(&b.price).unwrap_or(std::cmp::Ordering::Equal))
        }
        SortBy::PriceHigh => {
            products.sort_by(|a, b| b.price.partial_cmp(&a.price).unwrap_or(std::cmp::Ordering::Equal))
        }
        SortBy::Rating => products.sort_by(|a, b| {
            b.average_rating()
                .partial_cmp(&a.average_rating())
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        SortBy::Views => products.sort_by(|a, b| b.views.cmp(&a.views)),
        SortBy::Popularity => products.sort_by(|a, b| {
            b.popularity
                .partial_cmp(&a.popularity)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }
}
