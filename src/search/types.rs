//! Search Data Types
//!
//! Value types shared by the state codec, the search engine and every
//! presentation adapter (JSON API, rendered page, partial fragment).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordering applied to the filtered result set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Catalog order, untouched.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
}

impl SortOption {
    /// Every option, in the order the sort control lists them.
    pub const ALL: [SortOption; 3] = [
        SortOption::Relevance,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
    ];

    /// Wire name used in query strings and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceAsc => "price_asc",
            SortOption::PriceDesc => "price_desc",
        }
    }

    /// Human readable label for the sort control.
    pub fn label(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the three wire names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort option: {0}")]
pub struct UnknownSortOption(pub String);

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "relevance" => Ok(SortOption::Relevance),
            "price_asc" => Ok(SortOption::PriceAsc),
            "price_desc" => Ok(SortOption::PriceDesc),
            other => Err(UnknownSortOption(other.to_string())),
        }
    }
}

/// Normalized view of the user's query, sort and page selection.
///
/// Rebuilt from the URL on every request and never persisted. `page` is
/// always at least 1; use [`SearchState::with_page`] rather than setting
/// the field directly when the value comes from arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    #[serde(rename = "q")]
    pub query: String,
    pub page: u32,
    pub sort: SortOption,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            page: 1,
            sort: SortOption::Relevance,
        }
    }
}

impl SearchState {
    pub fn new(query: impl Into<String>, page: u32, sort: SortOption) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
            sort,
        }
    }

    /// Same query and sort, different page (clamped to 1).
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            query: self.query.clone(),
            page: page.max(1),
            sort: self.sort,
        }
    }

    pub fn next_page(&self) -> Self {
        self.with_page(self.page.saturating_add(1))
    }

    pub fn prev_page(&self) -> Self {
        self.with_page(self.page.saturating_sub(1))
    }
}

/// A single searchable vehicle in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: String,
    pub title: String,
    /// Non-negative and finite; may carry cents.
    pub price: f64,
    pub description: String,
}

/// One page of filtered, sorted results plus pagination flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultPage {
    pub results: Vec<VehicleRecord>,
    /// Number of matches across all pages.
    pub total: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Initial state embedded in a rendered page for client-side reuse.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BootState {
    pub state: SearchState,
    pub data: SearchResultPage,
}

/// Body of the JSON search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchApiResponse {
    pub state: SearchState,
    #[serde(flatten)]
    pub page: SearchResultPage,
}
