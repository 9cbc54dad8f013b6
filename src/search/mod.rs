//! Search Module
//!
//! The core shared by every presentation adapter: the URL state codec and
//! the filter/sort/paginate routine over a vehicle catalog.
//!
//! ## Submodules
//! - **`engine`**: Filtering, price sorting and page windowing.
//! - **`state`**: Query string <-> [`types::SearchState`] conversion with a canonical order.
//! - **`types`**: Value types and JSON shapes for API and boot payloads.

pub mod engine;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
