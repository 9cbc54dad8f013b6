//! Vehicle Catalog Module
//!
//! The read-only data source the search routine runs over. A catalog is
//! constructed explicitly at startup and injected into the HTTP layer; the
//! search code never reaches for process-wide state.
//!
//! ## Submodules
//! - **`memory`**: [`memory::InMemoryCatalog`], backed by the demo fixture or a JSON file.

pub mod memory;

use crate::search::types::VehicleRecord;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;


#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid price {price} for vehicle {id} in {path}")]
    InvalidPrice { path: PathBuf, id: String, price: f64 },

    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Source of searchable vehicles.
///
/// Fetching is async so a store-backed catalog can slot in; the in-memory
/// one resolves immediately. Implementations return the full catalog in
/// its canonical ("relevance") order.
#[async_trait]
pub trait VehicleCatalog: Send + Sync {
    async fn vehicles(&self) -> Result<Arc<[VehicleRecord]>, CatalogError>;

    /// Short description for startup logs.
    fn describe(&self) -> String;
}
