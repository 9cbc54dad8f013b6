//! Vehicle Search Library
//!
//! This library crate defines the core modules of the vehicle search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is one pure core with thin presentation adapters around it:
//!
//! - **`search`**: The core. A URL state codec with a canonical parameter order,
//!   and a filter/sort/paginate routine over a catalog slice.
//! - **`catalog`**: The read-only data source. Constructed explicitly and injected,
//!   so the search routine has no hidden dependency on process-wide state.
//! - **`render`**: Server-side HTML rendering, including the script-safe boot
//!   payload used for client-side re-hydration.
//! - **`server`**: Axum routes (JSON API, full page, partial fragment), shared
//!   request state and command line configuration.

pub mod catalog;
pub mod render;
pub mod search;
pub mod server;
