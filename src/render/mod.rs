//! Rendering Module
//!
//! Turns a [`crate::search::types::SearchResultPage`] into server-rendered
//! HTML. All user-controlled text goes through [`escape::escape_html`], and
//! the boot payload through [`escape::safe_serialize`].
//!
//! ## Submodules
//! - **`escape`**: HTML escaping, script-safe JSON and price formatting.
//! - **`page`**: Full document and body fragment rendering.

pub mod escape;
pub mod page;
