//! Catalog access abstractions.
//!
//! - `CatalogSource`: RPITIT trait for concrete catalog backends
//! - `BoxCatalogSource`: object-safe wrapper for runtime backend selection
//! - `StaticCatalog`: in-memory source

pub mod box_source;
pub mod memory;
pub mod source;
