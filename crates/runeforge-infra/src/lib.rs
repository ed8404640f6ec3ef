//! Infrastructure layer for Runeforge.
//!
//! Implements the `CatalogSource` port from `runeforge-core` over the public
//! fan API (reqwest) and over saved snapshot files, and loads `config.toml`.

pub mod config;
pub mod fanapi;
pub mod snapshot;
