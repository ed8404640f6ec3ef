//! Elden Ring fan API catalog adapter.

pub mod client;
pub mod types;

pub use client::FanApiCatalog;
