//! Business logic and catalog trait definitions for Runeforge.
//!
//! This crate defines the `CatalogSource` port that the infrastructure layer
//! implements, plus profile building and build advice on top of it. It
//! depends only on `runeforge-types` -- never on `runeforge-infra` or any
//! HTTP/IO crate.

pub mod advisor;
pub mod catalog;
pub mod profile;
pub mod service;

#[cfg(test)]
mod test_support;
