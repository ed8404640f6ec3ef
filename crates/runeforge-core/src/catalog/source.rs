//! CatalogSource trait definition.
//!
//! The seam between build logic and wherever catalog data lives. Uses native
//! async fn in traits (RPITIT); see [`BoxCatalogSource`](super::box_source::BoxCatalogSource)
//! for the object-safe wrapper.

use runeforge_types::character::ClassEntry;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::Weapon;

/// A read-only source of class and weapon catalog data.
///
/// Implementations live in runeforge-infra (HTTP API, snapshot files).
/// Every call is a fresh read; sources do not cache.
pub trait CatalogSource: Send + Sync {
    /// Short name for logs (e.g., "fanapi", "snapshot").
    fn name(&self) -> &str;

    /// Fetch every class record, in catalog order.
    fn fetch_classes(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<ClassEntry>, CatalogError>> + Send;

    /// Fetch every weapon, in catalog order.
    fn fetch_weapons(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Weapon>, CatalogError>> + Send;
}
