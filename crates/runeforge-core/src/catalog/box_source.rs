//! BoxCatalogSource -- object-safe dynamic dispatch wrapper for CatalogSource.
//!
//! 1. `CatalogSourceDyn` is an object-safe mirror of the trait with boxed futures
//! 2. Blanket-impl `CatalogSourceDyn` for all `T: CatalogSource`
//! 3. `BoxCatalogSource` wraps `Box<dyn CatalogSourceDyn>`, delegates, and
//!    implements `CatalogSource` itself so services can be generic over it

use std::future::Future;
use std::pin::Pin;

use runeforge_types::character::ClassEntry;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::Weapon;

use super::source::CatalogSource;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Object-safe version of [`CatalogSource`] with boxed futures.
pub trait CatalogSourceDyn: Send + Sync {
    fn name(&self) -> &str;

    fn fetch_classes_boxed(&self) -> BoxFuture<'_, Result<Vec<ClassEntry>, CatalogError>>;

    fn fetch_weapons_boxed(&self) -> BoxFuture<'_, Result<Vec<Weapon>, CatalogError>>;
}

impl<T: CatalogSource> CatalogSourceDyn for T {
    fn name(&self) -> &str {
        CatalogSource::name(self)
    }

    fn fetch_classes_boxed(&self) -> BoxFuture<'_, Result<Vec<ClassEntry>, CatalogError>> {
        Box::pin(self.fetch_classes())
    }

    fn fetch_weapons_boxed(&self) -> BoxFuture<'_, Result<Vec<Weapon>, CatalogError>> {
        Box::pin(self.fetch_weapons())
    }
}

/// Type-erased catalog source for runtime selection (live API vs snapshot).
pub struct BoxCatalogSource {
    inner: Box<dyn CatalogSourceDyn>,
}

impl BoxCatalogSource {
    pub fn new<T: CatalogSource + 'static>(source: T) -> Self {
        Self {
            inner: Box::new(source),
        }
    }
}

impl CatalogSource for BoxCatalogSource {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch_classes(&self) -> Result<Vec<ClassEntry>, CatalogError> {
        self.inner.fetch_classes_boxed().await
    }

    async fn fetch_weapons(&self) -> Result<Vec<Weapon>, CatalogError> {
        self.inner.fetch_weapons_boxed().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::StaticCatalog;

    #[tokio::test]
    async fn test_box_delegates_to_inner_source() {
        let inner = StaticCatalog::new(
            vec![ClassEntry {
                name: "Hero".to_string(),
                description: None,
                stats: Default::default(),
            }],
            Vec::new(),
        );
        let boxed = BoxCatalogSource::new(inner);

        assert_eq!(CatalogSource::name(&boxed), "static");
        let classes = boxed.fetch_classes().await.unwrap();
        assert_eq!(classes.len(), 1);
        assert_eq!(classes[0].name, "Hero");
        assert!(boxed.fetch_weapons().await.unwrap().is_empty());
    }
}
