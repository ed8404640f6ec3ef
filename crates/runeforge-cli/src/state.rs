//! Application state wiring the advisor service to a catalog backend.
//!
//! The service is generic over its catalog; AppState pins it to a
//! [`BoxCatalogSource`] so the live API and offline snapshots share one type.

use std::path::{Path, PathBuf};

use runeforge_core::advisor::recommend::GradeFilter;
use runeforge_core::advisor::registry::PlaystyleRegistry;
use runeforge_core::catalog::box_source::BoxCatalogSource;
use runeforge_core::service::advisor::BuildAdvisorService;
use runeforge_infra::config::{load_advisor_config, resolve_data_dir};
use runeforge_infra::fanapi::FanApiCatalog;
use runeforge_infra::snapshot::SnapshotCatalog;

pub type ConcreteAdvisorService = BuildAdvisorService<BoxCatalogSource>;

pub struct AppState {
    pub advisor: ConcreteAdvisorService,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Load config and pick the catalog backend: snapshot files when
    /// `offline` is given, the HTTP API otherwise.
    pub async fn init(offline: Option<&Path>) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_advisor_config(&data_dir).await;

        let catalog = match offline {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Using catalog snapshot");
                BoxCatalogSource::new(SnapshotCatalog::new(dir))
            }
            None => {
                tracing::info!(base_url = %config.catalog.base_url, "Using catalog API");
                BoxCatalogSource::new(FanApiCatalog::new(&config.catalog)?)
            }
        };

        let playstyles = PlaystyleRegistry::from_config(&config.playstyles)?;
        let filter = GradeFilter::new(config.recommendation.accepted_grades.clone());
        let advisor = BuildAdvisorService::new(catalog, playstyles, filter);

        Ok(Self { advisor, data_dir })
    }
}
