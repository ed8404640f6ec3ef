//! BuildAdvisorService -- the explicit entry point for build advice.
//!
//! Takes a player description and a playstyle choice and returns data; the
//! caller decides how to print it. Profile building and weapon suggestion are
//! independent calls that each fetch their own catalog, so one failing does
//! not prevent the other.

use std::sync::Arc;

use serde::Serialize;

use runeforge_types::character::{CharacterClass, CharacterProfile, CreateProfileRequest};
use runeforge_types::error::{AdvisorError, CatalogError, ProfileError};
use runeforge_types::playstyle::Playstyle;
use runeforge_types::stats::StatBlock;

use crate::advisor::allocation::apply_playstyle;
use crate::advisor::recommend::{GradeFilter, Recommendation, WeaponAdvisor};
use crate::advisor::registry::PlaystyleRegistry;
use crate::catalog::source::CatalogSource;
use crate::profile::builder::ProfileBuilder;

/// A built character with a playstyle applied.
#[derive(Debug, Clone, Serialize)]
pub struct BuildPlan {
    /// Stats copied from the class, before growth.
    pub base_stats: StatBlock,
    pub profile: CharacterProfile,
    pub playstyle: String,
    /// Token to use for weapon suggestions ("Str", "Dex", ...).
    pub scaling_token: String,
}

/// Build advisor over one catalog source.
pub struct BuildAdvisorService<C: CatalogSource> {
    profiles: ProfileBuilder<C>,
    weapons: WeaponAdvisor<C>,
    playstyles: PlaystyleRegistry,
}

impl<C: CatalogSource> BuildAdvisorService<C> {
    pub fn new(catalog: C, playstyles: PlaystyleRegistry, filter: GradeFilter) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            profiles: ProfileBuilder::new(Arc::clone(&catalog)),
            weapons: WeaponAdvisor::new(catalog, filter),
            playstyles,
        }
    }

    pub fn playstyles(&self) -> &PlaystyleRegistry {
        &self.playstyles
    }

    pub fn grade_filter(&self) -> &GradeFilter {
        self.weapons.filter()
    }

    pub async fn list_classes(&self) -> Result<Vec<CharacterClass>, ProfileError> {
        self.profiles.list_classes().await
    }

    /// Build a profile without applying any playstyle.
    pub async fn create_profile(
        &self,
        request: &CreateProfileRequest,
    ) -> Result<CharacterProfile, ProfileError> {
        self.profiles.build(request).await
    }

    /// Build a profile and grow it under the playstyle named `playstyle`.
    ///
    /// The playstyle is resolved before any catalog fetch, so an unknown
    /// slug fails without network traffic.
    pub async fn plan_build(
        &self,
        request: &CreateProfileRequest,
        playstyle: &str,
    ) -> Result<BuildPlan, AdvisorError> {
        let playstyle = self.playstyles.get(playstyle)?;
        let mut profile = self.profiles.build(request).await?;
        let base_stats = profile.stats;

        apply_playstyle(playstyle, &mut profile);

        Ok(BuildPlan {
            base_stats,
            profile,
            playstyle: playstyle.slug.clone(),
            scaling_token: playstyle.scaling_token().to_string(),
        })
    }

    /// Apply an already-resolved playstyle to an existing profile.
    pub fn apply(&self, playstyle: &Playstyle, profile: &mut CharacterProfile) {
        apply_playstyle(playstyle, profile);
    }

    /// Weapon suggestions for a raw filter token.
    pub async fn suggest_weapons(&self, token: &str) -> Result<Recommendation, CatalogError> {
        self.weapons.suggest(token).await
    }

    /// Weapon suggestions for the stat the named playstyle scales with.
    pub async fn suggest_for_playstyle(&self, playstyle: &str) -> Result<Recommendation, AdvisorError> {
        let token = self.playstyles.get(playstyle)?.scaling_token();
        Ok(self.weapons.suggest(token).await?)
    }
}
