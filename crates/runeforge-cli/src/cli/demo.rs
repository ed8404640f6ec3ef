//! Sample session.
//!
//! Builds "Li Yiu", a level 20 Hero on the dexterity playstyle, then prints
//! weapon suggestions for the strength and dexterity playstyles. Each step
//! is independent: a failure is logged and the next step still runs.

use anyhow::Result;

use runeforge_types::character::CreateProfileRequest;

use crate::state::AppState;

const DEMO_PLAYSTYLE: &str = "dexterity";
const SUGGESTION_PLAYSTYLES: [&str; 2] = ["strength", "dexterity"];

fn demo_request() -> CreateProfileRequest {
    CreateProfileRequest {
        name: "Li Yiu".to_string(),
        level: 20,
        class_name: "Hero".to_string(),
    }
}

pub async fn run_demo(state: &AppState, json: bool) -> Result<()> {
    let build = state.advisor.plan_build(&demo_request(), DEMO_PLAYSTYLE).await;

    let mut suggestions = Vec::with_capacity(SUGGESTION_PLAYSTYLES.len());
    for playstyle in SUGGESTION_PLAYSTYLES {
        suggestions.push((playstyle, state.advisor.suggest_for_playstyle(playstyle).await));
    }

    if json {
        let build = match &build {
            Ok(plan) => serde_json::to_value(plan)?,
            Err(err) => serde_json::json!({ "error": err.to_string() }),
        };
        let mut by_playstyle = serde_json::Map::new();
        for (playstyle, result) in &suggestions {
            let value = match result {
                Ok(rec) => serde_json::to_value(rec)?,
                Err(err) => serde_json::json!({ "error": err.to_string() }),
            };
            by_playstyle.insert(playstyle.to_string(), value);
        }
        let output = serde_json::json!({ "build": build, "suggestions": by_playstyle });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match &build {
        Ok(plan) => super::build::print_plan(plan, false)?,
        Err(err) => tracing::error!("Error: {err}"),
    }

    for (playstyle, result) in &suggestions {
        match result {
            Ok(rec) => super::suggest::print_recommendation(state, rec, false)?,
            Err(err) => tracing::error!(playstyle, "Weapon suggestion failed: {err}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{hero_entry, sample_weapons, state_with, WeaponsDown};

    use runeforge_core::catalog::memory::StaticCatalog;

    #[tokio::test]
    async fn test_demo_runs_suggestions_after_failed_build() {
        let state = state_with(StaticCatalog::new(vec![], sample_weapons()));

        assert!(state
            .advisor
            .plan_build(&demo_request(), DEMO_PLAYSTYLE)
            .await
            .is_err());
        assert_eq!(
            state
                .advisor
                .suggest_for_playstyle("dexterity")
                .await
                .unwrap()
                .weapons
                .len(),
            2
        );
        run_demo(&state, false).await.unwrap();
        run_demo(&state, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_demo_succeeds_when_weapon_fetch_fails() {
        let state = state_with(WeaponsDown::new(vec![hero_entry()]));

        assert!(state
            .advisor
            .plan_build(&demo_request(), DEMO_PLAYSTYLE)
            .await
            .is_ok());
        run_demo(&state, false).await.unwrap();
        run_demo(&state, true).await.unwrap();
    }

    #[tokio::test]
    async fn test_demo_with_everything_down() {
        let state = state_with(WeaponsDown::new(vec![]));
        run_demo(&state, false).await.unwrap();
    }
}
