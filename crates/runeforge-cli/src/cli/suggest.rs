//! Weapon suggestion command.

use anyhow::Result;
use console::style;

use runeforge_core::advisor::recommend::Recommendation;

use crate::state::AppState;

/// Suggest weapons by playstyle slug or by raw token.
pub async fn suggest(
    state: &AppState,
    playstyle: Option<&str>,
    token: Option<&str>,
    json: bool,
) -> Result<()> {
    let recommendation = match (token, playstyle) {
        (Some(token), _) => state.advisor.suggest_weapons(token).await?,
        (None, Some(playstyle)) => state.advisor.suggest_for_playstyle(playstyle).await?,
        (None, None) => anyhow::bail!("either a playstyle or --token is required"),
    };

    print_recommendation(state, &recommendation, json)
}

/// Print every suggested weapon report, or "No weapons found".
pub fn print_recommendation(state: &AppState, recommendation: &Recommendation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(recommendation)?);
        return Ok(());
    }

    let grades = state.advisor.grade_filter().grades().join("/");
    println!();
    println!(
        "  {} Weapons scaling with {} at grade {}",
        style("⚔").bold(),
        style(&recommendation.token).yellow(),
        style(grades).yellow()
    );
    println!();

    for line in recommendation.to_string().lines() {
        println!("  {line}");
    }
    println!();

    if recommendation.is_empty() {
        return Ok(());
    }
    println!(
        "  {} weapon(s) found",
        style(recommendation.weapons.len()).bold()
    );
    println!();

    Ok(())
}
