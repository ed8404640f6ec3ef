//! Character build command.

use anyhow::Result;
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use runeforge_core::service::advisor::BuildPlan;
use runeforge_types::character::CreateProfileRequest;

use crate::state::AppState;

/// Build a character, apply the playstyle, print the result and optionally
/// the matching weapon suggestions.
///
/// A failed weapon fetch is logged and does not discard the build.
pub async fn build(
    state: &AppState,
    request: CreateProfileRequest,
    playstyle: &str,
    suggest: bool,
    json: bool,
) -> Result<()> {
    let plan = state.advisor.plan_build(&request, playstyle).await?;

    if !suggest {
        return print_plan(&plan, json);
    }

    if json {
        let suggestions = match state.advisor.suggest_weapons(&plan.scaling_token).await {
            Ok(rec) => serde_json::to_value(&rec)?,
            Err(err) => serde_json::json!({ "error": err.to_string() }),
        };
        let output = serde_json::json!({
            "build": plan,
            "suggestions": suggestions,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_plan(&plan, false)?;
    match state.advisor.suggest_weapons(&plan.scaling_token).await {
        Ok(rec) => super::suggest::print_recommendation(state, &rec, false),
        Err(err) => {
            tracing::error!(token = %plan.scaling_token, "Weapon suggestion failed: {err}");
            Ok(())
        }
    }
}

/// Print a build plan: introduction plus a base/growth/final stat table.
pub fn print_plan(plan: &BuildPlan, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(plan)?);
        return Ok(());
    }

    println!();
    println!("  {}", style(plan.profile.introduction()).bold());
    println!(
        "  {}  {}   {}  {}",
        style("Playstyle:").bold(),
        style(&plan.playstyle).cyan(),
        style("Weapons scale with:").bold(),
        style(&plan.scaling_token).yellow()
    );
    println!();

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Stat").fg(Color::White),
        Cell::new("Base").fg(Color::White),
        Cell::new("Growth").fg(Color::White),
        Cell::new("Total").fg(Color::White),
    ]);

    for ((stat, base), (_, total)) in plan.base_stats.iter().zip(plan.profile.stats.iter()) {
        let growth = total - base;
        let growth_cell = if growth > 0 {
            Cell::new(format!("+{growth}")).fg(Color::Green)
        } else {
            Cell::new("0").fg(Color::DarkGrey)
        };
        table.add_row(vec![
            Cell::new(stat.key()),
            Cell::new(base).set_alignment(CellAlignment::Right),
            growth_cell.set_alignment(CellAlignment::Right),
            Cell::new(total)
                .fg(Color::Cyan)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    println!("{table}");
    println!();

    Ok(())
}
