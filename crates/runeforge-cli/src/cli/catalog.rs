//! Class catalog listing.

use anyhow::Result;
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use runeforge_types::stats::Stat;

use crate::state::AppState;

/// List every class with its starting level and base stats.
pub async fn list_classes(state: &AppState, json: bool) -> Result<()> {
    let classes = state.advisor.list_classes().await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&classes)?);
        return Ok(());
    }

    if classes.is_empty() {
        println!();
        println!("  {} The class catalog is empty.", style("i").blue().bold());
        println!();
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Class").fg(Color::White),
        Cell::new("Lvl").fg(Color::White),
    ];
    header.extend(Stat::ALL.iter().map(|s| Cell::new(s.abbreviation()).fg(Color::White)));
    table.set_header(header);

    for class in &classes {
        let level = class
            .starting_level
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        let mut row = vec![
            Cell::new(&class.name).fg(Color::Cyan),
            Cell::new(level).set_alignment(CellAlignment::Right),
        ];
        row.extend(
            class
                .stats
                .iter()
                .map(|(_, value)| Cell::new(value).set_alignment(CellAlignment::Right)),
        );
        table.add_row(row);
    }

    println!();
    println!("{table}");
    println!();
    println!("  {} classes", style(classes.len()).bold());
    println!();

    Ok(())
}
