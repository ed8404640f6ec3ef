//! Playstyle listing.

use anyhow::Result;
use comfy_table::{presets, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

use runeforge_types::stats::Stat;

use crate::state::AppState;

/// List registered playstyles: weights per stat and the scaling token used
/// for weapon suggestions.
pub fn list_playstyles(state: &AppState, json: bool) -> Result<()> {
    let playstyles = state.advisor.playstyles().list();

    if json {
        let entries: Vec<_> = playstyles
            .iter()
            .map(|p| {
                serde_json::json!({
                    "slug": p.slug,
                    "name": p.name,
                    "weights": p.weights,
                    "scaling_stat": p.scaling_stat(),
                    "scaling_token": p.scaling_token(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![
        Cell::new("Slug").fg(Color::White),
        Cell::new("Name").fg(Color::White),
    ];
    header.extend(Stat::ALL.iter().map(|s| Cell::new(s.abbreviation()).fg(Color::White)));
    header.push(Cell::new("Scales").fg(Color::White));
    table.set_header(header);

    for playstyle in playstyles {
        let mut row = vec![
            Cell::new(&playstyle.slug).fg(Color::Cyan),
            Cell::new(&playstyle.name),
        ];
        row.extend(playstyle.weights.iter().map(|(_, weight)| {
            Cell::new(format!("{:.0}%", weight * 100.0)).set_alignment(CellAlignment::Right)
        }));
        row.push(Cell::new(playstyle.scaling_token()).fg(Color::Yellow));
        table.add_row(row);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  Custom playstyles: {}",
        style(state.data_dir.join("config.toml").display()).dim()
    );
    println!();

    Ok(())
}
