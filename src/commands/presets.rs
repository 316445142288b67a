//! tabsync presets コマンド

use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use serde::Serialize;
use tabsync::preset::Preset;

#[derive(Debug, Parser)]
pub struct Args {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct PresetRow {
    name: &'static str,
    description: &'static str,
    tabs: Vec<String>,
    items: usize,
    offset: i32,
    app_bar: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    let rows: Vec<PresetRow> = Preset::all().into_iter().map(row).collect();

    if args.json {
        let json = serde_json::to_string_pretty(&rows).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Name", "Tabs", "Items", "Offset", "App bar", "Description"]);
    for row in &rows {
        table.add_row(vec![
            row.name.to_string(),
            row.tabs.join(", "),
            row.items.to_string(),
            row.offset.to_string(),
            if row.app_bar { "yes" } else { "no" }.to_string(),
            row.description.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn row(preset: Preset) -> PresetRow {
    let feed = preset.feed();
    PresetRow {
        name: preset.name(),
        description: preset.description(),
        tabs: feed
            .tab_ranges()
            .iter()
            .map(|range| range.title().to_string())
            .collect(),
        items: feed.items().len(),
        offset: feed.offset,
        app_bar: feed.app_bar,
    }
}
