use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use huella_core::ledger::ListOptions;

use crate::commands::open_ledger;
use crate::output::OutputFormat;

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ledger = open_ledger(data_dir)?;
    let records = ledger
        .list(&ListOptions::default())
        .context("Failed to list actions")?;

    if records.is_empty() {
        println!("No actions recorded yet.");
        return Ok(());
    }

    let total = records.len();
    let mut total_saved: f64 = 0.0;
    let mut pct_sum: u64 = 0;
    let mut by_mode: BTreeMap<String, (usize, f64)> = BTreeMap::new();
    let mut by_category: BTreeMap<String, (usize, f64)> = BTreeMap::new();

    // Records arrive most recent first.
    let latest = records.first().map(|r| r.created_at);
    let earliest = records.last().map(|r| r.created_at);

    for r in &records {
        total_saved += r.saved_co2_kg;
        pct_sum += u64::from(r.reduction_pct);

        let entry = by_mode.entry(r.mode.clone()).or_default();
        entry.0 += 1;
        entry.1 += r.saved_co2_kg;

        let entry = by_category.entry(r.category.clone()).or_default();
        entry.0 += 1;
        entry.1 += r.saved_co2_kg;
    }

    let avg_reduction = pct_sum as f64 / total as f64;

    match format {
        OutputFormat::Json => {
            let stats = serde_json::json!({
                "total_actions": total,
                "total_saved_co2_kg": total_saved,
                "average_reduction_pct": avg_reduction,
                "earliest": earliest,
                "latest": latest,
                "by_mode": by_mode.iter().map(|(mode, (count, saved))| {
                    serde_json::json!({
                        "mode": mode,
                        "count": count,
                        "saved_co2_kg": saved,
                    })
                }).collect::<Vec<_>>(),
                "by_category": by_category.iter().map(|(category, (count, saved))| {
                    serde_json::json!({
                        "category": category,
                        "count": count,
                        "saved_co2_kg": saved,
                    })
                }).collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text => {
            println!("Huella Statistics");
            println!("=================");
            println!("Total actions:   {total}");
            println!("Total saved:     {total_saved:.2} kg CO2");
            println!("Avg reduction:   {avg_reduction:.0}%");
            if let (Some(e), Some(l)) = (earliest, latest) {
                println!(
                    "Date range:      {} to {}",
                    e.format("%Y-%m-%d"),
                    l.format("%Y-%m-%d")
                );
            }
            println!();

            println!("By Mode:");
            for (mode, (count, saved)) in &by_mode {
                println!("  {mode}: {count} actions, {saved:.2} kg CO2 saved");
            }
            println!();

            println!("By Category:");
            for (category, (count, saved)) in &by_category {
                println!("  {category}: {count} actions, {saved:.2} kg CO2 saved");
            }
        }
    }

    Ok(())
}
