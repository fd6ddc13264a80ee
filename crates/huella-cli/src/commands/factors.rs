use std::path::Path;

use anyhow::Result;

use huella_core::model::TRANSPORT_MODES;

use crate::commands::load_settings;
use crate::output::OutputFormat;

pub fn run(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let settings = load_settings(data_dir)?;

    match format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "factor_baseline": settings.factor_baseline,
                "factors": settings.factors,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("Emission factors (kg CO2 per km)");
            println!("================================");
            for (key, factor) in settings.factors.iter() {
                let display = TRANSPORT_MODES
                    .iter()
                    .find(|m| m.key == key)
                    .map(|m| format!("{} {}", m.icon, m.label))
                    .unwrap_or_else(|| key.to_string());
                println!("  {display:<14} {factor} kg/km");
            }
            println!();
            println!("Formula:");
            println!(
                "  baseline_co2 = distance * {} (average car)",
                settings.factor_baseline
            );
            println!("  mode_co2 = distance * mode_factor");
            println!("  saved_co2 = baseline_co2 - mode_co2");
            println!("  reduction_pct = (saved_co2 / baseline_co2) * 100");
            println!();
            println!("Factors are editable in {}/config.json.", data_dir.display());
        }
    }

    Ok(())
}
