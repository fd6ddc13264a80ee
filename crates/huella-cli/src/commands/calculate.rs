use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use huella_sdk::TripSession;

use crate::commands::load_settings;
use crate::output::format::format_result;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct CalculateArgs {
    /// Transport mode key (auto, moto, bus, tren, bicicleta, caminata)
    #[arg(short, long)]
    pub mode: String,

    /// Distance travelled in kilometers (common presets: 1, 5, 10, 20)
    #[arg(short, long)]
    pub distance: f64,

    /// Category label for the trip
    #[arg(long, default_value = "transporte")]
    pub category: String,

    /// Override the configured baseline factor (kg CO2 per km)
    #[arg(long)]
    pub baseline: Option<f64>,
}

pub fn run(args: &CalculateArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let settings = load_settings(data_dir)?;

    if !settings.factors.contains(&args.mode) {
        tracing::warn!("Mode '{}' has no configured factor, treating as zero-emission", args.mode);
    }

    let mut session = TripSession::begin(&settings.default_user);
    session
        .category(&args.category)
        .mode(&args.mode)
        .distance_km(args.distance)
        .factor_baseline(args.baseline.unwrap_or(settings.factor_baseline))
        .factors(settings.factors.clone());

    let result = session.calculate().context("Invalid trip")?;
    print!("{}", format_result(&result, format));
    Ok(())
}
