use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use huella_sdk::TripSession;

use crate::commands::{load_settings, open_ledger};
use crate::output::format::format_record;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct RecordArgs {
    /// Transport mode key (auto, moto, bus, tren, bicicleta, caminata)
    #[arg(short, long)]
    pub mode: String,

    /// Distance travelled in kilometers (common presets: 1, 5, 10, 20)
    #[arg(short, long)]
    pub distance: f64,

    /// Category label for the trip
    #[arg(long, default_value = "transporte")]
    pub category: String,

    /// Attribute the action to this user instead of the configured default
    #[arg(long)]
    pub user: Option<String>,
}

pub fn run(args: &RecordArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let settings = load_settings(data_dir)?;
    let ledger = open_ledger(data_dir)?;

    if !settings.factors.contains(&args.mode) {
        tracing::warn!("Mode '{}' has no configured factor, treating as zero-emission", args.mode);
    }

    let user = args.user.as_deref().unwrap_or(&settings.default_user);
    let mut session = TripSession::begin(user);
    session
        .category(&args.category)
        .mode(&args.mode)
        .distance_km(args.distance)
        .factor_baseline(settings.factor_baseline)
        .factors(settings.factors.clone());

    let record = session.commit_to(&ledger).context("Failed to record the trip")?;
    print!("{}", format_record(&record, format));
    Ok(())
}
