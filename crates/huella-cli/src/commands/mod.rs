pub mod calculate;
pub mod factors;
pub mod init;
pub mod log;
pub mod record;
pub mod stats;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use huella_core::config::Settings;
use huella_core::ledger::Ledger;

pub const CONFIG_FILE: &str = "config.json";
pub const ACTIONS_FILE: &str = "actions.json";

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a data directory for tracking actions
    Init(init::InitArgs),
    /// Compute savings for a trip without recording it
    Calculate(calculate::CalculateArgs),
    /// Compute savings for a trip and append it to the action log
    Record(record::RecordArgs),
    /// List recorded actions (most recent first)
    Log(log::LogArgs),
    /// Show the emission factor table and the calculation formula
    Factors,
    /// Show aggregate statistics across all recorded actions
    Stats,
}

/// Settings from the data directory, or the built-in defaults when no
/// config file exists yet.
pub fn load_settings(data_dir: &Path) -> Result<Settings> {
    let path = data_dir.join(CONFIG_FILE);
    if path.exists() {
        Settings::load(&path).with_context(|| format!("Failed to read {}", path.display()))
    } else {
        Ok(Settings::default_init())
    }
}

pub fn open_ledger(data_dir: &Path) -> Result<Ledger> {
    let path = data_dir.join(ACTIONS_FILE);
    if !path.exists() {
        anyhow::bail!("Huella is not initialized. Run `huella init` first.");
    }
    Ledger::open_json(&path).context("Failed to open the action log")
}
