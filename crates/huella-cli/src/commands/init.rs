use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use huella_core::config::Settings;
use huella_core::ledger::JsonStore;

use super::{ACTIONS_FILE, CONFIG_FILE};

#[derive(Args)]
pub struct InitArgs {
    /// Overwrite an existing config with the defaults
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs, data_dir: &Path) -> Result<()> {
    let config_path = data_dir.join(CONFIG_FILE);

    if config_path.exists() && !args.force {
        println!("Huella is already initialized in {}.", data_dir.display());
        println!("Use --force to reset the config to the defaults.");
        return Ok(());
    }

    fs::create_dir_all(data_dir)
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    Settings::default_init()
        .save(&config_path)
        .context("Failed to write config")?;

    // An existing action log is never clobbered, even with --force.
    JsonStore::create(&data_dir.join(ACTIONS_FILE)).context("Failed to create the action log")?;

    println!("Huella initialized in {}.", data_dir.display());
    println!();
    println!("Next steps:");
    println!("  huella record --mode bicicleta --distance 10   Record a trip");
    println!("  huella log                                     List recent actions");
    println!("  huella factors                                 Show emission factors");
    Ok(())
}
