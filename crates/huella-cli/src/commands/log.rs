use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use huella_core::ledger::{ListOptions, RECENT_ACTIONS_LIMIT};

use crate::commands::open_ledger;
use crate::output::format::format_action_list;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct LogArgs {
    /// Maximum number of entries
    #[arg(short = 'n', long, default_value_t = RECENT_ACTIONS_LIMIT)]
    pub limit: usize,

    /// Filter by user
    #[arg(long)]
    pub user: Option<String>,

    /// Filter by transport mode
    #[arg(long)]
    pub mode: Option<String>,
}

pub fn run(args: &LogArgs, data_dir: &Path, format: OutputFormat) -> Result<()> {
    let ledger = open_ledger(data_dir)?;

    let opts = ListOptions {
        limit: Some(args.limit),
        user_filter: args.user.clone(),
        mode_filter: args.mode.clone(),
    };
    let records = ledger.list(&opts).context("Failed to list actions")?;

    print!("{}", format_action_list(&records, format));
    Ok(())
}
