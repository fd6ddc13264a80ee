use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod output;

#[derive(Parser)]
#[command(
    name = "huella",
    version,
    about = "Track carbon savings from everyday transport choices"
)]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    format: output::OutputFormat,

    /// Directory holding the config and the action log
    #[arg(long, global = true, default_value = ".huella")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: commands::Commands,
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        commands::Commands::Init(args) => commands::init::run(args, &cli.data_dir),
        commands::Commands::Calculate(args) => {
            commands::calculate::run(args, &cli.data_dir, cli.format)
        }
        commands::Commands::Record(args) => commands::record::run(args, &cli.data_dir, cli.format),
        commands::Commands::Log(args) => commands::log::run(args, &cli.data_dir, cli.format),
        commands::Commands::Factors => commands::factors::run(&cli.data_dir, cli.format),
        commands::Commands::Stats => commands::stats::run(&cli.data_dir, cli.format),
    }
}
