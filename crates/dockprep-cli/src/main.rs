mod cli;
mod commands;
mod error;
mod logging;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("\n❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("dockprep CLI v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match cli.command {
        Commands::Seq(args) => commands::seq::run(args),
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Combine(args) => commands::combine::run(args),
        Commands::Clean(args) => commands::clean::run(args),
        Commands::Smiles(args) => commands::smiles::run(args),
        Commands::Score(args) => commands::score::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
