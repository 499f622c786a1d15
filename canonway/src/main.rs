mod cli;

use std::path::PathBuf;

use canonway_core::logging::init_logging;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "canonway",
    version,
    about = "Canonway: URL normalization redirect engine"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a canonway config file
    Check {
        /// Path to the canonway config file
        #[arg(long, default_value = "config/canonway.toml")]
        config: PathBuf,

        /// Plain, uncolored report output
        #[arg(long)]
        plain: bool,
    },

    /// Decide whether a request would be redirected, and to where
    Eval(cli::eval::EvalArgs),
}

fn main() {
    let cli = Cli::parse();

    init_logging();

    let result = match cli.command {
        Command::Check { config, plain } => cli::check::run(&config, plain),
        Command::Eval(args) => cli::eval::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
