//! Paperphrase - recovery phrase entry CLI.
//!
//! Generate, check, and hand off 12-word recovery phrases.

mod commands;

use clap::Parser;
use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate(cmd) => cmd.execute()?,
        Commands::Check(cmd) => cmd.execute()?,
        Commands::Connect(cmd) => cmd.execute()?,
    }
    Ok(())
}
