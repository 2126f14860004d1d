//! CLI command definitions and handlers.

mod phrase;

use clap::{Parser, Subcommand};
pub use phrase::{CheckCommand, ConnectCommand, GenerateCommand};

/// Paperphrase - recovery phrase entry CLI.
#[derive(Parser)]
#[command(name = "paperphrase")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available phrase commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a fresh random 12-word phrase.
    #[command(name = "generate", alias = "gen")]
    Generate(GenerateCommand),

    /// Check a phrase word-by-word against the wordlist.
    #[command(name = "check")]
    Check(CheckCommand),

    /// Validate a phrase and emit the host connection payload.
    #[command(name = "connect")]
    Connect(ConnectCommand),
}
