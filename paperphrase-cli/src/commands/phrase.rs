//! Phrase entry CLI commands (generate / check / connect).

use clap::Args;
use colored::Colorize;
use paperphrase::{HostBridge, PhraseBuilder, SlotStatus, Wordlist, PHRASE_WORDS};

/// Generate a fresh random 12-word phrase.
#[derive(Args)]
pub struct GenerateCommand {
    /// Print the phrase as a single line instead of a numbered grid.
    #[arg(short, long)]
    oneline: bool,
}

impl GenerateCommand {
    /// Execute the generate command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let mut builder = PhraseBuilder::new(Wordlist::english());
        builder.regenerate()?;

        if self.oneline {
            println!("{}", *builder.phrase());
        } else {
            print_phrase_grid(&builder);
        }
        Ok(())
    }
}

/// Check a phrase word-by-word against the wordlist.
#[derive(Args)]
pub struct CheckCommand {
    /// Recovery phrase, quoted as a single argument.
    #[arg(short, long)]
    phrase: String,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let builder = builder_from_phrase(&self.phrase)?;
        print_check_result(&builder);
        Ok(())
    }
}

/// Validate a phrase and emit the host connection payload.
#[derive(Args)]
pub struct ConnectCommand {
    /// Recovery phrase, quoted as a single argument.
    #[arg(short, long)]
    phrase: String,
}

impl ConnectCommand {
    /// Execute the connect command.
    ///
    /// Submission is gated here, in the caller: the builder itself will
    /// forward whatever the slots hold.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let builder = builder_from_phrase(&self.phrase)?;
        if !builder.is_phrase_valid() {
            print_check_result(&builder);
            return Err("phrase is not valid, refusing to connect".into());
        }

        let mut bridge = StdoutBridge;
        builder.submit(&mut bridge)?;
        Ok(())
    }
}

/// Bridge that writes the serialized host payload to stdout, for piping
/// into whatever consumes it.
struct StdoutBridge;

impl HostBridge for StdoutBridge {
    fn invoke(&mut self, payload: &str) {
        println!("{payload}");
    }
}

/// Fill a builder's slots from a whitespace-separated phrase string.
fn builder_from_phrase(phrase: &str) -> Result<PhraseBuilder, Box<dyn std::error::Error>> {
    let words: Vec<&str> = phrase.split_whitespace().collect();
    if words.len() > PHRASE_WORDS {
        return Err(format!(
            "phrase has {} words, expected at most {PHRASE_WORDS}",
            words.len()
        )
        .into());
    }

    let mut builder = PhraseBuilder::new(Wordlist::english());
    for (i, word) in words.iter().enumerate() {
        builder.set_slot(i, *word)?;
    }
    Ok(builder)
}

/// Display a generated phrase as a numbered grid.
#[rustfmt::skip]
fn print_phrase_grid(builder: &PhraseBuilder) {
    println!();
    for (i, word) in builder.slots().iter().enumerate() {
        let label = format!("{:>2}.", i + 1);
        println!("      {}  {}", label.as_str().cyan().bold(), word);
    }
    println!();
    println!("      {}  write these words down on paper, in order", "Note".yellow().bold());
    println!();
}

/// Display per-slot validity the way the entry screen paints its labels.
#[rustfmt::skip]
fn print_check_result(builder: &PhraseBuilder) {
    println!();
    for i in 0..PHRASE_WORDS {
        let label = format!("{:>2}.", i + 1);
        match builder.slot_status(i) {
            Some(SlotStatus::Valid) => {
                println!("      {}  {}", label.as_str().cyan().bold(), builder.slot(i).unwrap_or("").green());
            }
            Some(SlotStatus::Invalid) => {
                println!("      {}  {}", label.as_str().cyan().bold(), builder.slot(i).unwrap_or("").red());
            }
            Some(SlotStatus::Empty) | None => {
                println!("      {}  {}", label.as_str().cyan().bold(), "(empty)".dimmed());
            }
        }
    }
    println!();
    let verdict = if builder.is_phrase_valid() {
        "all 12 words valid".green().bold()
    } else {
        "phrase incomplete or invalid".red().bold()
    };
    println!("      {}       {verdict}", "Status".cyan().bold());
    println!();
}
