//! Command-line flags.

use clap::{ArgAction, Parser};
use persopass::entropy::Source;
use persopass::pass::Strength;
use persopass::settings::MAX_BATCH;

/// Build memorable passwords from personal details.
///
/// Run without identity flags in a terminal to fill in the interactive form.
#[derive(Debug, Parser)]
#[command(name = "persopass", version)]
pub struct Args {
    /// First name; its first three letters are used.
    #[arg(short = 'f', long)]
    pub first_name: Option<String>,

    /// Last name; its first three letters are used.
    #[arg(short = 'L', long)]
    pub last_name: Option<String>,

    /// Birth date as YYYY-MM-DD or DD-MM-YYYY.
    #[arg(short = 'd', long, value_name = "DATE")]
    pub birth_date: Option<String>,

    /// Lucky number, used verbatim.
    #[arg(short = 'k', long, value_name = "NUMBER")]
    pub lucky_number: Option<String>,

    /// Password length (6-15).
    #[arg(short, long)]
    pub length: Option<usize>,

    /// normal, medium or strong: 1, 2 or 3 random digits and symbols.
    #[arg(short, long)]
    pub strength: Option<Strength>,

    /// Number of passwords to generate.
    #[arg(
        short,
        long,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_BATCH as u64),
    )]
    pub number: Option<usize>,

    /// Copy to the clipboard instead of printing.
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Append to a file (a directory gets persopass.txt).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Draw randomness from the operating system.
    #[arg(short, long, overrides_with = "no_urandom")]
    pub urandom: bool,

    /// Use the CPU timer mixer even if `--urandom` was saved.
    #[arg(long, overrides_with = "urandom")]
    pub no_urandom: bool,

    /// Seed for reproducible output.
    #[arg(long, conflicts_with = "urandom")]
    pub seed: Option<u64>,

    /// Print each password's fragments before and after shuffling.
    #[arg(long)]
    pub explain: bool,

    /// Save length, strength, number and source as defaults.
    #[arg(long)]
    pub save: bool,

    /// Suppress warnings and confirmations.
    #[arg(short, long)]
    pub quiet: bool,

    /// More log output (repeatable). PERSOPASS_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// No identity given on the command line.
    pub fn wants_form(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.birth_date.is_none()
            && self.lucky_number.is_none()
    }

    /// Explicit source flags win over the saved `urandom` default.
    pub fn source(&self, saved_urandom: bool) -> Source {
        match self.seed {
            Some(seed) => Source::Seeded(seed),
            None if self.urandom || (saved_urandom && !self.no_urandom) => Source::Urandom,
            None => Source::Hardware,
        }
    }
}
