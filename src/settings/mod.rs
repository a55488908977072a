//! Persisted generation defaults.

mod file;

use std::env;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::pass::Strength;

/// Most passwords one run will generate.
pub const MAX_BATCH: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub pass_length: usize,
    pub strength: Strength,
    pub number_of_passwords: usize,
    pub urandom: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        Self::load_from(&default_path())
    }

    pub fn save_to_file(&self) -> Result<()> {
        self.save_to(&default_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let mut settings = Settings::default();
        file::load(&mut settings, path)?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        file::save(self, path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pass_length: 12,
            strength: Strength::Normal,
            number_of_passwords: 1,
            urandom: false,
        }
    }
}

/// `$HOME/.config/persopass/settings`, falling back to the working directory.
pub fn default_path() -> PathBuf {
    let home = env::var_os("HOME").unwrap_or_else(|| ".".into());
    PathBuf::from(home).join(".config/persopass/settings")
}
