//! Settings file persistence.
//!
//! One line: `length,strength,number,urandom`.

use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{debug, warn};

use super::{MAX_BATCH, Settings};
use crate::error::{Error, Result};

const DELIMITER: char = ',';
const FIELD_COUNT: usize = 4;

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    let wrap = |source: std::io::Error| Error::Settings {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(wrap)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(wrap)?;

    let data = format!(
        "{},{},{},{}\n",
        settings.pass_length, settings.strength, settings.number_of_passwords, settings.urandom,
    );

    file.write_all(data.as_bytes()).map_err(wrap)?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

/// Load into `settings`. A missing or malformed file is rewritten with the
/// values `settings` already holds.
pub fn load(settings: &mut Settings, path: &Path) -> Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let wrap = |source: std::io::Error| Error::Settings {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new().read(true).open(path).map_err(wrap)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line).map_err(wrap)?;

    let parts: Vec<&str> = line.trim_end_matches(['\n', '\r']).split(DELIMITER).collect();
    if parts.len() != FIELD_COUNT {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, restoring defaults"
        );
        return save(settings, path);
    }

    settings.pass_length = parts[0].parse().unwrap_or(settings.pass_length);
    settings.strength = parts[1].parse().unwrap_or(settings.strength);
    settings.number_of_passwords = parts[2]
        .parse()
        .ok()
        .filter(|n| (1..=MAX_BATCH).contains(n))
        .unwrap_or(settings.number_of_passwords);
    settings.urandom = parts[3].parse().unwrap_or(settings.urandom);
    Ok(())
}
