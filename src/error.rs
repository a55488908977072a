//! Error type shared by the library and the binary.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("password length must be greater than zero")]
    ZeroLength,

    #[error("please fill in all required fields (missing {0})")]
    MissingField(&'static str),

    #[error("length must be a number between {min} and {max}, got `{value}`")]
    LengthOutOfRange {
        value: String,
        min: usize,
        max: usize,
    },

    #[error("lucky number cannot be negative or contain non-digits: `{0}`")]
    InvalidLuckyNumber(String),

    #[error("invalid birth date `{0}`, expected YYYY-MM-DD or DD-MM-YYYY")]
    InvalidBirthDate(String),

    #[error("birth date {0} cannot be in the future")]
    FutureBirthDate(String),

    #[error("unknown strength `{0}`, expected normal, medium or strong")]
    UnknownStrength(String),

    #[error("settings file {}: {source}", path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output file {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("clipboard: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}
