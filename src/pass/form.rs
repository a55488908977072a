//! Validation of raw form input.

use chrono::NaiveDate;

use super::generate::GeneratorConfig;
use super::identity::{BirthDate, IdentityInfo};
use super::strength::Strength;
use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 6;
pub const MAX_LENGTH: usize = 15;

/// Fields as typed by the user, before any checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub lucky_number: String,
    pub length: String,
    pub strength: String,
}

impl FormInput {
    /// Check every field and build the generator config.
    ///
    /// All four identity fields are required. `today` bounds the birth date.
    pub fn validate(&self, today: NaiveDate) -> Result<GeneratorConfig> {
        let first_name = required(&self.first_name, "first name")?;
        let last_name = required(&self.last_name, "last name")?;
        let birth_date = required(&self.birth_date, "birth date")?;
        let lucky_number = required(&self.lucky_number, "lucky number")?;

        let length = parse_length(&self.length)?;

        if !lucky_number.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidLuckyNumber(lucky_number.to_string()));
        }

        let birth_date = BirthDate::parse(birth_date)?;
        if birth_date.to_date().is_some_and(|date| date > today) {
            return Err(Error::FutureBirthDate(format!(
                "{}-{}-{}",
                birth_date.year, birth_date.month, birth_date.day
            )));
        }

        let strength = match self.strength.trim() {
            "" => Strength::default(),
            s => s.parse()?,
        };

        let identity = IdentityInfo::default()
            .with_first_name(first_name)
            .with_last_name(last_name)
            .with_birth_date(birth_date)
            .with_lucky_number(lucky_number);

        GeneratorConfig::new(length, strength, identity)
    }
}

fn required<'a>(value: &'a str, name: &'static str) -> Result<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::MissingField(name));
    }
    Ok(value)
}

fn parse_length(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    raw.parse::<usize>()
        .ok()
        .filter(|n| (MIN_LENGTH..=MAX_LENGTH).contains(n))
        .ok_or_else(|| Error::LengthOutOfRange {
            value: raw.to_string(),
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
}
