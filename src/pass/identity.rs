//! Identity fields that feed the password fragments.

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// Birth date kept as text so zero padding survives as supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BirthDate {
    pub year: String,
    pub month: String,
    pub day: String,
}

impl BirthDate {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            day: format!("{:02}", date.day()),
        }
    }

    /// Parse `YYYY-MM-DD` or `DD-MM-YYYY` into a zero-padded date.
    ///
    /// The order is picked from whichever end carries the four-digit year.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        let invalid = || Error::InvalidBirthDate(text.to_string());

        let parts: Vec<&str> = text.split(['-', '/', '.']).collect();
        let &[first, month, last] = parts.as_slice() else {
            return Err(invalid());
        };

        let (year, day) = match (first.len(), last.len()) {
            (4, 1..=2) => (first, last),
            (1..=2, 4) => (last, first),
            _ => return Err(invalid()),
        };

        let number = |s: &str| -> Result<u32> {
            if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            s.parse().map_err(|_| invalid())
        };

        let year = number(year)?;
        let month = number(month)?;
        let day = number(day)?;

        let year = i32::try_from(year).map_err(|_| invalid())?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self::from_date)
            .ok_or_else(invalid)
    }

    /// Month followed by day, e.g. `0502` for May 2nd.
    pub fn month_day(&self) -> String {
        format!("{}{}", self.month, self.day)
    }

    /// Calendar date, if the parts form one.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let year = self.year.parse().ok()?;
        let month = self.month.parse().ok()?;
        let day = self.day.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

/// Personal details. Any field left out contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentityInfo {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<BirthDate>,
    pub lucky_number: Option<String>,
}

impl IdentityInfo {
    pub fn with_first_name(mut self, name: impl Into<String>) -> Self {
        self.first_name = Some(name.into());
        self
    }

    pub fn with_last_name(mut self, name: impl Into<String>) -> Self {
        self.last_name = Some(name.into());
        self
    }

    pub fn with_birth_date(mut self, date: BirthDate) -> Self {
        self.birth_date = Some(date);
        self
    }

    pub fn with_lucky_number(mut self, number: impl Into<String>) -> Self {
        self.lucky_number = Some(number.into());
        self
    }
}
