//! Strength tiers.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Controls how many random digits and symbols are mixed in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Strength {
    #[default]
    Normal,
    Medium,
    Strong,
}

impl Strength {
    pub const ALL: [Strength; 3] = [Strength::Normal, Strength::Medium, Strength::Strong];

    /// Length of both the random digit run and the random symbol run.
    pub const fn random_budget(self) -> usize {
        match self {
            Strength::Normal => 1,
            Strength::Medium => 2,
            Strength::Strong => 3,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Strength::Normal => "normal",
            Strength::Medium => "medium",
            Strength::Strong => "strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strength {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Strength::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::UnknownStrength(s.to_string()))
    }
}
