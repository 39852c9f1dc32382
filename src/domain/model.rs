use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
        }
    }
}

/// Returned when text is neither `male` nor `female` (ignoring case and
/// surrounding whitespace).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl fmt::Display for UnknownGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gender `{}`", self.0)
    }
}

impl std::error::Error for UnknownGender {}

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            _ => Err(UnknownGender(trimmed.to_string())),
        }
    }
}

/// One person in the address book.
///
/// Fields are private so a contact cannot change after it is built.
/// Ordering is by full name first; date of birth and gender only break ties
/// so that `Ord` agrees with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    full_name: String,
    gender: Gender,
    date_of_birth: NaiveDate,
}

impl Contact {
    pub fn new(full_name: impl Into<String>, gender: Gender, date_of_birth: NaiveDate) -> Self {
        Self {
            full_name: full_name.into(),
            gender,
            date_of_birth,
        }
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }
}

impl Ord for Contact {
    fn cmp(&self, other: &Self) -> Ordering {
        self.full_name
            .cmp(&other.full_name)
            .then_with(|| self.date_of_birth.cmp(&other.date_of_birth))
            .then_with(|| self.gender.cmp(&other.gender))
    }
}

impl PartialOrd for Contact {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, born {})",
            self.full_name,
            self.gender,
            self.date_of_birth.format("%Y-%m-%d")
        )
    }
}
