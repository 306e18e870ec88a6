//! US zip code model and validation

use std::fmt;
use thiserror::Error;

/// Number of digits in a US zip code
pub const ZIP_CODE_LENGTH: usize = 5;

/// Reason a candidate string was rejected as a zip code
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidZipCode {
    /// The candidate contains a character outside `0`-`9`
    #[error("Input must only contain integers...")]
    NonDigit { found: char },

    /// The candidate has only digits but not exactly five of them
    #[error("Input must contain 5 digits...")]
    WrongLength { length: usize },
}

/// A validated five digit US zip code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZipCode(String);

impl ZipCode {
    /// Validate a candidate string.
    ///
    /// Non-digit characters are reported before a wrong length, so `"12a"`
    /// is `NonDigit` rather than `WrongLength`.
    pub fn parse(candidate: &str) -> Result<Self, InvalidZipCode> {
        if let Some(found) = candidate.chars().find(|c| !c.is_ascii_digit()) {
            return Err(InvalidZipCode::NonDigit { found });
        }

        let length = candidate.chars().count();
        if length != ZIP_CODE_LENGTH {
            return Err(InvalidZipCode::WrongLength { length });
        }

        Ok(Self(candidate.to_string()))
    }

    /// The five digits
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ZipCode {
    type Err = InvalidZipCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// True only for exactly five ASCII digits
#[must_use]
pub fn is_valid_zip_code(candidate: &str) -> bool {
    ZipCode::parse(candidate).is_ok()
}
