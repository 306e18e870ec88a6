//! Clean-up of scraped city and state text

use crate::config::{CityCase, CityWords, NormalizationConfig};
use crate::{CurrentTempError, Result};

const SITE: &str = "locality";

/// Normalize a raw city cell according to the configured word and case policies
pub fn normalize_city(raw: &str, config: &NormalizationConfig) -> Result<String> {
    let mut words = raw.split_whitespace();
    let Some(first) = words.next() else {
        return Err(CurrentTempError::extraction(SITE, "city", "city cell is empty"));
    };

    let kept = match config.city_words {
        CityWords::FirstWord => first.to_string(),
        CityWords::AllWords => std::iter::once(first)
            .chain(words)
            .collect::<Vec<_>>()
            .join(" "),
    };

    Ok(match config.city_case {
        CityCase::Capitalize => capitalize_words(&kept),
        CityCase::Legacy => legacy_recase(&kept),
    })
}

/// Uppercase the first code point of each word and lowercase the rest
#[must_use]
pub fn capitalize_words(text: &str) -> String {
    text.split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Older casing rule kept for compatibility.
///
/// Every occurrence of the first character is removed before the remainder
/// is lowercased and the (uppercased) first character re-prepended, so a
/// name whose first letter recurs loses those letters: `anna` -> `Ann`.
#[must_use]
pub fn legacy_recase(text: &str) -> String {
    let Some(first) = text.chars().next() else {
        return String::new();
    };

    let remainder: String = text.chars().filter(|&c| c != first).collect();
    first
        .to_uppercase()
        .chain(remainder.to_lowercase().chars())
        .collect()
}

/// Split a `"FullStateName ABBR"` cell into `(full name, abbreviation)`.
///
/// The split happens at the last space, so multi-word state names such as
/// `New York NY` keep their full name. A cell without a space, or with an
/// empty half, is an extraction error.
pub fn split_state(raw: &str) -> Result<(String, String)> {
    let raw = raw.trim();
    match raw.rsplit_once(' ') {
        Some((name, abbreviation)) if !name.trim().is_empty() && !abbreviation.is_empty() => {
            Ok((name.trim().to_string(), abbreviation.to_string()))
        }
        _ => Err(CurrentTempError::extraction(
            SITE,
            "state",
            format!("expected 'StateName ABBR', got '{raw}'"),
        )),
    }
}
