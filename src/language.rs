use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

use crate::error::AppError;

/// Language a report is written in. Also selects the prompt template and the
/// interface strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageTag {
    Portuguese,
    Spanish,
    English,
}

impl LanguageTag {
    pub const ALL: [LanguageTag; 3] = [
        LanguageTag::Portuguese,
        LanguageTag::Spanish,
        LanguageTag::English,
    ];

    /// Parses a user-supplied language name. Case, surrounding whitespace and
    /// diacritics are ignored, so "ESPAÑOL", "espanol" and "Spanish" all map
    /// to [`LanguageTag::Spanish`]. Anything outside the three languages is
    /// rejected.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        match fold(raw).as_str() {
            "portugues" | "portuguese" | "pt" => Ok(LanguageTag::Portuguese),
            "espanol" | "spanish" | "es" => Ok(LanguageTag::Spanish),
            "english" | "ingles" | "en" => Ok(LanguageTag::English),
            _ => Err(AppError::UnsupportedLanguage(raw.trim().to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageTag::Portuguese => "portuguese",
            LanguageTag::Spanish => "spanish",
            LanguageTag::English => "english",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            LanguageTag::Portuguese => "pt",
            LanguageTag::Spanish => "es",
            LanguageTag::English => "en",
        }
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            LanguageTag::Portuguese => "Português",
            LanguageTag::Spanish => "Español",
            LanguageTag::English => "English",
        }
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LanguageTag {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// NFKD splits accented letters into base + combining mark; dropping non-ASCII
// keeps the base letter.
fn fold(raw: &str) -> String {
    raw.trim()
        .nfkd()
        .filter(char::is_ascii)
        .collect::<String>()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_native_and_english_names() {
        let cases = vec![
            ("portugues", LanguageTag::Portuguese),
            ("Português", LanguageTag::Portuguese),
            ("PORTUGUESE", LanguageTag::Portuguese),
            ("pt", LanguageTag::Portuguese),
            ("espanol", LanguageTag::Spanish),
            ("ESPAÑOL", LanguageTag::Spanish),
            ("  Español ", LanguageTag::Spanish),
            ("spanish", LanguageTag::Spanish),
            ("english", LanguageTag::English),
            ("Inglés", LanguageTag::English),
            ("EN", LanguageTag::English),
        ];

        for (raw, expected) in cases {
            assert_eq!(LanguageTag::parse(raw).unwrap(), expected, "{raw:?}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for raw in ["french", "", "   ", "deutsch", "português brasileiro"] {
            let err = LanguageTag::parse(raw).unwrap_err();
            assert!(
                matches!(err, AppError::UnsupportedLanguage(_)),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejection_keeps_original_value() {
        match LanguageTag::parse(" Français ") {
            Err(AppError::UnsupportedLanguage(value)) => assert_eq!(value, "Français"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_round_trips_through_canonical_name() {
        for tag in LanguageTag::ALL {
            assert_eq!(tag.as_str().parse::<LanguageTag>().unwrap(), tag);
            assert_eq!(tag.code().parse::<LanguageTag>().unwrap(), tag);
            assert_eq!(tag.native_name().parse::<LanguageTag>().unwrap(), tag);
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&LanguageTag::Spanish).unwrap();
        assert_eq!(json, "\"spanish\"");
    }
}
