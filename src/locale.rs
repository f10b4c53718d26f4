//! UI language and locale-dependent formatting.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use jiff::civil::Date;
use thiserror::Error;

/// Language the dashboard is presented in.
///
/// Sent to the gateway as `Accept-Language` so that response messages come
/// back translated, and used to format dates for display and search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// English
    #[default]
    English,

    /// French
    French,
}

impl Language {
    /// Language tag used in the `Accept-Language` header.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::French => "fr",
        }
    }

    /// Format a date the way the language's short date style does
    /// (`6/1/2024` in English, `01/06/2024` in French).
    #[must_use]
    pub fn format_date(self, date: Date) -> String {
        match self {
            Self::English => date.strftime("%-m/%-d/%Y").to_string(),
            Self::French => date.strftime("%d/%m/%Y").to_string(),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.tag())
    }
}

/// Raised for a language tag the dashboard has no translation for.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language `{0}` (expected `en` or `fr`)")]
pub struct LanguageParseError(pub String);

impl FromStr for Language {
    type Err = LanguageParseError;

    /// Accepts bare tags (`fr`) and regional variants (`fr-CA`, `en_GB`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let primary = s
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Ok(Self::English),
            "fr" => Ok(Self::French),
            _ => Err(LanguageParseError(s.to_string())),
        }
    }
}
