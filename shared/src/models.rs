// Locale model shared by the converters and the command line front-end.
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language with an optional country, e.g. `en_US` or `pt_BR`.
///
/// Serialized as its tag string so it can sit in JSON configuration as `"de_DE"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Locale {
    language: String,
    country: Option<String>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocaleParseError {
    #[error("Locale tag is empty")]
    Empty,

    #[error("Invalid language '{0}' in locale tag")]
    InvalidLanguage(String),

    #[error("Invalid country '{0}' in locale tag")]
    InvalidCountry(String),
}

impl Locale {
    pub fn new(language: &str, country: Option<&str>) -> Result<Self, LocaleParseError> {
        if language.len() < 2 || language.len() > 3 || !language.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(LocaleParseError::InvalidLanguage(language.to_string()));
        }
        let country = match country {
            Some(c) => {
                let valid = (c.len() == 2 && c.chars().all(|ch| ch.is_ascii_alphabetic()))
                    || (c.len() == 3 && c.chars().all(|ch| ch.is_ascii_digit()));
                if !valid {
                    return Err(LocaleParseError::InvalidCountry(c.to_string()));
                }
                Some(c.to_ascii_uppercase())
            }
            None => None,
        };
        Ok(Self {
            language: language.to_ascii_lowercase(),
            country,
        })
    }

    fn known(language: &str, country: Option<&str>) -> Self {
        Self {
            language: language.to_string(),
            country: country.map(str::to_string),
        }
    }

    /// The neutral locale: `.` as decimal separator, `,` for grouping, ISO dates.
    pub fn root() -> Self {
        Self::known("und", None)
    }

    pub fn us() -> Self {
        Self::known("en", Some("US"))
    }

    pub fn uk() -> Self {
        Self::known("en", Some("GB"))
    }

    pub fn germany() -> Self {
        Self::known("de", Some("DE"))
    }

    pub fn france() -> Self {
        Self::known("fr", Some("FR"))
    }

    pub fn brazil() -> Self {
        Self::known("pt", Some("BR"))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn is_root(&self) -> bool {
        self.language == "und"
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}_{}", self.language, country),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = LocaleParseError;

    // Accepts `en`, `en_US`, `en-US`; anything after the country (variants, scripts) is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(LocaleParseError::Empty);
        }
        if s.eq_ignore_ascii_case("und") || s.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }
        let mut parts = s.split(|c| c == '_' || c == '-');
        let language = parts.next().unwrap_or_default();
        let country = parts.next().filter(|c| !c.is_empty());
        Self::new(language, country)
    }
}

impl TryFrom<String> for Locale {
    type Error = LocaleParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.to_string()
    }
}

/// Characters used when reading and writing numbers in a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub grouping: char,
    pub minus: char,
}

impl NumberSymbols {
    /// Whether `c` acts as the grouping separator. Locales that group with a
    /// space accept every space variant browsers and keyboards produce.
    pub fn is_grouping(&self, c: char) -> bool {
        if is_space_like(self.grouping) {
            is_space_like(c)
        } else {
            c == self.grouping
        }
    }
}

fn is_space_like(c: char) -> bool {
    matches!(c, ' ' | '\u{00A0}' | '\u{202F}')
}

/// chrono format strings for dates and times in a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePatterns {
    pub date: &'static str,
    pub time: &'static str,
}

impl DatePatterns {
    pub fn date_time(&self) -> String {
        format!("{} {}", self.date, self.time)
    }
}
