// Converter for booleans; the accepted words are the same in every locale.
use shared::models::Locale;

use crate::converter::Converter;
use crate::error::ConversionError;

const TRUE_WORDS: [&str; 5] = ["true", "yes", "y", "on", "1"];
const FALSE_WORDS: [&str; 5] = ["false", "no", "n", "off", "0"];

#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanConverter;

impl BooleanConverter {
    pub const INSTANCE: BooleanConverter = BooleanConverter;
}

impl Converter<bool> for BooleanConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<bool>, ConversionError> {
        let word = value.trim();
        if word.is_empty() {
            return Ok(None);
        }
        if TRUE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            Ok(Some(true))
        } else if FALSE_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word)) {
            Ok(Some(false))
        } else {
            Err(ConversionError::unparseable("true|false", value, self.target_type(), locale))
        }
    }

    fn convert_to_string(&self, value: Option<&bool>, _locale: &Locale) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "bool"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_common_words() {
        let us = Locale::us();
        for word in ["true", "TRUE", "Yes", "y", "on", "1"] {
            assert_eq!(BooleanConverter.convert_to_object(word, &us).unwrap(), Some(true), "{}", word);
        }
        for word in ["false", "No", "N", "OFF", "0"] {
            assert_eq!(BooleanConverter.convert_to_object(word, &us).unwrap(), Some(false), "{}", word);
        }
    }

    #[test]
    fn test_rejects_unknown_word() {
        let err = BooleanConverter.convert_to_object("maybe", &Locale::us()).unwrap_err();
        assert_eq!(err.value(), "maybe");
        assert_eq!(err.target_type(), "bool");
    }

    #[test]
    fn test_round_trip() {
        for v in [true, false] {
            let text = BooleanConverter.convert_to_string(Some(&v), &Locale::germany());
            assert_eq!(BooleanConverter.convert_to_object(&text, &Locale::germany()).unwrap(), Some(v));
        }
        assert_eq!(BooleanConverter.convert_to_object("", &Locale::us()).unwrap(), None);
    }
}
