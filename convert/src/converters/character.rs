use shared::models::Locale;

use crate::converter::Converter;
use crate::error::ConversionError;

/// Converts single characters. Text is not trimmed: a lone space is a valid character.
#[derive(Debug, Default, Clone, Copy)]
pub struct CharacterConverter;

impl CharacterConverter {
    pub const INSTANCE: CharacterConverter = CharacterConverter;
}

impl Converter<char> for CharacterConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<char>, ConversionError> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Ok(None),
            (Some(c), None) => Ok(Some(c)),
            (Some(_), Some(_)) => Err(ConversionError::unparseable(
                "a single character",
                value,
                self.target_type(),
                locale,
            )),
        }
    }

    fn convert_to_string(&self, value: Option<&char>, _locale: &Locale) -> String {
        value.map(|c| c.to_string()).unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "char"
    }
}
