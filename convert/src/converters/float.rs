// Converter for single-precision floats
use shared::models::Locale;

use crate::converter::Converter;
use crate::error::ConversionError;
use crate::number_format::{format_number, parse_decimal};

#[derive(Debug, Default, Clone, Copy)]
pub struct FloatConverter;

impl FloatConverter {
    /// The shared instance; the converter holds no state.
    pub const INSTANCE: FloatConverter = FloatConverter;
}

impl Converter<f32> for FloatConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<f32>, ConversionError> {
        parse_decimal(value, -f32::MAX, f32::MAX, locale, self.target_type())
    }

    fn convert_to_string(&self, value: Option<&f32>, locale: &Locale) -> String {
        value.map(|v| format_number(&v.to_string(), locale)).unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "f32"
    }
}
