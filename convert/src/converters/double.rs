// Converter for double-precision floats
use shared::models::Locale;

use crate::converter::Converter;
use crate::error::ConversionError;
use crate::number_format::{format_number, parse_decimal};

#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleConverter;

impl DoubleConverter {
    pub const INSTANCE: DoubleConverter = DoubleConverter;
}

impl Converter<f64> for DoubleConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<f64>, ConversionError> {
        parse_decimal(value, -f64::MAX, f64::MAX, locale, self.target_type())
    }

    fn convert_to_string(&self, value: Option<&f64>, locale: &Locale) -> String {
        value.map(|v| format_number(&v.to_string(), locale)).unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "f64"
    }
}
