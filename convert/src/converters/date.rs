// Date and time converters backed by chrono.
// Patterns come from the locale table in `shared::utils`; years are always
// four digits and times carry seconds, so rendered values parse back unchanged.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::Locale;
use shared::utils::date_patterns;

use crate::converter::Converter;
use crate::error::ConversionError;

#[derive(Debug, Default, Clone, Copy)]
pub struct DateConverter;

impl DateConverter {
    pub const INSTANCE: DateConverter = DateConverter;
}

impl Converter<NaiveDate> for DateConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<NaiveDate>, ConversionError> {
        let text = value.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let pattern = date_patterns(locale).date;
        NaiveDate::parse_from_str(text, pattern)
            .map(Some)
            .map_err(|_| ConversionError::unparseable(pattern, value, self.target_type(), locale))
    }

    fn convert_to_string(&self, value: Option<&NaiveDate>, locale: &Locale) -> String {
        value
            .map(|d| d.format(date_patterns(locale).date).to_string())
            .unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "NaiveDate"
    }
}

/// Times of day; sub-second precision is not rendered.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeConverter;

impl TimeConverter {
    pub const INSTANCE: TimeConverter = TimeConverter;
}

impl Converter<NaiveTime> for TimeConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<NaiveTime>, ConversionError> {
        let text = value.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let pattern = date_patterns(locale).time;
        NaiveTime::parse_from_str(text, pattern)
            .map(Some)
            .map_err(|_| ConversionError::unparseable(pattern, value, self.target_type(), locale))
    }

    fn convert_to_string(&self, value: Option<&NaiveTime>, locale: &Locale) -> String {
        value
            .map(|t| t.format(date_patterns(locale).time).to_string())
            .unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "NaiveTime"
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeConverter;

impl DateTimeConverter {
    pub const INSTANCE: DateTimeConverter = DateTimeConverter;
}

impl Converter<NaiveDateTime> for DateTimeConverter {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<NaiveDateTime>, ConversionError> {
        let text = value.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let pattern = date_patterns(locale).date_time();
        NaiveDateTime::parse_from_str(text, &pattern)
            .map(Some)
            .map_err(|_| ConversionError::unparseable(pattern, value, self.target_type(), locale))
    }

    fn convert_to_string(&self, value: Option<&NaiveDateTime>, locale: &Locale) -> String {
        value
            .map(|dt| dt.format(&date_patterns(locale).date_time()).to_string())
            .unwrap_or_default()
    }

    fn target_type(&self) -> &'static str {
        "NaiveDateTime"
    }
}
