// Common trait for all converters
use shared::models::Locale;

use crate::error::ConversionError;

/// Converts between a value of type `C` and its text in a given locale.
///
/// Output conversion (`convert_to_string`) is what a page uses when rendering a
/// value, so a date shows up as `12/31/2024`. Input conversion
/// (`convert_to_object`) interprets text coming back from a form. Required-field
/// checks happen before a converter is called, so empty text simply means "no
/// value" and converts to `None`.
///
/// For every value a type can hold, and every locale whose representation is
/// unambiguous, `convert_to_object(convert_to_string(v))` gives back `v`.
pub trait Converter<C>: Send + Sync {
    fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<C>, ConversionError>;

    /// `None` renders as the empty string. Never fails.
    fn convert_to_string(&self, value: Option<&C>, locale: &Locale) -> String;

    fn target_type(&self) -> &'static str {
        std::any::type_name::<C>()
    }
}
