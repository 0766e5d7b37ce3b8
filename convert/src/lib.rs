// Converter library root
// Text <-> value conversion for form input and page rendering, driven by locale.

pub mod converter;
pub mod converters;
pub mod error;
pub mod locator;
pub mod number_format;

pub use converter::Converter;
pub use error::{ConversionError, ConversionErrorKind};
pub use locator::ConverterLocator;
pub use shared::models::Locale;
