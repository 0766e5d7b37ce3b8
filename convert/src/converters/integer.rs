// Converters for the signed integer types.
// Each one bounds the shared integer parser by its type's MIN/MAX.
use shared::models::Locale;

use crate::converter::Converter;
use crate::error::ConversionError;
use crate::number_format::{format_number, parse_integer};

macro_rules! integer_converter {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        #[derive(Debug, Default, Clone, Copy)]
        pub struct $name;

        impl $name {
            pub const INSTANCE: $name = $name;
        }

        impl Converter<$ty> for $name {
            fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<$ty>, ConversionError> {
                parse_integer(value, <$ty>::MIN, <$ty>::MAX, locale, self.target_type())
            }

            fn convert_to_string(&self, value: Option<&$ty>, locale: &Locale) -> String {
                value.map(|v| format_number(&v.to_string(), locale)).unwrap_or_default()
            }

            fn target_type(&self) -> &'static str {
                stringify!($ty)
            }
        }
    };
}

integer_converter!(
    /// `i8`
    ByteConverter,
    i8
);
integer_converter!(
    /// `i16`
    ShortConverter,
    i16
);
integer_converter!(
    /// `i32`
    IntegerConverter,
    i32
);
integer_converter!(
    /// `i64`
    LongConverter,
    i64
);
