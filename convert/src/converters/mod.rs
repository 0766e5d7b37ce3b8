// Concrete converters, one per target type
pub mod boolean;
pub mod character;
pub mod date;
pub mod double;
pub mod float;
pub mod integer;

pub use boolean::BooleanConverter;
pub use character::CharacterConverter;
pub use date::{DateConverter, DateTimeConverter, TimeConverter};
pub use double::DoubleConverter;
pub use float::FloatConverter;
pub use integer::{ByteConverter, IntegerConverter, LongConverter, ShortConverter};
