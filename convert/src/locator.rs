// Registry of converters keyed by the Rust type they produce.
use std::any::{Any, TypeId};
use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use shared::models::Locale;
use tracing::debug;

use crate::converter::Converter;
use crate::converters::{
    BooleanConverter, ByteConverter, CharacterConverter, DateConverter, DateTimeConverter, DoubleConverter,
    FloatConverter, IntegerConverter, LongConverter, ShortConverter, TimeConverter,
};
use crate::error::{ConversionError, ConversionErrorKind};

/// Looks up the converter for a type.
///
/// Each entry holds a `Box<dyn Converter<C>>` behind `dyn Any`, so lookups are
/// a `TypeId` hash plus a downcast. The locator is meant to be filled once and
/// then shared read-only (behind `&` or `Arc`) between threads.
pub struct ConverterLocator {
    converters: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ConverterLocator {
    /// A locator with the built-in converters for numbers, booleans, characters and dates.
    pub fn new() -> Self {
        let mut locator = Self::empty();
        locator.set::<i8>(ByteConverter);
        locator.set::<i16>(ShortConverter);
        locator.set::<i32>(IntegerConverter);
        locator.set::<i64>(LongConverter);
        locator.set::<f32>(FloatConverter);
        locator.set::<f64>(DoubleConverter);
        locator.set::<bool>(BooleanConverter);
        locator.set::<char>(CharacterConverter);
        locator.set::<NaiveDate>(DateConverter);
        locator.set::<NaiveTime>(TimeConverter);
        locator.set::<NaiveDateTime>(DateTimeConverter);
        locator
    }

    pub fn empty() -> Self {
        ConverterLocator {
            converters: HashMap::new(),
        }
    }

    /// Registers `converter` for `C`. Returns true if it replaced an earlier one.
    pub fn set<C: 'static>(&mut self, converter: impl Converter<C> + 'static) -> bool {
        let boxed: Box<dyn Converter<C>> = Box::new(converter);
        debug!(target_type = boxed.target_type(), "Registering converter");
        self.converters.insert(TypeId::of::<C>(), Box::new(boxed)).is_some()
    }

    pub fn get<C: 'static>(&self) -> Option<&dyn Converter<C>> {
        self.converters
            .get(&TypeId::of::<C>())
            .and_then(|entry| entry.downcast_ref::<Box<dyn Converter<C>>>())
            .map(|converter| converter.as_ref())
    }

    pub fn contains<C: 'static>(&self) -> bool {
        self.converters.contains_key(&TypeId::of::<C>())
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    pub fn convert_to_object<C: 'static>(&self, value: &str, locale: &Locale) -> Result<Option<C>, ConversionError> {
        match self.get::<C>() {
            Some(converter) => converter.convert_to_object(value, locale),
            None => Err(ConversionError::new(
                ConversionErrorKind::NoConverter,
                value,
                std::any::type_name::<C>(),
                locale,
            )),
        }
    }

    /// Renders `value` with the registered converter, or `None` if there is none for `C`.
    pub fn convert_to_string<C: 'static>(&self, value: Option<&C>, locale: &Locale) -> Option<String> {
        self.get::<C>().map(|converter| converter.convert_to_string(value, locale))
    }
}

impl Default for ConverterLocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct Celsius(f64);

    struct CelsiusConverter;

    impl Converter<Celsius> for CelsiusConverter {
        fn convert_to_object(&self, value: &str, locale: &Locale) -> Result<Option<Celsius>, ConversionError> {
            let number = value.trim().strip_suffix("°C").unwrap_or(value);
            Ok(DoubleConverter.convert_to_object(number, locale)?.map(Celsius))
        }

        fn convert_to_string(&self, value: Option<&Celsius>, locale: &Locale) -> String {
            value
                .map(|c| format!("{}°C", DoubleConverter.convert_to_string(Some(&c.0), locale)))
                .unwrap_or_default()
        }
    }

    #[test]
    fn test_default_converters_registered() {
        let locator = ConverterLocator::new();
        assert_eq!(locator.len(), 11);
        assert!(locator.contains::<f32>());
        assert!(locator.contains::<NaiveDate>());
        assert!(!locator.contains::<String>());
    }

    #[test]
    fn test_convert_through_locator() {
        let locator = ConverterLocator::new();
        let de = Locale::germany();
        assert_eq!(locator.convert_to_object::<f32>("1.234,5", &de).unwrap(), Some(1234.5));
        assert_eq!(locator.convert_to_object::<i32>("", &de).unwrap(), None);
        assert_eq!(locator.convert_to_string(Some(&1234.5_f32), &de).as_deref(), Some("1.234,5"));
    }

    #[test]
    fn test_missing_converter() {
        let locator = ConverterLocator::empty();
        assert!(locator.is_empty());
        let err = locator.convert_to_object::<f32>("1", &Locale::us()).unwrap_err();
        assert_eq!(err.kind(), &ConversionErrorKind::NoConverter);
        assert_eq!(locator.convert_to_string(Some(&1.0_f32), &Locale::us()), None);
    }

    #[test]
    fn test_custom_converter_and_replacement() {
        let mut locator = ConverterLocator::new();
        assert!(!locator.set::<Celsius>(CelsiusConverter));
        let celsius = locator.convert_to_object::<Celsius>("21,5°C", &Locale::germany()).unwrap().unwrap();
        assert_eq!(celsius.0, 21.5);
        assert_eq!(
            locator.convert_to_string(Some(&Celsius(-3.0)), &Locale::us()).as_deref(),
            Some("-3°C")
        );
        assert!(locator.set::<Celsius>(CelsiusConverter));
    }

    #[test]
    fn test_shared_between_threads() {
        let locator = Arc::new(ConverterLocator::new());
        let handles: Vec<_> = (0..4_i32)
            .map(|i| {
                let locator = Arc::clone(&locator);
                std::thread::spawn(move || {
                    let text = locator.convert_to_string(Some(&(i * 1000)), &Locale::us()).unwrap();
                    locator.convert_to_object::<i32>(&text, &Locale::us()).unwrap()
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            assert_eq!(handle.join().unwrap(), Some(i as i32 * 1000));
        }
    }
}
