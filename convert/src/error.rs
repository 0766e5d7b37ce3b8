use shared::models::Locale;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionErrorKind {
    #[error("Cannot parse using format {format}")]
    Unparseable { format: String },

    #[error("Value cannot be less than {min}")]
    BelowMinimum { min: String },

    #[error("Value cannot be greater than {max}")]
    AboveMaximum { max: String },

    #[error("No converter registered")]
    NoConverter,
}

/// Raised when text cannot be turned into a value of the target type.
///
/// Carries everything a form layer needs to build a user-facing message: the
/// text as entered, the type it was meant to become and the locale in effect.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{kind}: '{value}' as {target_type} ({locale})")]
pub struct ConversionError {
    kind: ConversionErrorKind,
    value: String,
    target_type: &'static str,
    locale: Locale,
}

impl ConversionError {
    pub fn new(kind: ConversionErrorKind, value: &str, target_type: &'static str, locale: &Locale) -> Self {
        Self {
            kind,
            value: value.to_string(),
            target_type,
            locale: locale.clone(),
        }
    }

    pub fn unparseable(format: impl Into<String>, value: &str, target_type: &'static str, locale: &Locale) -> Self {
        Self::new(ConversionErrorKind::Unparseable { format: format.into() }, value, target_type, locale)
    }

    pub fn kind(&self) -> &ConversionErrorKind {
        &self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn target_type(&self) -> &'static str {
        self.target_type
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self.kind,
            ConversionErrorKind::BelowMinimum { .. } | ConversionErrorKind::AboveMaximum { .. }
        )
    }
}
