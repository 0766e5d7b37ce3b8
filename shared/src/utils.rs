// Per-locale formatting tables shared across the workspace.
// Lookup goes country-specific first, then language, then the root locale.
use crate::models::{DatePatterns, Locale, NumberSymbols};

const ROOT_NUMBERS: NumberSymbols = NumberSymbols { decimal: '.', grouping: ',', minus: '-' };
const COMMA_DECIMAL: NumberSymbols = NumberSymbols { decimal: ',', grouping: '.', minus: '-' };
const SPACE_GROUPING: NumberSymbols = NumberSymbols { decimal: ',', grouping: '\u{00A0}', minus: '-' };
const SWISS: NumberSymbols = NumberSymbols { decimal: '.', grouping: '\'', minus: '-' };

pub fn number_symbols(locale: &Locale) -> NumberSymbols {
    match (locale.language(), locale.country()) {
        ("de", Some("CH")) | ("it", Some("CH")) | ("fr", Some("CH")) => SWISS,
        ("fr", _) | ("ru", _) | ("uk", _) | ("pl", _) | ("cs", _) | ("sv", _) | ("fi", _) | ("nb", _) => SPACE_GROUPING,
        ("pt", Some("PT")) => SPACE_GROUPING,
        ("de", _) | ("pt", _) | ("es", _) | ("it", _) | ("nl", _) | ("id", _) | ("tr", _) | ("da", _) => COMMA_DECIMAL,
        _ => ROOT_NUMBERS,
    }
}

pub fn date_patterns(locale: &Locale) -> DatePatterns {
    match (locale.language(), locale.country()) {
        ("en", Some("US")) | ("en", None) => DatePatterns { date: "%m/%d/%Y", time: "%I:%M:%S %p" },
        ("en", _) | ("fr", _) | ("pt", _) | ("es", _) | ("it", _) => DatePatterns { date: "%d/%m/%Y", time: "%H:%M:%S" },
        ("de", _) | ("ru", _) | ("pl", _) | ("fi", _) | ("nb", _) | ("tr", _) => DatePatterns { date: "%d.%m.%Y", time: "%H:%M:%S" },
        ("nl", _) => DatePatterns { date: "%d-%m-%Y", time: "%H:%M:%S" },
        ("ja", _) | ("zh", _) => DatePatterns { date: "%Y/%m/%d", time: "%H:%M:%S" },
        _ => DatePatterns { date: "%Y-%m-%d", time: "%H:%M:%S" },
    }
}
