// Handler for `webutil convert`
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use convert::ConverterLocator;
use shared::models::Locale;
use tracing::debug;

use crate::args::{ConvertArgs, ValueType};
use crate::config::AppConfig;

pub fn run(args: &ConvertArgs, config: &AppConfig) -> Result<String> {
    let from = args.from.clone().unwrap_or_else(|| config.locale.clone());
    let to = args.to.clone().unwrap_or_else(|| config.locale.clone());
    debug!(value = %args.value, %from, %to, value_type = ?args.value_type, "Converting");

    let locator = ConverterLocator::new();
    let text = match args.value_type {
        ValueType::Byte => reformat::<i8>(&locator, &args.value, &from, &to)?,
        ValueType::Short => reformat::<i16>(&locator, &args.value, &from, &to)?,
        ValueType::Int => reformat::<i32>(&locator, &args.value, &from, &to)?,
        ValueType::Long => reformat::<i64>(&locator, &args.value, &from, &to)?,
        ValueType::Float => reformat::<f32>(&locator, &args.value, &from, &to)?,
        ValueType::Double => reformat::<f64>(&locator, &args.value, &from, &to)?,
        ValueType::Bool => reformat::<bool>(&locator, &args.value, &from, &to)?,
        ValueType::Char => reformat::<char>(&locator, &args.value, &from, &to)?,
        ValueType::Date => reformat::<NaiveDate>(&locator, &args.value, &from, &to)?,
        ValueType::Time => reformat::<NaiveTime>(&locator, &args.value, &from, &to)?,
        ValueType::Datetime => reformat::<NaiveDateTime>(&locator, &args.value, &from, &to)?,
    };
    Ok(text)
}

fn reformat<C: 'static>(locator: &ConverterLocator, value: &str, from: &Locale, to: &Locale) -> Result<String> {
    let parsed = locator.convert_to_object::<C>(value, from)?;
    Ok(locator.convert_to_string(parsed.as_ref(), to).unwrap_or_default())
}
