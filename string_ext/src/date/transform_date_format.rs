// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate,
             format::{Parsed, StrftimeItems, parse}};

use super::{CompiledDatePattern, DateField, compile_date_pattern};

/// Options for [`transform_date_format_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateTransformOptions {
    /// Supplies the year, month and day when the receiving pattern doesn't have them,
    /// eg: a pattern with only time fields.
    pub default_date: NaiveDate,
}

impl Default for DateTransformOptions {
    fn default() -> Self {
        Self {
            default_date: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default(),
        }
    }
}

/// Parse `input` using `receiving_format` and format the result using `new_format`.
/// See [`transform_date_format_with_options`].
///
/// ```
/// use r3bl_string_ext::transform_date_format;
///
/// assert_eq!(
///     transform_date_format("16/11/2018", "dd/MM/yyyy", "yyyy-MM-dd"),
///     Some("2018-11-16".to_string())
/// );
/// assert_eq!(transform_date_format("31/02/2018", "dd/MM/yyyy", "yyyy-MM-dd"), None);
/// ```
#[must_use]
pub fn transform_date_format(
    input: &str,
    receiving_format: &str,
    new_format: &str,
) -> Option<String> {
    transform_date_format_with_options(
        input,
        receiving_format,
        new_format,
        &DateTransformOptions::default(),
    )
}

/// Parse `input` using `receiving_format` and format the result using `new_format`.
///
/// - Date and time fields present: the parsed date time is used.
/// - Only date fields present: midnight of the parsed date.
/// - Only time fields present: [`DateTransformOptions::default_date`] at the parsed time.
///
/// Returns [None] when either pattern can't be compiled, when `input` does not match
/// `receiving_format`, when the parsed date is impossible (eg: `31/02`), or when
/// `new_format` asks for a field the parsed value doesn't have (eg: an offset).
#[must_use]
pub fn transform_date_format_with_options(
    input: &str,
    receiving_format: &str,
    new_format: &str,
    options: &DateTransformOptions,
) -> Option<String> {
    let Some(receiving) = compile_date_pattern(receiving_format) else {
        tracing::debug!(message = "invalid receiving date format", receiving_format);
        return None;
    };
    let Some(new) = compile_date_pattern(new_format) else {
        tracing::debug!(message = "invalid new date format", new_format);
        return None;
    };
    if !receiving.has_fields() {
        tracing::debug!(message = "receiving date format has no fields", receiving_format);
        return None;
    }

    let mut parsed = Parsed::new();
    if let Err(error) = parse(&mut parsed, input, StrftimeItems::new(&receiving.strftime)) {
        tracing::debug!(message = "date does not match format", input, receiving_format, %error);
        return None;
    }

    if let Err(error) = fill_missing_fields(&mut parsed, &receiving, options) {
        tracing::debug!(message = "can't complete parsed date", input, %error);
        return None;
    }

    let mut acc = String::new();
    let result = if receiving.has(DateField::is_offset) {
        parsed
            .to_datetime()
            .map(|date_time| write!(acc, "{}", date_time.format(&new.strftime)))
    } else {
        parsed
            .to_naive_datetime_with_offset(0)
            .map(|date_time| write!(acc, "{}", date_time.format(&new.strftime)))
    };

    match result {
        Ok(Ok(())) => Some(acc),
        Ok(Err(_)) => {
            tracing::debug!(message = "can't format date", input, new_format);
            None
        }
        Err(error) => {
            tracing::debug!(message = "impossible date", input, receiving_format, %error);
            None
        }
    }
}

/// Supply the fields that [`Parsed`] needs to resolve a full date time, but which the
/// receiving pattern does not provide.
fn fill_missing_fields(
    parsed: &mut Parsed,
    receiving: &CompiledDatePattern,
    options: &DateTransformOptions,
) -> chrono::ParseResult<()> {
    let default_date = options.default_date;

    if !receiving.has(DateField::is_year) {
        parsed.set_year(i64::from(default_date.year()))?;
    }
    if !receiving.has(DateField::is_month) {
        parsed.set_month(i64::from(default_date.month()))?;
    }
    if !receiving.has(DateField::is_day) {
        parsed.set_day(i64::from(default_date.day()))?;
    }

    if !receiving.has(DateField::is_hour) {
        parsed.set_hour(0)?;
    } else if receiving.has(DateField::is_hour12) && !receiving.has(|it| *it == DateField::AmPm)
    {
        parsed.set_ampm(false)?;
    }
    if !receiving.has(DateField::is_minute) {
        parsed.set_minute(0)?;
    }
    if !receiving.has(DateField::is_second) {
        parsed.set_second(0)?;
    }
    if !receiving.has(DateField::is_fraction) {
        parsed.set_nanosecond(0)?;
    }

    Ok(())
}
