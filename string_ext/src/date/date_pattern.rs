// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while1},
          combinator::{all_consuming, map, value},
          multi::many0,
          sequence::delimited};

/// One date field symbol run, eg: `yyyy` or `MMM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Year,
    YearTwoDigits,
    Month,
    MonthPadded,
    MonthAbbrev,
    MonthFull,
    Day,
    DayPadded,
    Hour24,
    Hour24Padded,
    Hour12,
    Hour12Padded,
    Minute,
    MinutePadded,
    Second,
    SecondPadded,
    Millis,
    Micros,
    Nanos,
    AmPm,
    WeekdayAbbrev,
    WeekdayFull,
    OffsetBasic,
    OffsetExtended,
}

mod date_field_impl_block {
    use super::DateField;

    impl DateField {
        /// Map a run of `count` repeated `symbol` characters to a field. Returns [None]
        /// for symbols (or widths) that are not supported.
        #[must_use]
        pub fn from_symbol_run(symbol: char, count: usize) -> Option<Self> {
            let it = match (symbol, count) {
                ('y', 2) => Self::YearTwoDigits,
                ('y', _) => Self::Year,
                ('M', 1) => Self::Month,
                ('M', 2) => Self::MonthPadded,
                ('M', 3) => Self::MonthAbbrev,
                ('M', 4) => Self::MonthFull,
                ('d', 1) => Self::Day,
                ('d', 2) => Self::DayPadded,
                ('H', 1) => Self::Hour24,
                ('H', 2) => Self::Hour24Padded,
                ('h', 1) => Self::Hour12,
                ('h', 2) => Self::Hour12Padded,
                ('m', 1) => Self::Minute,
                ('m', 2) => Self::MinutePadded,
                ('s', 1) => Self::Second,
                ('s', 2) => Self::SecondPadded,
                ('S', 3) => Self::Millis,
                ('S', 6) => Self::Micros,
                ('S', 9) => Self::Nanos,
                ('a', 1) => Self::AmPm,
                ('E', 1..=3) => Self::WeekdayAbbrev,
                ('E', 4) => Self::WeekdayFull,
                ('Z', 1..=3) | ('x', 1..=2) => Self::OffsetBasic,
                ('Z', 5) | ('x' | 'X', 3) => Self::OffsetExtended,
                _ => return None,
            };
            Some(it)
        }

        #[must_use]
        pub fn as_strftime(&self) -> &'static str {
            match self {
                Self::Year => "%Y",
                Self::YearTwoDigits => "%y",
                Self::Month => "%-m",
                Self::MonthPadded => "%m",
                Self::MonthAbbrev => "%b",
                Self::MonthFull => "%B",
                Self::Day => "%-d",
                Self::DayPadded => "%d",
                Self::Hour24 => "%-H",
                Self::Hour24Padded => "%H",
                Self::Hour12 => "%-I",
                Self::Hour12Padded => "%I",
                Self::Minute => "%-M",
                Self::MinutePadded => "%M",
                Self::Second => "%-S",
                Self::SecondPadded => "%S",
                Self::Millis => "%3f",
                Self::Micros => "%6f",
                Self::Nanos => "%9f",
                Self::AmPm => "%p",
                Self::WeekdayAbbrev => "%a",
                Self::WeekdayFull => "%A",
                Self::OffsetBasic => "%z",
                Self::OffsetExtended => "%:z",
            }
        }

        #[must_use]
        pub fn is_year(&self) -> bool { matches!(self, Self::Year | Self::YearTwoDigits) }

        #[must_use]
        pub fn is_month(&self) -> bool {
            matches!(
                self,
                Self::Month | Self::MonthPadded | Self::MonthAbbrev | Self::MonthFull
            )
        }

        #[must_use]
        pub fn is_day(&self) -> bool { matches!(self, Self::Day | Self::DayPadded) }

        #[must_use]
        pub fn is_hour(&self) -> bool {
            matches!(
                self,
                Self::Hour24 | Self::Hour24Padded | Self::Hour12 | Self::Hour12Padded
            )
        }

        #[must_use]
        pub fn is_hour12(&self) -> bool {
            matches!(self, Self::Hour12 | Self::Hour12Padded)
        }

        #[must_use]
        pub fn is_minute(&self) -> bool {
            matches!(self, Self::Minute | Self::MinutePadded)
        }

        #[must_use]
        pub fn is_second(&self) -> bool {
            matches!(self, Self::Second | Self::SecondPadded)
        }

        #[must_use]
        pub fn is_fraction(&self) -> bool {
            matches!(self, Self::Millis | Self::Micros | Self::Nanos)
        }

        #[must_use]
        pub fn is_offset(&self) -> bool {
            matches!(self, Self::OffsetBasic | Self::OffsetExtended)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePatternToken {
    Field(DateField),
    Literal(String),
}

/// A format pattern translated to a [`chrono`] strftime string, along with the fields
/// it mentions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledDatePattern {
    pub strftime: String,
    pub fields: Vec<DateField>,
}

mod compiled_date_pattern_impl_block {
    use super::{CompiledDatePattern, DateField, DatePatternToken};

    impl CompiledDatePattern {
        #[must_use]
        pub fn from_tokens(tokens: &[DatePatternToken]) -> Self {
            let mut strftime = String::new();
            let mut fields = vec![];
            for token in tokens {
                match token {
                    DatePatternToken::Field(field) => {
                        strftime.push_str(field.as_strftime());
                        fields.push(*field);
                    }
                    DatePatternToken::Literal(text) => {
                        strftime.push_str(&text.replace('%', "%%"));
                    }
                }
            }
            Self { strftime, fields }
        }

        #[must_use]
        pub fn has(&self, predicate: impl Fn(&DateField) -> bool) -> bool {
            self.fields.iter().any(predicate)
        }

        #[must_use]
        pub fn has_fields(&self) -> bool { !self.fields.is_empty() }
    }
}

/// Compile a pattern such as `dd/MM/yyyy 'at' HH:mm` into a strftime string.
///
/// - ASCII letters are field symbols. Runs of the same letter form a single field.
/// - Text between single quotes is a literal, and `''` is a literal single quote.
/// - Anything else is a literal.
///
/// Returns [None] if the pattern has an unsupported field symbol or an unterminated
/// quote.
///
/// ```
/// use r3bl_string_ext::compile_date_pattern;
///
/// let it = compile_date_pattern("dd/MM/yyyy").unwrap();
/// assert_eq!(it.strftime, "%d/%m/%Y");
/// ```
#[must_use]
pub fn compile_date_pattern(pattern: &str) -> Option<CompiledDatePattern> {
    let (_, tokens) = parse_date_pattern(pattern).ok()?;
    Some(CompiledDatePattern::from_tokens(&tokens))
}

/// # Errors
///
/// Returns a nom parsing error if the pattern can't be fully consumed.
pub fn parse_date_pattern(input: &str) -> IResult<&str, Vec<DatePatternToken>> {
    all_consuming(many0(alt((
        parse_escaped_quote,
        parse_quoted_literal,
        parse_field_run,
        parse_plain_literal,
    ))))
    .parse(input)
}

fn parse_escaped_quote(input: &str) -> IResult<&str, DatePatternToken> {
    map(tag("''"), |_| DatePatternToken::Literal("'".to_string())).parse(input)
}

fn parse_quoted_literal(input: &str) -> IResult<&str, DatePatternToken> {
    let chunk = alt((value("'", tag("''")), take_while1(|c: char| c != '\'')));
    map(delimited(tag("'"), many0(chunk), tag("'")), |chunks: Vec<&str>| {
        DatePatternToken::Literal(chunks.concat())
    })
    .parse(input)
}

fn parse_field_run(input: &str) -> IResult<&str, DatePatternToken> {
    let Some(symbol) = input.chars().next().filter(char::is_ascii_alphabetic) else {
        return Err(nom::Err::Error(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Alpha,
        }));
    };
    let (rem, run) = take_while1(|c: char| c == symbol).parse(input)?;
    // An unknown symbol can't be anything else, so stop here.
    match DateField::from_symbol_run(symbol, run.len()) {
        Some(field) => Ok((rem, DatePatternToken::Field(field))),
        None => Err(nom::Err::Failure(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        })),
    }
}

fn parse_plain_literal(input: &str) -> IResult<&str, DatePatternToken> {
    map(
        take_while1(|c: char| !c.is_ascii_alphabetic() && c != '\''),
        |text: &str| DatePatternToken::Literal(text.to_string()),
    )
    .parse(input)
}
