// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Parse Brazilian real amounts, eg: `R$ 1.234,56`. The thousands separator is `.` and
//! the decimal separator is `,`.

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_while, take_while_m_n, take_while1},
          character::complete::char,
          combinator::{all_consuming, opt, recognize},
          multi::many1,
          sequence::preceded};

pub const BRL_SYMBOL: &str = "R$";
pub const NBSP: char = '\u{00A0}';

/// The pieces of a currency amount, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyParts<'a> {
    pub is_negative: bool,
    pub has_symbol: bool,
    /// Integer digits, possibly with `.` group separators.
    pub integer: &'a str,
    pub decimals: Option<&'a str>,
}

impl CurrencyParts<'_> {
    /// Returns [None] if the digits don't fit in an [f64].
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        let mut acc: String = self.integer.chars().filter(char::is_ascii_digit).collect();
        if let Some(decimals) = self.decimals {
            acc.push('.');
            acc.push_str(decimals);
        }
        let value = acc.parse::<f64>().ok()?;
        Some(if self.is_negative { -value } else { value })
    }
}

/// Parse `pt_BR` currency text into a number.
///
/// Accepts optional surrounding whitespace, an optional `-` sign (before or after the
/// `R$` symbol), an optional `R$` symbol followed by an optional space or NBSP, the
/// integer part with optional `.` thousands grouping, and an optional `,` followed by 1
/// or 2 decimal digits. Anything else returns [None].
///
/// ```
/// use r3bl_string_ext::brazilian_currency_number;
///
/// assert_eq!(brazilian_currency_number("R$ 1.234,56"), Some(1234.56));
/// assert_eq!(brazilian_currency_number("-R$ 10,00"), Some(-10.0));
/// assert_eq!(brazilian_currency_number("1,234.56"), None);
/// ```
#[must_use]
pub fn brazilian_currency_number(input: &str) -> Option<f64> {
    match parse_brazilian_currency(input) {
        Ok((_, parts)) => parts.to_f64(),
        Err(error) => {
            tracing::debug!(message = "not a brazilian currency amount", input, %error);
            None
        }
    }
}

/// # Errors
///
/// Returns a nom parsing error if the whole input isn't a currency amount.
pub fn parse_brazilian_currency(input: &str) -> IResult<&str, CurrencyParts<'_>> {
    let (rem, (_, sign_before, symbol, sign_after, integer, decimals, _)) =
        all_consuming((
            parse_whitespace,
            opt(char('-')),
            opt(parse_symbol),
            opt(char('-')),
            parse_integer_part,
            opt(parse_decimal_part),
            parse_whitespace,
        ))
        .parse(input)?;

    if sign_before.is_some() && sign_after.is_some() {
        return Err(nom::Err::Error(nom::error::Error {
            input,
            code: nom::error::ErrorKind::Verify,
        }));
    }

    let parts = CurrencyParts {
        is_negative: sign_before.is_some() || sign_after.is_some(),
        has_symbol: symbol.is_some(),
        integer,
        decimals,
    };
    Ok((rem, parts))
}

fn parse_whitespace(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace).parse(input)
}

/// `R$` plus an optional single space or NBSP.
fn parse_symbol(input: &str) -> IResult<&str, &str> {
    recognize((tag(BRL_SYMBOL), opt(alt((char(' '), char(NBSP)))))).parse(input)
}

fn is_digit(c: char) -> bool { c.is_ascii_digit() }

/// Either `1.234.567` (first group has 1 to 3 digits, every other group exactly 3) or
/// plain `1234567`.
fn parse_integer_part(input: &str) -> IResult<&str, &str> {
    let grouped = recognize((
        take_while_m_n(1, 3, is_digit),
        many1(preceded(char('.'), take_while_m_n(3, 3, is_digit))),
    ));
    alt((grouped, take_while1(is_digit))).parse(input)
}

fn parse_decimal_part(input: &str) -> IResult<&str, &str> {
    preceded(char(','), take_while_m_n(1, 2, is_digit)).parse(input)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("R$ 1.234,56", 1234.56 ; "symbol grouping decimals")]
    #[test_case("R$1.234,56", 1234.56 ; "no space after symbol")]
    #[test_case("R$\u{00A0}1.234,56", 1234.56 ; "nbsp after symbol")]
    #[test_case("  R$ 10,00  ", 10.0 ; "surrounding whitespace")]
    #[test_case("1.234.567,8", 1_234_567.8 ; "one decimal digit")]
    #[test_case("1234,56", 1234.56 ; "no grouping")]
    #[test_case("1.234", 1234.0 ; "grouping without decimals")]
    #[test_case("0,99", 0.99 ; "cents")]
    #[test_case("-R$ 5,00", -5.0 ; "sign before symbol")]
    #[test_case("R$ -5,00", -5.0 ; "sign after symbol")]
    #[test_case("-5", -5.0 ; "sign without symbol")]
    fn test_parses(input: &str, expected: f64) {
        assert_eq2!(brazilian_currency_number(input), Some(expected));
    }

    #[test_case("" ; "empty")]
    #[test_case("R$" ; "symbol only")]
    #[test_case("abc" ; "letters")]
    #[test_case("1,234.56" ; "en us format")]
    #[test_case("1.23" ; "short group")]
    #[test_case("1.2345" ; "long group")]
    #[test_case("1,234" ; "three decimals")]
    #[test_case("1," ; "missing decimals")]
    #[test_case("--5" ; "double sign")]
    #[test_case("-R$ -5" ; "sign on both sides")]
    #[test_case("US$ 5,00" ; "other currency")]
    #[test_case("R$  5,00" ; "two spaces after symbol")]
    fn test_rejects(input: &str) {
        assert_eq2!(brazilian_currency_number(input), None);
    }

    #[test]
    fn test_parts() {
        let (rem, parts) = parse_brazilian_currency("R$ -1.000,5").unwrap();
        assert_eq2!(rem, "");
        assert_eq2!(
            parts,
            CurrencyParts {
                is_negative: true,
                has_symbol: true,
                integer: "1.000",
                decimals: Some("5"),
            }
        );
    }
}
