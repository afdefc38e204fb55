// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use nom::{IResult, Parser,
          branch::alt,
          character::complete::{alphanumeric1, char, digit1, hex_digit1},
          combinator::map_opt,
          sequence::{delimited, preceded}};

/// Decode character references (`&amp;`, `&#65;`, `&#x42;`, ...) in `input`. Unknown or
/// malformed references are kept verbatim. Borrows `input` if there's nothing to decode.
///
/// ```
/// use r3bl_string_ext::decode_html_entities;
///
/// assert_eq!(decode_html_entities("Tom &amp; Jerry"), "Tom & Jerry");
/// assert_eq!(decode_html_entities("&#65;&#x42;&unknown;"), "AB&unknown;");
/// ```
#[must_use]
pub fn decode_html_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }

    let mut acc = String::with_capacity(input.len());
    let mut rem = input;
    while let Some(index) = rem.find('&') {
        acc.push_str(&rem[..index]);
        rem = &rem[index..];
        match parse_entity(rem) {
            Ok((next, decoded)) => {
                acc.push(decoded);
                rem = next;
            }
            Err(_) => {
                acc.push('&');
                rem = &rem[1..];
            }
        }
    }
    acc.push_str(rem);

    Cow::Owned(acc)
}

/// Map a named character reference (without `&` and `;`) to its character.
#[must_use]
pub fn lookup_named_entity(name: &str) -> Option<char> {
    let it = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{00A0}',
        "copy" => '©',
        "reg" => '®',
        "hellip" => '…',
        "mdash" => '—',
        "ndash" => '–',
        _ => return None,
    };
    Some(it)
}

/// # Errors
///
/// Returns a nom parsing error if `input` doesn't start with a known character reference.
pub fn parse_entity(input: &str) -> IResult<&str, char> {
    delimited(
        char('&'),
        alt((parse_hex_reference, parse_decimal_reference, parse_named_reference)),
        char(';'),
    )
    .parse(input)
}

fn parse_hex_reference(input: &str) -> IResult<&str, char> {
    map_opt(
        preceded((char('#'), alt((char('x'), char('X')))), hex_digit1),
        |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
    )
    .parse(input)
}

fn parse_decimal_reference(input: &str) -> IResult<&str, char> {
    map_opt(preceded(char('#'), digit1), |digits: &str| {
        digits.parse::<u32>().ok().and_then(char::from_u32)
    })
    .parse(input)
}

fn parse_named_reference(input: &str) -> IResult<&str, char> {
    map_opt(alphanumeric1, lookup_named_entity).parse(input)
}
