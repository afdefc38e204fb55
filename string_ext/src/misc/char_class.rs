// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Digit and letter classification.
//!
//! Classification is done per grapheme cluster, using the cluster's base (first)
//! character. So `"e\u{301}"` (e + combining acute accent) counts as one letter, and the
//! combining mark travels with its base when filtering.

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};
use unicode_segmentation::UnicodeSegmentation;

fn base_char(grapheme: &str) -> Option<char> { grapheme.chars().next() }

/// Decimal digits only (general category `Nd`). Fractions, superscripts and roman
/// numerals are numeric but not digits.
fn is_decimal_digit(c: char) -> bool { c.general_category() == GeneralCategory::DecimalNumber }

fn is_digit_cluster(grapheme: &str) -> bool { base_char(grapheme).is_some_and(is_decimal_digit) }

fn is_letter_cluster(grapheme: &str) -> bool {
    base_char(grapheme).is_some_and(char::is_alphabetic)
}

fn is_alphanumeric_cluster(grapheme: &str) -> bool {
    is_letter_cluster(grapheme) || is_digit_cluster(grapheme)
}

fn keep_clusters(input: &str, predicate: impl Fn(&str) -> bool) -> String {
    input.graphemes(true).filter(|it| predicate(it)).collect()
}

/// Returns a string containing only the digits of `input`, or an empty string.
///
/// ```
/// use r3bl_string_ext::numbers_only;
///
/// assert_eq!(numbers_only("(11) 98765-4321"), "11987654321");
/// assert_eq!(numbers_only("abc"), "");
/// ```
#[must_use]
pub fn numbers_only(input: &str) -> String { keep_clusters(input, is_digit_cluster) }

/// True if `input` has one or more digits.
#[must_use]
pub fn has_numbers(input: &str) -> bool { input.graphemes(true).any(is_digit_cluster) }

/// True if `input` has nothing but digits. Vacuously true for an empty string.
#[must_use]
pub fn has_only_numbers(input: &str) -> bool {
    input.graphemes(true).all(is_digit_cluster)
}

/// Returns a string containing only the letters of `input`, or an empty string.
///
/// ```
/// use r3bl_string_ext::letters_only;
///
/// assert_eq!(letters_only("São Paulo - 2018"), "SãoPaulo");
/// ```
#[must_use]
pub fn letters_only(input: &str) -> String { keep_clusters(input, is_letter_cluster) }

/// True if `input` has one or more letters.
#[must_use]
pub fn has_letters(input: &str) -> bool { input.graphemes(true).any(is_letter_cluster) }

/// True if `input` has nothing but letters. Vacuously true for an empty string.
#[must_use]
pub fn has_only_letters(input: &str) -> bool {
    input.graphemes(true).all(is_letter_cluster)
}

/// True if `input` contains at least one letter AND at least one digit AND nothing is
/// left once every letter and digit is removed.
///
/// ```
/// use r3bl_string_ext::is_alpha_numeric;
///
/// assert!(is_alpha_numeric("abc123"));
/// assert!(!is_alpha_numeric("abc"));
/// assert!(!is_alpha_numeric("123"));
/// assert!(!is_alpha_numeric("abc 123"));
/// ```
#[must_use]
pub fn is_alpha_numeric(input: &str) -> bool {
    let leftover_is_empty = input.graphemes(true).all(is_alphanumeric_cluster);
    leftover_is_empty && has_letters(input) && has_numbers(input)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("a1b2c3", "123" ; "mixed")]
    #[test_case("", "" ; "empty")]
    #[test_case("R$ 1.234,56", "123456" ; "currency")]
    #[test_case("٣٤", "٣٤" ; "arabic indic digits")]
    #[test_case("a½b²c", "" ; "fraction and superscript are not digits")]
    #[test_case("Ⅻ7", "7" ; "roman numeral is not a digit")]
    fn test_numbers_only(input: &str, expected: &str) {
        assert_eq2!(numbers_only(input), expected);
    }

    #[test_case("a1b2c3", "abc" ; "mixed")]
    #[test_case("e\u{301}!", "e\u{301}" ; "combining mark stays with its base")]
    #[test_case("123", "" ; "no letters")]
    fn test_letters_only(input: &str, expected: &str) {
        assert_eq2!(letters_only(input), expected);
    }

    #[test]
    fn test_has_numbers() {
        assert!(has_numbers("abc1"));
        assert!(!has_numbers("abc"));
        assert!(!has_numbers(""));
        assert!(!has_numbers("Ⅻ"));
    }

    #[test]
    fn test_has_only_numbers() {
        assert!(has_only_numbers("0123"));
        assert!(!has_only_numbers("0123 "));
        assert!(!has_only_numbers("12a"));
        assert!(has_only_numbers(""));
        assert!(!has_only_numbers("²"));
        assert!(!has_only_numbers("1½"));
    }

    #[test]
    fn test_has_letters() {
        assert!(has_letters("1a"));
        assert!(has_letters("ç"));
        assert!(!has_letters("123 !"));
    }

    #[test]
    fn test_has_only_letters() {
        assert!(has_only_letters("Olá"));
        assert!(has_only_letters("e\u{301}"));
        assert!(!has_only_letters("Olá mundo"));
        assert!(has_only_letters(""));
    }

    #[test_case("abc123", true ; "letters and digits")]
    #[test_case("1a", true ; "short")]
    #[test_case("abc", false ; "letters only")]
    #[test_case("123", false ; "digits only")]
    #[test_case("abc-123", false ; "punctuation")]
    #[test_case("abc 123", false ; "space")]
    #[test_case("", false ; "empty")]
    #[test_case("abc½", false ; "fraction is not a digit")]
    #[test_case("x²", false ; "superscript is not a digit")]
    #[test_case("x٣", true ; "arabic indic digit")]
    fn test_is_alpha_numeric(input: &str, expected: bool) {
        assert_eq2!(is_alpha_numeric(input), expected);
    }
}
