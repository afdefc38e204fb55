// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Horizontal whitespace: TAB plus every character in the Unicode `Zs` (space
/// separator) general category. Line breaks are not part of this set.
#[must_use]
pub fn is_horizontal_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
    )
}

/// Removes every horizontal whitespace character (see [`is_horizontal_whitespace`]),
/// not only the leading and trailing ones, but also those in the middle of the string.
/// Newlines are kept.
///
/// ```
/// use r3bl_string_ext::removing_whitespaces;
///
/// assert_eq!(removing_whitespaces("  a b\tc\n"), "abc\n");
/// ```
#[must_use]
pub fn removing_whitespaces(input: &str) -> String {
    input.chars().filter(|&c| !is_horizontal_whitespace(c)).collect()
}

/// Removes the leading and trailing whitespace and newlines (anything with the Unicode
/// `White_Space` property). Borrows from `input`.
///
/// ```
/// use r3bl_string_ext::trimming_whitespaces_and_new_lines;
///
/// assert_eq!(trimming_whitespaces_and_new_lines("\n\t hello world \r\n"), "hello world");
/// ```
#[must_use]
pub fn trimming_whitespaces_and_new_lines(input: &str) -> &str { input.trim() }

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test_case("", "" ; "empty")]
    #[test_case("abc", "abc" ; "no whitespace")]
    #[test_case(" a b c ", "abc" ; "spaces")]
    #[test_case("a\tb", "ab" ; "tab")]
    #[test_case("a\u{00A0}b\u{3000}c", "abc" ; "unicode spaces")]
    #[test_case("a\nb\r\n", "a\nb\r\n" ; "newlines are kept")]
    fn test_removing_whitespaces(input: &str, expected: &str) {
        assert_eq2!(removing_whitespaces(input), expected);
    }

    #[test_case("", "" ; "empty")]
    #[test_case("   ", "" ; "only spaces")]
    #[test_case("\n hi there \t\n", "hi there" ; "both ends")]
    #[test_case("\u{2003}hi\u{2028}", "hi" ; "unicode whitespace")]
    fn test_trimming(input: &str, expected: &str) {
        assert_eq2!(trimming_whitespaces_and_new_lines(input), expected);
    }
}
