// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RichTextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub monospace: bool,
    /// Target of the enclosing link, if any.
    pub link: Option<String>,
    /// `1..=6` for text inside `h1` to `h6`.
    pub heading: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichTextSpan {
    pub style: RichTextStyle,
    pub text: String,
}

impl RichTextSpan {
    pub fn new(style: RichTextStyle, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
        }
    }
}

/// A list of styled spans. No two adjacent spans have the same style, and no span is
/// empty; [`RichText::push_span`] maintains this.
///
/// ```
/// use r3bl_string_ext::{RichText, RichTextSpan, RichTextStyle};
///
/// let bold = RichTextStyle { bold: true, ..Default::default() };
/// let mut it = RichText::default();
/// it.push_span(RichTextSpan::new(bold.clone(), "a"));
/// it.push_span(RichTextSpan::new(bold, "b"));
/// it.push_span(RichTextSpan::new(RichTextStyle::default(), ""));
/// assert_eq!(it.len(), 1);
/// assert_eq!(it.to_plain_text(), "ab");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    spans: Vec<RichTextSpan>,
}

mod rich_text_impl_block {
    use super::{RichText, RichTextSpan};

    impl RichText {
        #[must_use]
        pub fn new() -> Self { Self::default() }

        /// Number of spans.
        #[must_use]
        pub fn len(&self) -> usize { self.spans.len() }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.spans.is_empty() }

        pub fn iter(&self) -> impl Iterator<Item = &RichTextSpan> { self.spans.iter() }

        #[must_use]
        pub fn spans(&self) -> &[RichTextSpan] { &self.spans }

        /// Append a span, merging it into the last one if their styles are equal.
        /// Empty spans are skipped.
        pub fn push_span(&mut self, span: RichTextSpan) {
            if span.text.is_empty() {
                return;
            }
            match self.spans.last_mut() {
                Some(last) if last.style == span.style => last.text.push_str(&span.text),
                _ => self.spans.push(span),
            }
        }

        #[must_use]
        pub fn to_plain_text(&self) -> String {
            self.spans.iter().map(|it| it.text.as_str()).collect()
        }

        /// `true` if there's no text yet, or the text ends in whitespace.
        #[must_use]
        pub fn is_at_whitespace(&self) -> bool {
            self.spans
                .last()
                .and_then(|it| it.text.chars().last())
                .is_none_or(char::is_whitespace)
        }

        /// Remove trailing `' '` characters, dropping spans that become empty.
        pub fn trim_trailing_spaces(&mut self) {
            while let Some(last) = self.spans.last_mut() {
                let trimmed_len = last.text.trim_end_matches(' ').len();
                last.text.truncate(trimmed_len);
                if !last.text.is_empty() {
                    break;
                }
                self.spans.pop();
            }
        }
    }

    impl From<RichText> for Vec<RichTextSpan> {
        fn from(value: RichText) -> Self { value.spans }
    }

    impl<'a> IntoIterator for &'a RichText {
        type Item = &'a RichTextSpan;
        type IntoIter = std::slice::Iter<'a, RichTextSpan>;

        fn into_iter(self) -> Self::IntoIter { self.spans.iter() }
    }
}

impl Display for RichText {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for span in &self.spans {
            write!(f, "{}", span.text)?;
        }
        Ok(())
    }
}
