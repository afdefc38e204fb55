// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{GraphemeRange, GraphemeText, grapheme_count,
            slice_api::{slice_with, try_slice_with}};
use crate::GraphemeSliceError;

/// Grapheme aware slicing directly on [`str`] (and so also on [String], via deref).
///
/// Each call walks the grapheme boundaries from the start of the text. If you slice the
/// same text many times, convert it once with [`Self::grapheme_text`] and slice the
/// [`GraphemeText`] instead.
///
/// ```
/// use r3bl_string_ext::GraphemeSliceExt;
///
/// let text = "café📦";
/// assert_eq!(text.grapheme_len(), 5);
/// assert_eq!(text.grapheme_slice(3..), "é📦");
/// assert_eq!(text.grapheme_slice(..=3), "café");
/// assert!(text.try_grapheme_slice(0..6).is_err());
/// ```
pub trait GraphemeSliceExt {
    /// Build a [`GraphemeText`] (with a cached boundary table) from this string.
    fn grapheme_text(&self) -> GraphemeText;

    /// Number of grapheme clusters (not bytes, not chars).
    fn grapheme_len(&self) -> usize;

    /// # Panics
    ///
    /// Panics if `range` doesn't fit in this text. See [`GraphemeSliceError`].
    fn grapheme_slice(&self, range: impl GraphemeRange) -> &str;

    /// # Errors
    ///
    /// Returns a [`GraphemeSliceError`] if `range` doesn't fit in this text.
    fn try_grapheme_slice(
        &self,
        range: impl GraphemeRange,
    ) -> Result<&str, GraphemeSliceError>;
}

impl GraphemeSliceExt for str {
    fn grapheme_text(&self) -> GraphemeText { GraphemeText::new(self) }

    fn grapheme_len(&self) -> usize { grapheme_count(self) }

    fn grapheme_slice(&self, range: impl GraphemeRange) -> &str { slice_with(self, range) }

    fn try_grapheme_slice(
        &self,
        range: impl GraphemeRange,
    ) -> Result<&str, GraphemeSliceError> {
        try_slice_with(self, range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RangeShape, assert_eq2};

    #[test]
    fn test_all_range_shapes_on_str() {
        let text = "hello";
        assert_eq2!(text.grapheme_slice(1..4), "ell");
        assert_eq2!(text.grapheme_slice(1..=3), "ell");
        assert_eq2!(text.grapheme_slice(..2), "he");
        assert_eq2!(text.grapheme_slice(..=2), "hel");
        assert_eq2!(text.grapheme_slice(3..), "lo");
        assert_eq2!(text.grapheme_slice(..), "hello");
        assert_eq2!(text.grapheme_slice(RangeShape::Closed { lo: 0, hi: 0 }), "h");
    }

    #[test]
    fn test_on_string_via_deref() {
        let text = String::from("🙏🏽ok");
        assert_eq2!(text.grapheme_len(), 3);
        assert_eq2!(text.grapheme_slice(0..1), "🙏🏽");
        assert_eq2!(text.grapheme_text().len().as_usize(), 3);
    }

    #[test]
    fn test_try_grapheme_slice() {
        assert_eq2!(
            "hi".try_grapheme_slice(0..3),
            Err(GraphemeSliceError::UpperBoundOutOfBounds { hi: 3, len: 2 })
        );
        assert_eq2!("".try_grapheme_slice(0..0), Ok(""));
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_grapheme_slice_panics() {
        let _unused = "hi".grapheme_slice(0..3);
    }
}
