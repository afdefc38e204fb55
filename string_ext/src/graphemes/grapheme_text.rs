// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Debug, Display},
          hash::{Hash, Hasher}};

use super::{GraphemeBoundaries, GraphemeRange, Seg, SegIndex, SegWidth, SegmentArray,
            build_segments_for_str, calculate_display_width, seg_width,
            slice_api::{slice_with, try_slice_with}};
use crate::GraphemeSliceError;

/// `GraphemeText` is an immutable [String] paired with its grapheme cluster boundary
/// table.
///
/// The boundary table ([`Self::segments`]) is built once, in [`Self::new`], using
/// [`unicode_segmentation::UnicodeSegmentation`]. This is far more sophisticated than
/// just using [`str::chars()`], and it handles things like jumbo emoji `🙏🏽` and
/// combining marks `e\u{301}`. After construction nothing is ever mutated, so a
/// `GraphemeText` can be shared across threads freely, and converting an offset into a
/// byte index is `O(1)`.
///
/// Two `GraphemeText`s are equal iff their grapheme sequences are equal, which is the
/// same thing as their strings being equal.
///
/// ```
/// use r3bl_string_ext::{GraphemeText, seg_width};
///
/// let text = GraphemeText::new("e\u{301}b");
/// assert_eq!(text.len(), seg_width(2));
/// assert_eq!(text.slice(..1), "e\u{301}");
/// assert_eq!(text.slice(1..), "b");
/// ```
#[derive(Clone)]
pub struct GraphemeText {
    string: String,
    /// One [`Seg`] per grapheme cluster, in order.
    segments: SegmentArray,
    display_width: usize,
}

mod construct {
    use super::{GraphemeText, build_segments_for_str, calculate_display_width};

    impl GraphemeText {
        /// Segment `arg_str` into grapheme clusters and keep the boundary table.
        pub fn new(arg_str: impl Into<String>) -> GraphemeText {
            let string: String = arg_str.into();
            let segments = build_segments_for_str(&string);
            let display_width = calculate_display_width(&segments);
            GraphemeText {
                string,
                segments,
                display_width,
            }
        }
    }

    impl From<&str> for GraphemeText {
        fn from(value: &str) -> Self { GraphemeText::new(value) }
    }

    impl From<&String> for GraphemeText {
        fn from(value: &String) -> Self { GraphemeText::new(value.as_str()) }
    }

    impl From<String> for GraphemeText {
        fn from(value: String) -> Self { GraphemeText::new(value) }
    }

    impl From<GraphemeText> for String {
        fn from(value: GraphemeText) -> Self { value.string }
    }
}

mod access {
    use super::{GraphemeText, Seg, SegIndex, SegWidth, seg_width};

    impl GraphemeText {
        /// Returns the number of grapheme clusters in this text. This is the same as the
        /// length of [`Self::segments`], and not the byte size or the display width.
        #[must_use]
        pub fn len(&self) -> SegWidth { seg_width(self.segments.len()) }

        #[must_use]
        pub fn is_empty(&self) -> bool { self.segments.is_empty() }

        #[must_use]
        pub fn as_str(&self) -> &str { &self.string }

        /// The boundary table: one [`Seg`] per grapheme cluster, in order. Read only,
        /// since slicing trusts it to line up with the string's char boundaries.
        #[must_use]
        pub fn segments(&self) -> &[Seg] { &self.segments }

        /// Number of terminal columns this text takes up.
        #[must_use]
        pub fn display_width(&self) -> usize { self.display_width }

        /// Size of the underlying string in bytes.
        #[must_use]
        pub fn bytes_size(&self) -> usize { self.string.len() }

        /// Given the grapheme cluster segment index, return the corresponding [Seg].
        pub fn get(&self, arg_seg_index: impl Into<SegIndex>) -> Option<Seg> {
            let index: SegIndex = arg_seg_index.into();
            self.segments.get(index.as_usize()).copied()
        }

        /// Given the grapheme cluster segment index, return the grapheme cluster itself.
        pub fn get_str(&self, arg_seg_index: impl Into<SegIndex>) -> Option<&str> {
            self.get(arg_seg_index).map(|seg| seg.get_str(self))
        }

        /// Iterator over the grapheme clusters as `&str`.
        pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
            self.segments.iter().map(|seg| seg.get_str(self))
        }

        /// Iterator over the [`Seg`]s (boundary table entries). Use [`Self::iter`] if you
        /// only care about the `&str` clusters.
        pub fn seg_iter(&self) -> impl DoubleEndedIterator<Item = &Seg> {
            self.segments.iter()
        }

        /// A grapheme is "wide" when it takes up more than one terminal column, eg: `📦`.
        #[must_use]
        pub fn contains_wide_segments(&self) -> bool {
            self.segments.iter().any(|seg| seg.display_width > 1)
        }
    }
}

impl GraphemeBoundaries for GraphemeText {
    fn source_str(&self) -> &str { &self.string }

    fn seg_count(&self) -> SegWidth { self.len() }

    /// `O(1)` lookup in the boundary table. The boundary after the last segment is the
    /// end of the string.
    fn boundary_byte_index(&self, offset: SegIndex) -> Option<usize> {
        let offset = offset.as_usize();
        match self.segments.get(offset) {
            Some(seg) => Some(seg.start_byte_index),
            None => (offset == self.segments.len()).then_some(self.string.len()),
        }
    }
}

mod slicing {
    use super::{GraphemeRange, GraphemeSliceError, GraphemeText, slice_with,
                try_slice_with};

    impl GraphemeText {
        /// Return the graphemes covered by `range` as a slice of this text. Accepts the
        /// std range types (`lo..hi`, `lo..=hi`, `..hi`, `..=hi`, `lo..`, `..`) and
        /// [`crate::RangeShape`].
        ///
        /// # Panics
        ///
        /// Panics if the range is out of bounds for this text (see
        /// [`GraphemeSliceError`] for the exact conditions). Use [`Self::try_slice`] for
        /// a recoverable variant.
        #[must_use]
        pub fn slice(&self, range: impl GraphemeRange) -> &str { slice_with(self, range) }

        /// Same as [`Self::slice`] but returns an error instead of panicking.
        ///
        /// # Errors
        ///
        /// Returns a [`GraphemeSliceError`] if the range is out of bounds for this text.
        pub fn try_slice(
            &self,
            range: impl GraphemeRange,
        ) -> Result<&str, GraphemeSliceError> {
            try_slice_with(self, range)
        }
    }
}

impl AsRef<str> for GraphemeText {
    fn as_ref(&self) -> &str { &self.string }
}

impl PartialEq for GraphemeText {
    fn eq(&self, other: &Self) -> bool { self.string == other.string }
}

impl Eq for GraphemeText {}

impl Hash for GraphemeText {
    fn hash<H: Hasher>(&self, state: &mut H) { self.string.hash(state); }
}

impl Display for GraphemeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.string)
    }
}

/// Short and readable debug output for [`GraphemeText`].
impl Debug for GraphemeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "GraphemeText {{ str: {:?} ┆ len: {} ┆ width: {} }}",
            self.string,
            self.segments.len(),
            self.display_width
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, seg_index};

    #[test]
    fn test_empty() {
        let text = GraphemeText::new("");
        assert!(text.is_empty());
        assert_eq2!(text.len(), seg_width(0));
        assert_eq2!(text.display_width(), 0);
        assert_eq2!(text.boundary_byte_index(seg_index(0)), Some(0));
        assert_eq2!(text.boundary_byte_index(seg_index(1)), None);
    }

    #[test]
    fn test_len_counts_graphemes_not_bytes() {
        let text = GraphemeText::new("Hi📦🙏🏽");
        assert_eq2!(text.len(), seg_width(4));
        assert_eq2!(text.bytes_size(), 14);
        assert_eq2!(text.display_width(), 6);
        assert!(text.contains_wide_segments());
    }

    #[test]
    fn test_get_and_iter() {
        let text = GraphemeText::new("ae\u{301}📦");
        assert_eq2!(text.get_str(1), Some("e\u{301}"));
        assert_eq2!(text.get_str(3), None);
        assert_eq2!(
            text.iter().collect::<Vec<_>>(),
            vec!["a", "e\u{301}", "📦"]
        );
        assert_eq2!(text.iter().rev().next(), Some("📦"));
    }

    #[test]
    fn test_segments_line_up_with_char_boundaries() {
        let text = GraphemeText::new("a🙏🏽e\u{301}");
        let segments = text.segments();
        assert_eq2!(segments.len(), 3);
        assert_eq2!(segments.len(), text.seg_iter().count());
        for seg in segments {
            assert!(text.as_str().is_char_boundary(seg.start_byte_index));
            assert!(text.as_str().is_char_boundary(seg.end_byte_index));
        }
        assert_eq2!(segments[2].get_str(&text), "e\u{301}");
        assert_eq2!(text.slice(1..), "🙏🏽e\u{301}");
    }

    #[test]
    fn test_boundary_byte_index_uses_table() {
        let text = GraphemeText::new("📦🙏🏽x");
        assert_eq2!(text.boundary_byte_index(seg_index(0)), Some(0));
        assert_eq2!(text.boundary_byte_index(seg_index(1)), Some(4));
        assert_eq2!(text.boundary_byte_index(seg_index(2)), Some(12));
        assert_eq2!(text.boundary_byte_index(seg_index(3)), Some(13));
        assert_eq2!(text.boundary_byte_index(seg_index(4)), None);
    }

    #[test]
    fn test_equality_and_conversions() {
        let lhs: GraphemeText = "héllo".into();
        let rhs = GraphemeText::new(String::from("héllo"));
        assert_eq2!(lhs, rhs);
        assert_ne!(lhs, GraphemeText::new("hello"));
        assert_eq2!(lhs.to_string(), "héllo");
        assert_eq2!(String::from(rhs), "héllo".to_string());
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphemeText>();
    }

    #[test]
    fn test_shared_across_threads() {
        let text = std::sync::Arc::new(GraphemeText::new("a📦b"));
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let text = text.clone();
                std::thread::spawn(move || text.slice(1..2).to_string())
            })
            .collect();
        for handle in handles {
            assert_eq2!(handle.join().unwrap(), "📦");
        }
    }
}
