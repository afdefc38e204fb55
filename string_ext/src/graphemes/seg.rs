// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use super::SegIndex;

/// `Seg` is one entry in the boundary table of a [`super::GraphemeText`]: it describes
/// a single grapheme cluster.
///
/// A Unicode "grapheme cluster" is a user-perceived character. It may be made of many
/// code points:
/// - The single letter "A" (U+0041) is one code point.
/// - The letter "á" can be a single code point (U+00E1) or "a" (U+0061) followed by a
///   combining acute accent (U+0301). Either way it is one grapheme cluster.
/// - The `🙏🏽` emoji is `'🙏' + '🏽'`. If you use [`str::chars()`] to parse this, you
///   get two [char]s. [`unicode_segmentation::UnicodeSegmentation`] yields a single
///   grapheme cluster, which is why it is used to build these segments.
///
/// This struct does not allocate anything and is [Copy]. The
/// [`super::GraphemeText`] owns the memory, and each `Seg` is a "view" into one part of
/// it.
///
/// ## Fields
///
/// - `start_byte_index` & `end_byte_index`: the byte range of this cluster in the
///   original string. `end_byte_index` of one segment is the `start_byte_index` of the
///   next one, so these double as the grapheme boundaries.
/// - `seg_index`: the position of this cluster in the sequence of clusters.
/// - `display_width`: the number of terminal columns this cluster occupies.
/// - `start_display_col_index`: the display column at which this cluster starts.
///
/// ## Example
///
/// ```
/// use r3bl_string_ext::{GraphemeText, seg_index};
/// let text = GraphemeText::new("📦🙏🏽");
/// let seg = text.get(1).unwrap();
/// assert_eq!(seg.start_byte_index, 4);
/// assert_eq!(seg.end_byte_index, 12);
/// assert_eq!(seg.seg_index, seg_index(1));
/// assert_eq!(seg.get_str(&text), "🙏🏽");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Ord, PartialOrd, Eq, Hash)]
pub struct Seg {
    /// The start index (bytes), in the string slice, used to generate the
    /// [`super::GraphemeText`] that this grapheme cluster represents.
    pub start_byte_index: usize,

    /// The end index (bytes, exclusive), in the string slice, used to generate the
    /// [`super::GraphemeText`] that this grapheme cluster represents.
    pub end_byte_index: usize,

    /// Display width of the grapheme cluster calculated using
    /// [`unicode_width::UnicodeWidthStr`]. May not be the same as [`Self::bytes_size`].
    pub display_width: usize,

    /// The index of this entry in the [`super::GraphemeText::segments`].
    pub seg_index: SegIndex,

    /// Display col index (in the original string slice) at which this grapheme cluster
    /// starts.
    pub start_display_col_index: usize,
}

/// Pretty print for [`Seg`] that is compact and easier to read. The default
/// implementation takes up too much space and makes it difficult to debug.
impl Debug for Seg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Seg[{s_i:>2}] ┆ byte: [{b_b:>2}, {b_e:>2}] size: {b_s} ┆ col({d_i:>2}) width({d_w:>2})",
            s_i = *self.seg_index,
            b_b = self.start_byte_index,
            b_e = self.end_byte_index,
            b_s = self.bytes_size(),
            d_i = self.start_display_col_index,
            d_w = self.display_width,
        )
    }
}

impl Seg {
    /// The number of bytes this grapheme cluster occupies in the original string slice.
    #[must_use]
    pub fn bytes_size(&self) -> usize { self.end_byte_index - self.start_byte_index }

    /// Get the string slice for the grapheme cluster segment. The `arg_str` parameter
    /// is any type that can be converted into a `&str`, such as
    /// [`super::GraphemeText`]. It must be the string this segment was built from.
    pub fn get_str<'a>(&self, arg_str: &'a (impl AsRef<str> + ?Sized)) -> &'a str {
        let str = arg_str.as_ref();
        &str[self.start_byte_index..self.end_byte_index]
    }
}

#[cfg(test)]
mod tests {
    use crate::{GraphemeText, assert_eq2, seg_index};

    #[test]
    fn test_single_grapheme_cluster() {
        let text = GraphemeText::new("📦");
        let seg = text.segments()[0];
        assert_eq2!(seg.start_byte_index, 0);
        assert_eq2!(seg.end_byte_index, 4);
        assert_eq2!(seg.display_width, 2);
        assert_eq2!(seg.seg_index, seg_index(0));
        assert_eq2!(seg.bytes_size(), 4);
        assert_eq2!(seg.start_display_col_index, 0);
        assert_eq2!(seg.get_str(&text), "📦");
    }

    #[test]
    fn test_combining_grapheme_cluster() {
        // 'e' + combining acute accent.
        let text = GraphemeText::new("e\u{301}");
        assert_eq2!(text.segments().len(), 1);
        let seg = text.segments()[0];
        assert_eq2!(seg.bytes_size(), 3);
        assert_eq2!(seg.display_width, 1);
        assert_eq2!(seg.get_str(&text), "e\u{301}");
    }

    #[test]
    fn test_debug_is_compact() {
        let text = GraphemeText::new("ab");
        let output = format!("{:?}", text.segments()[1]);
        assert!(output.starts_with("Seg[ 1]"));
        assert!(output.contains("byte: [ 1,  2]"));
    }
}
