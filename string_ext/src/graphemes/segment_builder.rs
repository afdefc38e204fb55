// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::{Seg, SegIndex, seg_index};

/// Storage for the boundary table. Short strings don't spill to the heap.
pub type SegmentArray = SmallVec<[Seg; VEC_SEGMENT_SIZE]>;
pub const VEC_SEGMENT_SIZE: usize = 28;

/// `true` if every byte of `input` is its own grapheme cluster. That's any ASCII text,
/// except that `\r\n` is a single cluster.
#[must_use]
pub fn is_one_byte_per_grapheme(input: &str) -> bool {
    input.is_ascii() && !input.contains("\r\n")
}

/// Build grapheme cluster segments for any string slice.
///
/// This function analyzes a UTF-8 string and creates a segment for each extended
/// grapheme cluster (user-perceived character). It includes a fast path for text where
/// [`is_one_byte_per_grapheme`] holds.
///
/// # Returns
///
/// A [`SegmentArray`] containing one [`Seg`] for each grapheme cluster in the input.
#[must_use]
pub fn build_segments_for_str(input: &str) -> SegmentArray {
    // ASCII fast path.
    if is_one_byte_per_grapheme(input) {
        return build_ascii_segments(input);
    }

    let mut segments = SegmentArray::new();
    let mut display_col = 0;

    for (seg_idx, (byte_offset, grapheme)) in input.grapheme_indices(true).enumerate() {
        let display_width = UnicodeWidthStr::width(grapheme);

        segments.push(Seg {
            start_byte_index: byte_offset,
            end_byte_index: byte_offset + grapheme.len(),
            display_width,
            seg_index: seg_index(seg_idx),
            start_display_col_index: display_col,
        });

        display_col += display_width;
    }

    segments
}

/// Build segments for ASCII-only strings (optimized path).
fn build_ascii_segments(input: &str) -> SegmentArray {
    let mut segments = SegmentArray::with_capacity(input.len());

    for i in 0..input.len() {
        segments.push(Seg {
            start_byte_index: i,
            end_byte_index: i + 1,
            display_width: 1,
            seg_index: seg_index(i),
            start_display_col_index: i,
        });
    }

    segments
}

/// Calculate total display width from segments.
#[must_use]
pub fn calculate_display_width(segments: &SegmentArray) -> usize {
    segments.last().map_or(
        /* None */ 0,
        /* Some */ |seg| seg.start_display_col_index + seg.display_width,
    )
}

/// Walk the grapheme boundaries of `input` from the start, and return the byte index of
/// the boundary at `offset`. Offset `0` is the start of the text, and offset `N` (where
/// `N` is the grapheme count) is the end of the text, ie `input.len()`.
///
/// Returns [None] if `offset` is greater than the grapheme count.
///
/// This is `O(offset)`. Use [`super::GraphemeText`] to precompute the boundaries once
/// when the same text is sliced repeatedly.
///
/// ```
/// use r3bl_string_ext::{grapheme_boundary_byte_index, seg_index};
///
/// let input = "e\u{301}b";
/// assert_eq!(grapheme_boundary_byte_index(input, seg_index(0)), Some(0));
/// assert_eq!(grapheme_boundary_byte_index(input, seg_index(1)), Some(3));
/// assert_eq!(grapheme_boundary_byte_index(input, seg_index(2)), Some(4));
/// assert_eq!(grapheme_boundary_byte_index(input, seg_index(3)), None);
/// ```
#[must_use]
pub fn grapheme_boundary_byte_index(
    input: &str,
    arg_offset: impl Into<SegIndex>,
) -> Option<usize> {
    let offset = arg_offset.into().as_usize();

    // ASCII fast path.
    if is_one_byte_per_grapheme(input) {
        return (offset <= input.len()).then_some(offset);
    }

    input
        .grapheme_indices(true)
        .map(|(byte_index, _)| byte_index)
        .chain(std::iter::once(input.len()))
        .nth(offset)
}

/// Count the grapheme clusters in `input`. This is `O(n)`.
#[must_use]
pub fn grapheme_count(input: &str) -> usize {
    if is_one_byte_per_grapheme(input) {
        input.len()
    } else {
        input.graphemes(true).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_build_segments_ascii() {
        let segments = build_segments_for_str("Hello");

        assert_eq2!(segments.len(), 5);
        assert_eq2!(calculate_display_width(&segments), 5);

        let seg = &segments[0];
        assert_eq2!(seg.start_byte_index, 0);
        assert_eq2!(seg.end_byte_index, 1);
        assert_eq2!(seg.display_width, 1);
        assert_eq2!(seg.start_display_col_index, 0);
    }

    #[test]
    fn test_build_segments_emoji() {
        let segments = build_segments_for_str("H😀!");

        assert_eq2!(segments.len(), 3);
        assert_eq2!(calculate_display_width(&segments), 4); // H(1) + 😀(2) + !(1)

        let emoji_seg = &segments[1];
        assert_eq2!(emoji_seg.start_byte_index, 1);
        assert_eq2!(emoji_seg.end_byte_index, 5); // 4 bytes
        assert_eq2!(emoji_seg.display_width, 2);
        assert_eq2!(emoji_seg.start_display_col_index, 1);
    }

    #[test]
    fn test_build_segments_jumbo_emoji() {
        let segments = build_segments_for_str("🙏🏽"); // Folded hands with skin tone.

        assert_eq2!(segments.len(), 1);
        assert_eq2!(segments[0].bytes_size(), 8); // 4 bytes for 🙏 + 4 bytes for 🏽
        assert_eq2!(calculate_display_width(&segments), 2);
    }

    #[test]
    fn test_build_segments_empty() {
        let segments = build_segments_for_str("");
        assert!(segments.is_empty());
        assert_eq2!(calculate_display_width(&segments), 0);
    }

    #[test]
    fn test_boundaries_are_contiguous() {
        let input = "a👨🏾‍🤝‍👨🏿e\u{301}z";
        let segments = build_segments_for_str(input);
        assert_eq2!(segments.len(), 4);
        assert_eq2!(segments[0].start_byte_index, 0);
        for pair in segments.windows(2) {
            assert_eq2!(pair[0].end_byte_index, pair[1].start_byte_index);
        }
        assert_eq2!(segments[3].end_byte_index, input.len());
    }

    #[test]
    fn test_grapheme_boundary_byte_index_ascii() {
        assert_eq2!(grapheme_boundary_byte_index("hello", 0), Some(0));
        assert_eq2!(grapheme_boundary_byte_index("hello", 5), Some(5));
        assert_eq2!(grapheme_boundary_byte_index("hello", 6), None);
        assert_eq2!(grapheme_boundary_byte_index("", 0), Some(0));
        assert_eq2!(grapheme_boundary_byte_index("", 1), None);
    }

    #[test]
    fn test_grapheme_boundary_byte_index_unicode() {
        let input = "📦🙏🏽x";
        assert_eq2!(grapheme_boundary_byte_index(input, 1), Some(4));
        assert_eq2!(grapheme_boundary_byte_index(input, 2), Some(12));
        assert_eq2!(grapheme_boundary_byte_index(input, 3), Some(13));
        assert_eq2!(grapheme_boundary_byte_index(input, 4), None);
    }

    #[test]
    fn test_crlf_is_one_grapheme() {
        assert!(is_one_byte_per_grapheme("a\nb"));
        assert!(!is_one_byte_per_grapheme("a\r\nb"));
        assert!(!is_one_byte_per_grapheme("é"));

        let segments = build_segments_for_str("a\r\nb");
        assert_eq2!(segments.len(), 3);
        assert_eq2!(segments[1].bytes_size(), 2);
        assert_eq2!(grapheme_boundary_byte_index("a\r\nb", 2), Some(3));
        assert_eq2!(grapheme_count("a\r\nb"), 3);
    }

    #[test]
    fn test_grapheme_count() {
        assert_eq2!(grapheme_count(""), 0);
        assert_eq2!(grapheme_count("hello"), 5);
        assert_eq2!(grapheme_count("e\u{301}b"), 2);
        assert_eq2!(grapheme_count("👨‍👩‍👧‍👦!"), 2);
    }
}
