// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The five named slicing operations, in a panicking flavor and a `try_` flavor (which
//! returns a [`GraphemeSliceError`]).
//!
//! They all accept anything that implements [`GraphemeBoundaries`]:
//! - [`super::GraphemeText`], which has a precomputed boundary table, so each call is
//!   `O(1)` after the bounds check.
//! - [`str`], where the boundaries are walked from the start on every call.
//!
//! ```
//! use r3bl_string_ext::*;
//!
//! let text = GraphemeText::new("hello");
//! assert_eq!(slice_half_open(&text, 1, 4), "ell");
//! assert_eq!(slice_closed(&text, 1, 3), "ell");
//! assert_eq!(slice_up_to(&text, 2), "he");
//! assert_eq!(slice_through(&text, 2), "hel");
//! assert_eq!(slice_from(&text, 3), "lo");
//!
//! assert_eq!(
//!     try_slice_half_open("hi", 0, 3),
//!     Err(GraphemeSliceError::UpperBoundOutOfBounds { hi: 3, len: 2 })
//! );
//! ```

use super::{GraphemeRange, RangeShape, SegIndex, SegWidth, grapheme_boundary_byte_index,
            grapheme_count, seg_width};
use crate::GraphemeSliceError;

/// A text whose grapheme boundaries can be resolved to byte indices.
pub trait GraphemeBoundaries {
    /// The underlying string that the boundaries index into.
    fn source_str(&self) -> &str;

    /// Number of grapheme clusters.
    fn seg_count(&self) -> SegWidth;

    /// Byte index of the boundary at `offset`, where offset `0` is the start and offset
    /// [`Self::seg_count`] is the end. [None] if past the end.
    fn boundary_byte_index(&self, offset: SegIndex) -> Option<usize>;
}

impl GraphemeBoundaries for str {
    fn source_str(&self) -> &str { self }

    fn seg_count(&self) -> SegWidth { seg_width(grapheme_count(self)) }

    fn boundary_byte_index(&self, offset: SegIndex) -> Option<usize> {
        grapheme_boundary_byte_index(self, offset)
    }
}

impl GraphemeBoundaries for String {
    fn source_str(&self) -> &str { self.as_str() }

    fn seg_count(&self) -> SegWidth { self.as_str().seg_count() }

    fn boundary_byte_index(&self, offset: SegIndex) -> Option<usize> {
        self.as_str().boundary_byte_index(offset)
    }
}

/// Resolve `range` against `text` and return the covered graphemes.
///
/// # Errors
///
/// Returns a [`GraphemeSliceError`] if the range doesn't fit in `text`.
pub fn try_slice_with<'a, T>(
    text: &'a T,
    range: impl GraphemeRange,
) -> Result<&'a str, GraphemeSliceError>
where
    T: GraphemeBoundaries + ?Sized,
{
    let len = text.seg_count();
    let resolved = range.resolve(len)?;

    // Resolution guarantees `start <= end <= len`, so both boundaries exist.
    let out_of_bounds = GraphemeSliceError::UpperBoundOutOfBounds {
        hi: resolved.end.as_usize(),
        len: len.as_usize(),
    };
    let start_byte_index = text
        .boundary_byte_index(resolved.start)
        .ok_or(out_of_bounds)?;
    let end_byte_index = text.boundary_byte_index(resolved.end).ok_or(out_of_bounds)?;

    Ok(&text.source_str()[start_byte_index..end_byte_index])
}

/// Resolve `range` against `text` and return the covered graphemes.
///
/// # Panics
///
/// Panics with the [`GraphemeSliceError`] message if the range doesn't fit in `text`.
#[must_use]
pub fn slice_with<'a, T>(text: &'a T, range: impl GraphemeRange) -> &'a str
where
    T: GraphemeBoundaries + ?Sized,
{
    match try_slice_with(text, range) {
        Ok(it) => it,
        Err(error) => panic!("{error}"),
    }
}

/// Graphemes `[lo, hi)`. Requires `0 <= lo <= hi <= len`.
///
/// # Panics
///
/// Panics if `hi > len` or `lo > hi`.
#[must_use]
pub fn slice_half_open<T>(text: &T, lo: usize, hi: usize) -> &str
where
    T: GraphemeBoundaries + ?Sized,
{
    slice_with(text, RangeShape::HalfOpen { lo, hi })
}

/// Graphemes `[lo, hi]`. Requires `0 <= lo <= hi < len`.
///
/// # Panics
///
/// Panics if `hi >= len` or `lo > hi`.
#[must_use]
pub fn slice_closed<T>(text: &T, lo: usize, hi: usize) -> &str
where
    T: GraphemeBoundaries + ?Sized,
{
    slice_with(text, RangeShape::Closed { lo, hi })
}

/// Graphemes `[0, hi)`. Same as `slice_half_open(text, 0, hi)`.
///
/// # Panics
///
/// Panics if `hi > len`.
#[must_use]
pub fn slice_up_to<T>(text: &T, hi: usize) -> &str
where
    T: GraphemeBoundaries + ?Sized,
{
    slice_with(text, RangeShape::UpTo { hi })
}

/// Graphemes `[0, hi]`. Same as `slice_closed(text, 0, hi)`.
///
/// # Panics
///
/// Panics if `hi >= len`, which includes every `hi` for an empty text.
#[must_use]
pub fn slice_through<T>(text: &T, hi: usize) -> &str
where
    T: GraphemeBoundaries + ?Sized,
{
    slice_with(text, RangeShape::Through { hi })
}

/// Graphemes `[lo, len)`. Same as `slice_half_open(text, lo, len)`.
///
/// # Panics
///
/// Panics if `lo > len`.
#[must_use]
pub fn slice_from<T>(text: &T, lo: usize) -> &str
where
    T: GraphemeBoundaries + ?Sized,
{
    slice_with(text, RangeShape::From { lo })
}

/// Recoverable [`slice_half_open`].
///
/// # Errors
///
/// [`GraphemeSliceError::UpperBoundOutOfBounds`] or
/// [`GraphemeSliceError::LowerBoundAfterUpperBound`].
pub fn try_slice_half_open<T>(
    text: &T,
    lo: usize,
    hi: usize,
) -> Result<&str, GraphemeSliceError>
where
    T: GraphemeBoundaries + ?Sized,
{
    try_slice_with(text, RangeShape::HalfOpen { lo, hi })
}

/// Recoverable [`slice_closed`].
///
/// # Errors
///
/// [`GraphemeSliceError::InclusiveUpperBoundOutOfBounds`] or
/// [`GraphemeSliceError::LowerBoundAfterUpperBound`].
pub fn try_slice_closed<T>(
    text: &T,
    lo: usize,
    hi: usize,
) -> Result<&str, GraphemeSliceError>
where
    T: GraphemeBoundaries + ?Sized,
{
    try_slice_with(text, RangeShape::Closed { lo, hi })
}

/// Recoverable [`slice_up_to`].
///
/// # Errors
///
/// [`GraphemeSliceError::UpperBoundOutOfBounds`].
pub fn try_slice_up_to<T>(text: &T, hi: usize) -> Result<&str, GraphemeSliceError>
where
    T: GraphemeBoundaries + ?Sized,
{
    try_slice_with(text, RangeShape::UpTo { hi })
}

/// Recoverable [`slice_through`].
///
/// # Errors
///
/// [`GraphemeSliceError::InclusiveUpperBoundOutOfBounds`].
pub fn try_slice_through<T>(text: &T, hi: usize) -> Result<&str, GraphemeSliceError>
where
    T: GraphemeBoundaries + ?Sized,
{
    try_slice_with(text, RangeShape::Through { hi })
}

/// Recoverable [`slice_from`].
///
/// # Errors
///
/// [`GraphemeSliceError::LowerBoundOutOfBounds`].
pub fn try_slice_from<T>(text: &T, lo: usize) -> Result<&str, GraphemeSliceError>
where
    T: GraphemeBoundaries + ?Sized,
{
    try_slice_with(text, RangeShape::From { lo })
}
