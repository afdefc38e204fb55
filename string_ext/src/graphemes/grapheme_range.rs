// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive};

use super::{SegIndex, SegWidth, seg_index};
use crate::GraphemeSliceError;

/// A range of grapheme offsets, as a value. Each variant matches one of the std range
/// types (which can be used directly wherever an [`impl GraphemeRange`](GraphemeRange)
/// is accepted).
///
/// | Variant    | Std range | Graphemes    |
/// | ---------- | --------- | ------------ |
/// | `HalfOpen` | `lo..hi`  | `[lo, hi)`   |
/// | `Closed`   | `lo..=hi` | `[lo, hi]`   |
/// | `UpTo`     | `..hi`    | `[0, hi)`    |
/// | `Through`  | `..=hi`   | `[0, hi]`    |
/// | `From`     | `lo..`    | `[lo, len)`  |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeShape {
    HalfOpen { lo: usize, hi: usize },
    Closed { lo: usize, hi: usize },
    UpTo { hi: usize },
    Through { hi: usize },
    From { lo: usize },
}

/// A range of grapheme offsets that has been checked against a text, and normalized to
/// a half open range `[start, end)`. Holds `start <= end <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedSegRange {
    pub start: SegIndex,
    pub end: SegIndex,
}

impl ResolvedSegRange {
    /// Number of graphemes covered.
    #[must_use]
    pub fn len(&self) -> usize { *self.end - *self.start }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start == self.end }
}

/// Anything that can be resolved into a [`ResolvedSegRange`] for a text with `len`
/// graphemes. Resolution never clamps: if the range doesn't fit, it is an error.
pub trait GraphemeRange {
    /// # Errors
    ///
    /// Returns a [`GraphemeSliceError`] when the range violates
    /// `0 <= lo <= hi <= len` (or `hi < len` for the inclusive shapes).
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError>;
}

mod resolve_helpers {
    use super::{GraphemeSliceError, ResolvedSegRange, SegWidth, seg_index};

    pub fn half_open(
        lo: usize,
        hi: usize,
        len: SegWidth,
    ) -> Result<ResolvedSegRange, GraphemeSliceError> {
        let len = len.as_usize();
        if hi > len {
            return Err(GraphemeSliceError::UpperBoundOutOfBounds { hi, len });
        }
        if lo > hi {
            return Err(GraphemeSliceError::LowerBoundAfterUpperBound { lo, hi });
        }
        Ok(ResolvedSegRange {
            start: seg_index(lo),
            end: seg_index(hi),
        })
    }

    /// `hi` must itself be a valid offset, ie `hi + 1 <= len`.
    pub fn closed(
        lo: usize,
        hi: usize,
        len: SegWidth,
    ) -> Result<ResolvedSegRange, GraphemeSliceError> {
        let len = len.as_usize();
        if hi >= len {
            return Err(GraphemeSliceError::InclusiveUpperBoundOutOfBounds { hi, len });
        }
        if lo > hi {
            return Err(GraphemeSliceError::LowerBoundAfterUpperBound { lo, hi });
        }
        Ok(ResolvedSegRange {
            start: seg_index(lo),
            end: seg_index(hi + 1),
        })
    }

    pub fn from(lo: usize, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        let len = len.as_usize();
        if lo > len {
            return Err(GraphemeSliceError::LowerBoundOutOfBounds { lo, len });
        }
        Ok(ResolvedSegRange {
            start: seg_index(lo),
            end: seg_index(len),
        })
    }
}

impl GraphemeRange for RangeShape {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        match *self {
            RangeShape::HalfOpen { lo, hi } => resolve_helpers::half_open(lo, hi, len),
            RangeShape::Closed { lo, hi } => resolve_helpers::closed(lo, hi, len),
            RangeShape::UpTo { hi } => resolve_helpers::half_open(0, hi, len),
            RangeShape::Through { hi } => resolve_helpers::closed(0, hi, len),
            RangeShape::From { lo } => resolve_helpers::from(lo, len),
        }
    }
}

impl GraphemeRange for Range<usize> {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        resolve_helpers::half_open(self.start, self.end, len)
    }
}

impl GraphemeRange for RangeInclusive<usize> {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        resolve_helpers::closed(*self.start(), *self.end(), len)
    }
}

impl GraphemeRange for RangeTo<usize> {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        resolve_helpers::half_open(0, self.end, len)
    }
}

impl GraphemeRange for RangeToInclusive<usize> {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        resolve_helpers::closed(0, self.end, len)
    }
}

impl GraphemeRange for RangeFrom<usize> {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        resolve_helpers::from(self.start, len)
    }
}

impl GraphemeRange for RangeFull {
    fn resolve(&self, len: SegWidth) -> Result<ResolvedSegRange, GraphemeSliceError> {
        resolve_helpers::from(0, len)
    }
}

mod convert {
    use super::{Range, RangeFrom, RangeInclusive, RangeShape, RangeTo, RangeToInclusive};

    impl From<Range<usize>> for RangeShape {
        fn from(it: Range<usize>) -> Self {
            RangeShape::HalfOpen {
                lo: it.start,
                hi: it.end,
            }
        }
    }

    impl From<RangeInclusive<usize>> for RangeShape {
        fn from(it: RangeInclusive<usize>) -> Self {
            let (lo, hi) = it.into_inner();
            RangeShape::Closed { lo, hi }
        }
    }

    impl From<RangeTo<usize>> for RangeShape {
        fn from(it: RangeTo<usize>) -> Self { RangeShape::UpTo { hi: it.end } }
    }

    impl From<RangeToInclusive<usize>> for RangeShape {
        fn from(it: RangeToInclusive<usize>) -> Self { RangeShape::Through { hi: it.end } }
    }

    impl From<RangeFrom<usize>> for RangeShape {
        fn from(it: RangeFrom<usize>) -> Self { RangeShape::From { lo: it.start } }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{assert_eq2, seg_width};

    fn resolved(start: usize, end: usize) -> ResolvedSegRange {
        ResolvedSegRange {
            start: seg_index(start),
            end: seg_index(end),
        }
    }

    #[test_case(RangeShape::HalfOpen { lo: 1, hi: 4 }, resolved(1, 4) ; "half open")]
    #[test_case(RangeShape::Closed { lo: 1, hi: 3 }, resolved(1, 4) ; "closed")]
    #[test_case(RangeShape::UpTo { hi: 2 }, resolved(0, 2) ; "up to")]
    #[test_case(RangeShape::Through { hi: 2 }, resolved(0, 3) ; "through")]
    #[test_case(RangeShape::From { lo: 3 }, resolved(3, 5) ; "from")]
    #[test_case(RangeShape::HalfOpen { lo: 5, hi: 5 }, resolved(5, 5) ; "empty at end")]
    #[test_case(RangeShape::From { lo: 5 }, resolved(5, 5) ; "from end")]
    fn test_resolve_ok(shape: RangeShape, expected: ResolvedSegRange) {
        assert_eq2!(shape.resolve(seg_width(5)), Ok(expected));
    }

    #[test_case(
        RangeShape::HalfOpen { lo: 0, hi: 6 },
        GraphemeSliceError::UpperBoundOutOfBounds { hi: 6, len: 5 } ;
        "half open past end"
    )]
    #[test_case(
        RangeShape::HalfOpen { lo: 3, hi: 2 },
        GraphemeSliceError::LowerBoundAfterUpperBound { lo: 3, hi: 2 } ;
        "half open reversed"
    )]
    #[test_case(
        RangeShape::Closed { lo: 0, hi: 5 },
        GraphemeSliceError::InclusiveUpperBoundOutOfBounds { hi: 5, len: 5 } ;
        "closed at len"
    )]
    #[test_case(
        RangeShape::Closed { lo: 4, hi: 2 },
        GraphemeSliceError::LowerBoundAfterUpperBound { lo: 4, hi: 2 } ;
        "closed reversed"
    )]
    #[test_case(
        RangeShape::Through { hi: usize::MAX },
        GraphemeSliceError::InclusiveUpperBoundOutOfBounds { hi: usize::MAX, len: 5 } ;
        "through does not overflow"
    )]
    #[test_case(
        RangeShape::From { lo: 6 },
        GraphemeSliceError::LowerBoundOutOfBounds { lo: 6, len: 5 } ;
        "from past end"
    )]
    fn test_resolve_err(shape: RangeShape, expected: GraphemeSliceError) {
        assert_eq2!(shape.resolve(seg_width(5)), Err(expected));
    }

    #[test]
    fn test_std_ranges_match_shapes() {
        let len = seg_width(5);
        assert_eq2!((1_usize..4).resolve(len), RangeShape::from(1..4).resolve(len));
        assert_eq2!((1_usize..=3).resolve(len), RangeShape::from(1..=3).resolve(len));
        assert_eq2!((..2_usize).resolve(len), RangeShape::from(..2).resolve(len));
        assert_eq2!((..=2_usize).resolve(len), RangeShape::from(..=2).resolve(len));
        assert_eq2!((3_usize..).resolve(len), RangeShape::from(3..).resolve(len));
        assert_eq2!((..).resolve(len), Ok(resolved(0, 5)));
    }

    #[test]
    fn test_through_on_empty_text_is_out_of_bounds() {
        assert_eq2!(
            (..=0_usize).resolve(seg_width(0)),
            Err(GraphemeSliceError::InclusiveUpperBoundOutOfBounds { hi: 0, len: 0 })
        );
    }

    #[test]
    fn test_resolved_len() {
        assert_eq2!(resolved(1, 4).len(), 3);
        assert!(resolved(2, 2).is_empty());
    }
}
