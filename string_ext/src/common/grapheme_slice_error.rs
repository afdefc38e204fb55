// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Why a grapheme range could not be resolved against a text.
///
/// Every variant is a precondition violation (caller error), not a data condition. The
/// panicking slice functions, eg: [`crate::slice_half_open`], turn these into a panic
/// with this [`Display`](std::fmt::Display) text. The `try_` functions, eg:
/// [`crate::try_slice_half_open`], hand them back to the caller.
///
/// | Variant                            | Range shapes that produce it            |
/// | ---------------------------------- | --------------------------------------- |
/// | [`LowerBoundAfterUpperBound`]      | `lo..hi`, `lo..=hi`                     |
/// | [`UpperBoundOutOfBounds`]          | `lo..hi`, `..hi`                        |
/// | [`InclusiveUpperBoundOutOfBounds`] | `lo..=hi`, `..=hi`                      |
/// | [`LowerBoundOutOfBounds`]          | `lo..`                                  |
///
/// [`LowerBoundAfterUpperBound`]: Self::LowerBoundAfterUpperBound
/// [`UpperBoundOutOfBounds`]: Self::UpperBoundOutOfBounds
/// [`InclusiveUpperBoundOutOfBounds`]: Self::InclusiveUpperBoundOutOfBounds
/// [`LowerBoundOutOfBounds`]: Self::LowerBoundOutOfBounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum GraphemeSliceError {
    #[error("grapheme range start {lo} is after its end {hi}")]
    #[diagnostic(
        code(r3bl_string_ext::graphemes::lower_bound_after_upper_bound),
        help("The start offset of a range must be less than or equal to its end offset.")
    )]
    LowerBoundAfterUpperBound { lo: usize, hi: usize },

    #[error("grapheme range end {hi} is out of bounds for text of {len} graphemes")]
    #[diagnostic(
        code(r3bl_string_ext::graphemes::upper_bound_out_of_bounds),
        help("The end of a half open range can be at most the grapheme count.")
    )]
    UpperBoundOutOfBounds { hi: usize, len: usize },

    #[error(
        "inclusive grapheme range end {hi} is out of bounds for text of {len} graphemes"
    )]
    #[diagnostic(
        code(r3bl_string_ext::graphemes::inclusive_upper_bound_out_of_bounds),
        help("The end of an inclusive range must be less than the grapheme count.")
    )]
    InclusiveUpperBoundOutOfBounds { hi: usize, len: usize },

    #[error("grapheme range start {lo} is out of bounds for text of {len} graphemes")]
    #[diagnostic(
        code(r3bl_string_ext::graphemes::lower_bound_out_of_bounds),
        help("The start of a range can be at most the grapheme count.")
    )]
    LowerBoundOutOfBounds { lo: usize, len: usize },
}
