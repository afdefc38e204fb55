// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Rust uses `UTF-8` to represent text in [String]. `UTF-8` is a variable width
//! encoding, so each character can take up a different number of bytes, between 1 and
//! 4. A grapheme cluster is a user-perceived character, and it can be made up of
//! several characters (code points). Here are some examples:
//! - `H` takes up 1 byte, and is 1 code point.
//! - `😃` takes up 4 bytes, and is 1 code point.
//! - `🙏🏽` takes up 8 bytes, and is 2 code points `'🙏' + '🏽'`.
//! - `é` written as `"e\u{301}"` takes up 3 bytes, and is 2 code points `'e' + '´'`.
//!
//! Indexing a [String] with a byte range that lands in the middle of any of these
//! panics (if it splits a code point) or silently produces garbage (if it splits a
//! cluster between code points). This module lets you index text by grapheme offsets
//! instead.
//!
//! # The two kinds of indices
//!
//! ## 1. Byte index - memory position
//!
//! The raw byte offset in the `UTF-8` encoded string. This is what [`str`] slicing
//! uses. It is never exposed in the slicing API, it is an implementation detail that is
//! stored in the boundary table (see [`Seg`]).
//!
//! ## 2. [`SegIndex`] - logical position (grapheme clusters)
//!
//! The offset of a grapheme cluster, counted from the start of the text. All the
//! slicing functions take these (as plain [`usize`] values in std ranges).
//!
//! ```text
//! String: "H😀!"
//!
//! ByteIndex: 0 1 2 3 4 5
//! Content:  [H][😀----][!]
//!
//! SegIndex:  0    1     2
//! Segments: [H] [😀]  [!]
//! ```
//!
//! # Range shapes
//!
//! Five range shapes are supported, each one maps to a std range type via the
//! [`GraphemeRange`] trait, and to a variant of [`RangeShape`]:
//!
//! | Shape     | Std range  | Graphemes returned | Requires                 |
//! | --------- | ---------- | ------------------ | ------------------------ |
//! | Half open | `lo..hi`   | `[lo, hi)`         | `lo <= hi <= len`        |
//! | Closed    | `lo..=hi`  | `[lo, hi]`         | `lo <= hi < len`         |
//! | Up to     | `..hi`     | `[0, hi)`          | `hi <= len`              |
//! | Through   | `..=hi`    | `[0, hi]`          | `hi < len`               |
//! | From      | `lo..`     | `[lo, len)`        | `lo <= len`              |
//!
//! # Boundary resolution
//!
//! [`GraphemeText`] walks the text once when it is constructed and keeps an immutable
//! boundary table, so every later offset lookup is `O(1)`. It is safe to share between
//! threads.
//!
//! Plain [`str`] values can be sliced too (see [`GraphemeSliceExt`]); in that case the
//! boundaries are walked from the start of the text on every call.

// Attach sources.
pub mod grapheme_range;
pub mod grapheme_slice_ext;
pub mod grapheme_text;
pub mod seg;
pub mod seg_index;
pub mod segment_builder;
pub mod slice_api;

// Re-export.
pub use grapheme_range::*;
pub use grapheme_slice_ext::*;
pub use grapheme_text::*;
pub use seg::*;
pub use seg_index::*;
pub use segment_builder::*;
pub use slice_api::*;
