// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_string_ext
//!
//! Small, stateless string helpers, plus one piece with real edge case semantics:
//! grapheme cluster safe range slicing.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Grapheme safe slicing](#grapheme-safe-slicing)
//! - [String helpers](#string-helpers)
//! - [Logging](#logging)
//!
//! <!-- /TOC -->
//!
//! # Grapheme safe slicing
//!
//! Offsets are counted in user-perceived characters (grapheme clusters), not bytes or
//! code points. So `"e\u{301}b"` has 2 graphemes, and slicing `0..1` returns the whole
//! `"é"` cluster, never half of it. See [`graphemes`] for the details.
//!
//! ```
//! use r3bl_string_ext::{GraphemeSliceExt, GraphemeText, slice_closed, slice_from};
//!
//! let text = GraphemeText::new("hello");
//! assert_eq!(text.slice(1..4), "ell");
//! assert_eq!(slice_closed(&text, 1, 3), "ell");
//! assert_eq!(slice_from(&text, 3), "lo");
//!
//! // Ad hoc slicing on any `&str` (no boundary cache).
//! assert_eq!("📦🙏🏽x".grapheme_slice(1..=1), "🙏🏽");
//! ```
//!
//! There are two flavors of every slicing operation:
//! 1. The plain one, eg: [`slice_half_open`], which panics when the offsets are out of
//!    bounds. Callers are expected to bounds check first.
//! 2. The `try_` one, eg: [`try_slice_half_open`], which returns a
//!    [`GraphemeSliceError`] instead.
//!
//! Ranges are never clamped.
//!
//! # String helpers
//!
//! The [`StringHelpersExt`] trait hangs the helpers off of [`str`]:
//!
//! ```
//! use r3bl_string_ext::StringHelpersExt;
//!
//! assert_eq!(" a b\tc ".removing_whitespaces(), "abc");
//! assert_eq!("a1b2".numbers_only(), "12");
//! assert!("abc123".is_alpha_numeric());
//! assert_eq!(
//!     "16/11/2018".transform_date_format("dd/MM/yyyy", "yyyy-MM-dd"),
//!     Some("2018-11-16".to_string())
//! );
//! assert_eq!("R$ 1.234,56".brazilian_currency_number(), Some(1234.56));
//! ```
//!
//! Helpers that parse something never panic or return an error. When the input can't
//! be parsed they return an absent result ([`None`], or an empty [`RichText`]).
//!
//! # Logging
//!
//! The library emits [`tracing`] events at `debug` level when a helper gives up on its
//! input. Nothing is installed by default; use [`try_initialize_logging_global`] with a
//! [`TracingConfig`] to see them.

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod common;
pub mod currency;
pub mod date;
pub mod graphemes;
pub mod html;
pub mod json;
pub mod log;
pub mod misc;

// Re-export.
pub use common::*;
pub use currency::*;
pub use date::*;
pub use graphemes::*;
pub use html::*;
pub use json::*;
pub use log::*;
pub use misc::*;
