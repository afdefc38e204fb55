// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert a date string from one format pattern to another.
//!
//! Patterns use Unicode date field symbols (`yyyy-MM-dd'T'HH:mm:ss`), which are compiled
//! into [`chrono`] strftime strings by [`compile_date_pattern`].

// Attach sources.
pub mod date_pattern;
pub mod transform_date_format;

// Re-export.
pub use date_pattern::*;
pub use transform_date_format::*;
