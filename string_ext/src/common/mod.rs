// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod decl_macros;
pub mod grapheme_slice_error;
#[cfg(test)]
pub mod temp_dir;

// Re-export.
pub use grapheme_slice_error::*;
#[cfg(test)]
pub use temp_dir::*;
