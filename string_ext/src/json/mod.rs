// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod to_dictionary;

// Re-export.
pub use to_dictionary::*;
