// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod char_class;
pub mod string_helpers_ext;
pub mod whitespace;

// Re-export.
pub use char_class::*;
pub use string_helpers_ext::*;
pub use whitespace::*;
