// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod brazilian_currency;

// Re-export.
pub use brazilian_currency::*;
