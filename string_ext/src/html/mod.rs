// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert a small subset of HTML into [`RichText`], a list of styled spans.
//!
//! The pipeline is:
//! 1. [`tokenize_html`] splits the input into [`HtmlToken`]s.
//! 2. [`html_to_rich_text_with_options`] walks the tokens, keeps a stack of open
//!    [`HtmlTag`]s, and turns text tokens into [`RichTextSpan`]s using the style implied
//!    by that stack.
//!
//! This is not a conforming HTML parser. It never fails, and tags it does not know are
//! ignored (their text content is kept).

// Attach sources.
pub mod html_entities;
pub mod html_tag;
pub mod html_to_rich_text;
pub mod html_tokenizer;
pub mod rich_text;

// Re-export.
pub use html_entities::*;
pub use html_tag::*;
pub use html_to_rich_text::*;
pub use html_tokenizer::*;
pub use rich_text::*;
