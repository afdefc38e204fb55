// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{RichText, tokenize_html};
use crate::call_if_true;

/// Log every token the renderer sees.
const DEBUG_HTML_RENDERER: bool = false;

/// Options for [`html_to_rich_text_with_options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlRenderOptions {
    /// Inserted between blocks, eg: between two `<p>` elements.
    pub block_separator: &'static str,
    /// Collapse runs of ASCII whitespace into a single space, outside of `<pre>`.
    pub collapse_whitespace: bool,
}

impl Default for HtmlRenderOptions {
    fn default() -> Self {
        Self {
            block_separator: "\n",
            collapse_whitespace: true,
        }
    }
}

/// Convert `input` HTML into [`RichText`] using the default [`HtmlRenderOptions`].
///
/// ```
/// use r3bl_string_ext::html_to_rich_text;
///
/// let it = html_to_rich_text("<b>hi</b>");
/// assert_eq!(it.len(), 1);
/// let span = it.iter().next().unwrap();
/// assert!(span.style.bold);
/// assert_eq!(span.text, "hi");
/// ```
#[must_use]
pub fn html_to_rich_text(input: &str) -> RichText {
    html_to_rich_text_with_options(input, &HtmlRenderOptions::default())
}

/// Convert `input` HTML into [`RichText`]. This never fails. Unknown tags are ignored
/// (their text is kept), and text that can't be tokenized is kept as plain text.
#[must_use]
pub fn html_to_rich_text_with_options(input: &str, options: &HtmlRenderOptions) -> RichText {
    let mut renderer = renderer::RichTextRenderer::new(options);
    for token in tokenize_html(input) {
        call_if_true!(DEBUG_HTML_RENDERER, {
            tracing::debug!(message = "html token", ?token);
        });
        renderer.apply(&token);
    }
    renderer.finish()
}

mod renderer {
    use std::borrow::Cow;

    use crate::{HtmlRenderOptions, HtmlTag, HtmlToken, RichText, RichTextSpan,
                RichTextStyle, decode_html_entities};

    #[derive(Debug)]
    struct OpenElement {
        tag: HtmlTag,
        href: Option<String>,
    }

    #[derive(Debug)]
    pub struct RichTextRenderer<'o> {
        options: &'o HtmlRenderOptions,
        open_elements: Vec<OpenElement>,
        acc: RichText,
        has_pending_block_break: bool,
        is_last_text_preformatted: bool,
    }

    impl<'o> RichTextRenderer<'o> {
        pub fn new(options: &'o HtmlRenderOptions) -> Self {
            Self {
                options,
                open_elements: vec![],
                acc: RichText::new(),
                has_pending_block_break: false,
                is_last_text_preformatted: false,
            }
        }

        pub fn apply(&mut self, token: &HtmlToken<'_>) {
            match token {
                HtmlToken::StartTag {
                    name,
                    is_self_closing,
                    ..
                } => {
                    let Ok(tag) = name.parse::<HtmlTag>() else {
                        return;
                    };
                    self.start_element(tag, token, *is_self_closing);
                }
                HtmlToken::EndTag { name } => {
                    if let Ok(tag) = name.parse::<HtmlTag>() {
                        self.end_element(tag);
                    }
                }
                HtmlToken::Text(raw_text) => self.text(&decode_html_entities(raw_text)),
                HtmlToken::Comment(_) | HtmlToken::Doctype(_) => {}
            }
        }

        pub fn finish(mut self) -> RichText {
            self.trim_trailing_spaces();
            self.acc
        }

        fn start_element(&mut self, tag: HtmlTag, token: &HtmlToken<'_>, is_self_closing: bool) {
            if tag == HtmlTag::Br {
                self.line_break();
                return;
            }
            if tag.is_block() {
                self.request_block_break();
            }
            if is_self_closing || tag.is_void() {
                return;
            }
            let href = (tag == HtmlTag::A)
                .then(|| token.attribute("href").and_then(|it| it.decoded_value()))
                .flatten()
                .map(Cow::into_owned);
            self.open_elements.push(OpenElement { tag, href });
        }

        /// Close the innermost open `tag` and everything opened inside it. End tags
        /// with no matching open element are ignored.
        fn end_element(&mut self, tag: HtmlTag) {
            let Some(index) = self.open_elements.iter().rposition(|it| it.tag == tag) else {
                return;
            };
            self.open_elements.truncate(index);
            if tag.is_block() {
                self.request_block_break();
            }
        }

        fn text(&mut self, text: &str) {
            if self.is_content_dropped() {
                return;
            }

            let is_preformatted = self.is_preformatted();
            let text = if self.options.collapse_whitespace && !is_preformatted {
                let is_at_whitespace =
                    self.has_pending_block_break || self.acc.is_at_whitespace();
                Cow::Owned(collapse_whitespace(text, is_at_whitespace))
            } else {
                Cow::Borrowed(text)
            };
            if text.is_empty() {
                return;
            }

            let style = self.current_style();
            self.flush_block_break(&style);
            self.acc.push_span(RichTextSpan::new(style, text));
            self.is_last_text_preformatted = is_preformatted;
        }

        fn line_break(&mut self) {
            if self.is_content_dropped() {
                return;
            }
            let style = self.current_style();
            self.flush_block_break(&style);
            self.trim_trailing_spaces();
            self.acc.push_span(RichTextSpan::new(style, "\n"));
            self.is_last_text_preformatted = false;
        }

        fn request_block_break(&mut self) {
            if !self.acc.is_empty() {
                self.has_pending_block_break = true;
            }
        }

        fn flush_block_break(&mut self, style: &RichTextStyle) {
            if !self.has_pending_block_break {
                return;
            }
            self.has_pending_block_break = false;
            self.trim_trailing_spaces();
            if self.acc.is_empty() {
                return;
            }
            self.acc
                .push_span(RichTextSpan::new(style.clone(), self.options.block_separator));
            self.is_last_text_preformatted = false;
        }

        fn trim_trailing_spaces(&mut self) {
            if self.options.collapse_whitespace && !self.is_last_text_preformatted {
                self.acc.trim_trailing_spaces();
            }
        }

        fn is_content_dropped(&self) -> bool {
            self.open_elements.iter().any(|it| it.tag.is_content_dropped())
        }

        fn is_preformatted(&self) -> bool {
            self.open_elements.iter().any(|it| it.tag == HtmlTag::Pre)
        }

        /// Outer elements first, so the innermost link or heading wins.
        fn current_style(&self) -> RichTextStyle {
            let mut style = RichTextStyle::default();
            for element in &self.open_elements {
                let tag = element.tag;
                style.bold |= tag.is_bold();
                style.italic |= tag.is_italic();
                style.underline |= tag.is_underline();
                style.strikethrough |= tag.is_strikethrough();
                style.monospace |= tag.is_monospace();
                if tag == HtmlTag::A {
                    style.link.clone_from(&element.href);
                }
                if let Some(level) = tag.heading_level() {
                    style.heading = Some(level);
                }
            }
            style
        }
    }

    /// Replace each run of ASCII whitespace with a single space. A leading run is
    /// dropped when `is_at_whitespace`. NBSP is not collapsed.
    pub fn collapse_whitespace(text: &str, is_at_whitespace: bool) -> String {
        let mut acc = String::with_capacity(text.len());
        let mut is_prev_space = is_at_whitespace;
        for c in text.chars() {
            if c.is_ascii_whitespace() {
                if !is_prev_space {
                    acc.push(' ');
                }
                is_prev_space = true;
            } else {
                acc.push(c);
                is_prev_space = false;
            }
        }
        acc
    }
}
