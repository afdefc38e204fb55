// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use strum_macros::{Display, EnumString};

/// The tags that affect rendering. Any other tag name fails to parse and is ignored.
///
/// ```
/// use r3bl_string_ext::HtmlTag;
///
/// assert_eq!("STRONG".parse::<HtmlTag>(), Ok(HtmlTag::Strong));
/// assert_eq!(HtmlTag::H2.to_string(), "h2");
/// assert!("span".parse::<HtmlTag>().is_err());
/// ```
#[derive(Debug, Display, EnumString, Copy, Clone, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum HtmlTag {
    // Inline.
    B,
    Strong,
    I,
    Em,
    U,
    Ins,
    S,
    Strike,
    Del,
    Code,
    Tt,
    Kbd,
    A,
    Br,
    // Block.
    P,
    Div,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
    Li,
    Ul,
    Ol,
    Tr,
    Pre,
    Blockquote,
    Hr,
    // Content is dropped.
    Script,
    Style,
    Head,
    Title,
}

mod html_tag_impl_block {
    use super::HtmlTag;

    impl HtmlTag {
        #[must_use]
        pub fn is_block(&self) -> bool {
            matches!(
                self,
                Self::P
                    | Self::Div
                    | Self::H1
                    | Self::H2
                    | Self::H3
                    | Self::H4
                    | Self::H5
                    | Self::H6
                    | Self::Li
                    | Self::Ul
                    | Self::Ol
                    | Self::Tr
                    | Self::Pre
                    | Self::Blockquote
                    | Self::Hr
            )
        }

        /// Elements that never have content or an end tag.
        #[must_use]
        pub fn is_void(&self) -> bool { matches!(self, Self::Br | Self::Hr) }

        #[must_use]
        pub fn is_content_dropped(&self) -> bool {
            matches!(self, Self::Script | Self::Style | Self::Head | Self::Title)
        }

        /// Script and style content is raw text, so `<` inside it doesn't start a tag.
        #[must_use]
        pub fn is_raw_text(&self) -> bool { matches!(self, Self::Script | Self::Style) }

        #[must_use]
        pub fn heading_level(&self) -> Option<u8> {
            match self {
                Self::H1 => Some(1),
                Self::H2 => Some(2),
                Self::H3 => Some(3),
                Self::H4 => Some(4),
                Self::H5 => Some(5),
                Self::H6 => Some(6),
                _ => None,
            }
        }

        #[must_use]
        pub fn is_bold(&self) -> bool {
            matches!(self, Self::B | Self::Strong) || self.heading_level().is_some()
        }

        #[must_use]
        pub fn is_italic(&self) -> bool { matches!(self, Self::I | Self::Em) }

        #[must_use]
        pub fn is_underline(&self) -> bool { matches!(self, Self::U | Self::Ins) }

        #[must_use]
        pub fn is_strikethrough(&self) -> bool {
            matches!(self, Self::S | Self::Strike | Self::Del)
        }

        #[must_use]
        pub fn is_monospace(&self) -> bool {
            matches!(self, Self::Code | Self::Pre | Self::Tt | Self::Kbd)
        }
    }
}
