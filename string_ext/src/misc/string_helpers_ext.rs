// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{DateTransformOptions, JsonObject, RichText, brazilian_currency_number,
            has_letters, has_numbers, has_only_letters, has_only_numbers,
            html_to_rich_text, is_alpha_numeric, letters_only, numbers_only,
            removing_whitespaces, to_dictionary, transform_date_format_with_options,
            trimming_whitespaces_and_new_lines};

/// Method syntax for the free string helper functions in this crate.
///
/// ```
/// use r3bl_string_ext::StringHelpersExt;
///
/// assert_eq!(" 1 a ".trimming_whitespaces_and_new_lines(), "1 a");
/// assert!("123".has_only_numbers());
/// assert!("{}".to_dictionary().is_some());
/// assert_eq!("<i>x</i>".html_to_rich_text().to_plain_text(), "x");
/// ```
pub trait StringHelpersExt {
    fn removing_whitespaces(&self) -> String;
    fn trimming_whitespaces_and_new_lines(&self) -> &str;
    fn numbers_only(&self) -> String;
    fn has_numbers(&self) -> bool;
    fn has_only_numbers(&self) -> bool;
    fn letters_only(&self) -> String;
    fn has_letters(&self) -> bool;
    fn has_only_letters(&self) -> bool;
    fn is_alpha_numeric(&self) -> bool;
    fn transform_date_format(&self, receiving_format: &str, new_format: &str)
    -> Option<String>;
    fn transform_date_format_with_options(
        &self,
        receiving_format: &str,
        new_format: &str,
        options: &DateTransformOptions,
    ) -> Option<String>;
    fn to_dictionary(&self) -> Option<JsonObject>;
    fn brazilian_currency_number(&self) -> Option<f64>;
    fn html_to_rich_text(&self) -> RichText;
}

impl StringHelpersExt for str {
    fn removing_whitespaces(&self) -> String { removing_whitespaces(self) }

    fn trimming_whitespaces_and_new_lines(&self) -> &str {
        trimming_whitespaces_and_new_lines(self)
    }

    fn numbers_only(&self) -> String { numbers_only(self) }

    fn has_numbers(&self) -> bool { has_numbers(self) }

    fn has_only_numbers(&self) -> bool { has_only_numbers(self) }

    fn letters_only(&self) -> String { letters_only(self) }

    fn has_letters(&self) -> bool { has_letters(self) }

    fn has_only_letters(&self) -> bool { has_only_letters(self) }

    fn is_alpha_numeric(&self) -> bool { is_alpha_numeric(self) }

    fn transform_date_format(
        &self,
        receiving_format: &str,
        new_format: &str,
    ) -> Option<String> {
        self.transform_date_format_with_options(
            receiving_format,
            new_format,
            &DateTransformOptions::default(),
        )
    }

    fn transform_date_format_with_options(
        &self,
        receiving_format: &str,
        new_format: &str,
        options: &DateTransformOptions,
    ) -> Option<String> {
        transform_date_format_with_options(self, receiving_format, new_format, options)
    }

    fn to_dictionary(&self) -> Option<JsonObject> { to_dictionary(self) }

    fn brazilian_currency_number(&self) -> Option<f64> { brazilian_currency_number(self) }

    fn html_to_rich_text(&self) -> RichText { html_to_rich_text(self) }
}
