// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::borrow::Cow;

use nom::{IResult, Parser,
          branch::alt,
          bytes::complete::{tag, take_until, take_while, take_while1},
          character::complete::{char, multispace0, multispace1, satisfy},
          combinator::{map, opt, recognize},
          multi::many0,
          sequence::{delimited, preceded}};

use super::{HtmlTag, decode_html_entities};

/// An attribute of a start tag. The value is raw, ie: character references are not
/// decoded yet. Use [`HtmlAttribute::decoded_value`] for that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlAttribute<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
}

impl HtmlAttribute<'_> {
    #[must_use]
    pub fn decoded_value(&self) -> Option<Cow<'_, str>> {
        self.value.map(decode_html_entities)
    }
}

/// Tokens borrow from the input. Tag names keep their original case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlToken<'a> {
    StartTag {
        name: &'a str,
        attributes: Vec<HtmlAttribute<'a>>,
        is_self_closing: bool,
    },
    EndTag {
        name: &'a str,
    },
    /// Raw text, character references not decoded.
    Text(&'a str),
    Comment(&'a str),
    /// `<!DOCTYPE ..>` and `<?..?>` declarations.
    Doctype(&'a str),
}

impl HtmlToken<'_> {
    /// Case insensitive attribute lookup on a start tag.
    #[must_use]
    pub fn attribute(&self, attribute_name: &str) -> Option<&HtmlAttribute<'_>> {
        match self {
            HtmlToken::StartTag { attributes, .. } => attributes
                .iter()
                .find(|it| it.name.eq_ignore_ascii_case(attribute_name)),
            _ => None,
        }
    }
}

/// Split `input` into tokens. This never fails: a `<` that doesn't start a tag, comment,
/// or declaration is returned as a [`HtmlToken::Text`] of its own, and tokenizing
/// carries on after it.
///
/// ```
/// use r3bl_string_ext::{HtmlToken, tokenize_html};
///
/// let tokens = tokenize_html("<b>hi</b>");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1], HtmlToken::Text("hi"));
/// assert_eq!(tokens[2], HtmlToken::EndTag { name: "b" });
/// ```
#[must_use]
pub fn tokenize_html(input: &str) -> Vec<HtmlToken<'_>> {
    let mut acc = vec![];
    let mut rem = input;

    while !rem.is_empty() {
        match parse_html_token(rem) {
            Ok((next, token)) => {
                let raw_text_tag = match &token {
                    HtmlToken::StartTag {
                        name,
                        is_self_closing: false,
                        ..
                    } => name
                        .parse::<HtmlTag>()
                        .ok()
                        .filter(HtmlTag::is_raw_text)
                        .map(|_| *name),
                    _ => None,
                };
                acc.push(token);
                rem = next;

                if let Some(tag_name) = raw_text_tag {
                    let (next, raw_text) = take_raw_text(rem, tag_name);
                    if !raw_text.is_empty() {
                        acc.push(HtmlToken::Text(raw_text));
                    }
                    rem = next;
                }
            }
            Err(_) => {
                // Only a stray `<` gets here, `parse_text` takes everything else.
                let stray_len = rem.chars().next().map_or(rem.len(), char::len_utf8);
                tracing::debug!(
                    message = "html tokenizer skipped a stray character, kept as text",
                    offset = input.len() - rem.len()
                );
                acc.push(HtmlToken::Text(&rem[..stray_len]));
                rem = &rem[stray_len..];
            }
        }
    }

    acc
}

/// Everything up to the matching end tag (case insensitive) or the end of input.
/// Returns `(remainder, raw_text)`.
fn take_raw_text<'a>(input: &'a str, tag_name: &str) -> (&'a str, &'a str) {
    let needle = format!("</{}", tag_name.to_ascii_lowercase());
    // ASCII lowercasing keeps byte offsets intact.
    let haystack = input.to_ascii_lowercase();
    match haystack.find(&needle) {
        Some(index) => (&input[index..], &input[..index]),
        None => ("", input),
    }
}

/// # Errors
///
/// Returns a nom parsing error if `input` doesn't start with a token, eg: a `<` that
/// doesn't begin a tag, comment, or declaration.
pub fn parse_html_token(input: &str) -> IResult<&str, HtmlToken<'_>> {
    alt((
        parse_comment,
        parse_doctype,
        parse_end_tag,
        parse_start_tag,
        parse_text,
    ))
    .parse(input)
}

fn parse_comment(input: &str) -> IResult<&str, HtmlToken<'_>> {
    map(
        delimited(tag("<!--"), take_until("-->"), tag("-->")),
        HtmlToken::Comment,
    )
    .parse(input)
}

fn parse_doctype(input: &str) -> IResult<&str, HtmlToken<'_>> {
    map(
        alt((
            delimited(tag("<!"), take_until(">"), char('>')),
            delimited(tag("<?"), take_until(">"), char('>')),
        )),
        HtmlToken::Doctype,
    )
    .parse(input)
}

fn parse_tag_name(input: &str) -> IResult<&str, &str> {
    recognize((
        satisfy(|c| c.is_ascii_alphabetic()),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '-'),
    ))
    .parse(input)
}

fn parse_end_tag(input: &str) -> IResult<&str, HtmlToken<'_>> {
    map(
        (tag("</"), parse_tag_name, multispace0, char('>')),
        |(_, name, _, _)| HtmlToken::EndTag { name },
    )
    .parse(input)
}

fn parse_start_tag(input: &str) -> IResult<&str, HtmlToken<'_>> {
    map(
        (
            char('<'),
            parse_tag_name,
            many0(parse_attribute),
            multispace0,
            opt(char('/')),
            char('>'),
        ),
        |(_, name, attributes, _, slash, _)| HtmlToken::StartTag {
            name,
            attributes,
            is_self_closing: slash.is_some(),
        },
    )
    .parse(input)
}

fn parse_attribute(input: &str) -> IResult<&str, HtmlAttribute<'_>> {
    let name = take_while1(|c: char| {
        !c.is_whitespace() && !matches!(c, '>' | '/' | '=' | '"' | '\'' | '<')
    });
    let equals = (multispace0, char('='), multispace0);
    map(
        preceded(multispace1, (name, opt(preceded(equals, parse_attribute_value)))),
        |(name, value)| HtmlAttribute { name, value },
    )
    .parse(input)
}

fn parse_attribute_value(input: &str) -> IResult<&str, &str> {
    alt((
        delimited(char('"'), take_while(|c: char| c != '"'), char('"')),
        delimited(char('\''), take_while(|c: char| c != '\''), char('\'')),
        take_while1(|c: char| {
            !c.is_whitespace() && !matches!(c, '>' | '"' | '\'' | '<' | '=' | '`')
        }),
    ))
    .parse(input)
}

fn parse_text(input: &str) -> IResult<&str, HtmlToken<'_>> {
    map(take_while1(|c: char| c != '<'), HtmlToken::Text).parse(input)
}
