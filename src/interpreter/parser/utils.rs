use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Builds the error for a token that does not fit the grammar.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 index: usize,
                                                 expected: &str)
                                                 -> ParseError {
    ParseError::UnexpectedToken { token: format!("Expected {expected}, found {token}"),
                                  index }
}

/// Returns `true` if the next token is the keyword or operator `literal`.
pub(in crate::interpreter::parser) fn peek_is<'a, I>(tokens: &mut Peekable<I>,
                                                     literal: &str)
                                                     -> bool
    where I: Iterator<Item = (usize, &'a Token)>
{
    tokens.peek().is_some_and(|(_, token)| token.is(literal))
}

/// Consumes the keyword or operator `literal` and returns its token index.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is anything else,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    literal: &str)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = (usize, &'a Token)>
{
    match tokens.next() {
        Some((index, token)) if token.is(literal) => Ok(index),
        Some((index, token)) => Err(unexpected(token, index, &format!("'{literal}'"))),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by list literals, argument lists and parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either:
///
/// - a comma, to continue the list, or
/// - the specified closing token, to end it.
///
/// An immediately encountered closing token produces an empty list. The
/// closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list (e.g., `]` or `)`).
///
/// # Returns
/// A vector of parsed items.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an item fails to parse,
/// - an unexpected token is encountered,
/// - the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &str)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut items = Vec::new();
    if peek_is(tokens, closing) {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.next() {
            Some((_, token)) if token.is(",") => {},
            Some((_, token)) if token.is(closing) => break,
            Some((index, token)) => {
                return Err(unexpected(token, index, &format!("',' or '{closing}'")));
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name with its token index.
///
/// Keywords are identifiers to the scanner, so `END` is accepted here; the
/// grammar never places a name where a keyword could also appear.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the next token is not an identifier,
/// - the input ends unexpectedly.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = (usize, &'a Token)>
{
    match tokens.next() {
        Some((index, token)) if token.kind == TokenKind::Identifier => {
            Ok((token.literal.clone(), index))
        },
        Some((index, token)) => Err(unexpected(token, index, "identifier")),
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

/// Parses an optional `: Type` annotation.
///
/// Grammar: `annotation := (":" identifier)?`
///
/// # Returns
/// The type name, or `None` when no `:` follows.
pub(in crate::interpreter::parser) fn parse_type_annotation<'a, I>(
    tokens: &mut Peekable<I>)
    -> ParseResult<Option<String>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if !peek_is(tokens, ":") {
        return Ok(None);
    }
    tokens.next();
    let (name, _) = parse_identifier(tokens)?;
    Ok(Some(name))
}

/// Strips the surrounding quote characters from a character or string
/// literal.
pub(in crate::interpreter::parser) fn strip_quotes(literal: &str, quote: char) -> &str {
    literal.strip_prefix(quote)
           .and_then(|inner| inner.strip_suffix(quote))
           .unwrap_or(literal)
}

/// Replaces escape sequences with the characters they stand for.
///
/// Recognized escapes are `\b`, `\n`, `\r`, `\t`, `\'`, `\"` and `\\`. The
/// scanner rejects every other escape, so anything else is kept as written.
///
/// ```
/// use plc::interpreter::parser::utils::unescape;
///
/// assert_eq!(unescape(r"a\tb\\"), "a\tb\\");
/// assert_eq!(unescape(r"\'\b"), "'\u{8}");
/// ```
#[must_use]
pub fn unescape(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('b') => result.push('\u{8}'),
            Some('n') => result.push('\n'),
            Some('r') => result.push('\r'),
            Some('t') => result.push('\t'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }

    result
}
