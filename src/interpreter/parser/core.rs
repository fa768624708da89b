use std::iter::Peekable;

use crate::{
    ast::{Expr, Source},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_logical,
            global::{is_global_keyword, parse_function, parse_global},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a complete token sequence into a [`Source`] tree.
///
/// # Parameters
/// - `tokens`: Tokens produced by [`scan`](crate::interpreter::lexer::scan).
///
/// # Returns
/// The program tree.
///
/// # Errors
/// Returns the first [`ParseError`], naming the index of the offending token.
///
/// # Example
/// ```
/// use plc::interpreter::{lexer::scan, parser::parse};
///
/// let tokens = scan("VAL x = 1; FUN main(): Integer DO RETURN x; END").unwrap();
/// let source = parse(&tokens).unwrap();
///
/// assert_eq!(source.globals.len(), 1);
/// assert_eq!(source.functions[0].name, "main");
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<Source> {
    let mut iter = tokens.iter().enumerate().peekable();
    parse_source(&mut iter)
}

/// Parses the `source` rule: every global, then every function.
///
/// Grammar: `source := global* function*`
///
/// Any token left after the last function is an error.
///
/// # Parameters
/// - `tokens`: Token iterator yielding `(index, token)` pairs.
///
/// # Returns
/// The program tree.
pub fn parse_source<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Source>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut source = Source::default();

    while let Some(&(_, token)) = tokens.peek()
          && is_global_keyword(token)
    {
        source.globals.push(parse_global(tokens)?);
    }

    while let Some(&(_, token)) = tokens.peek()
          && token.is("FUN")
    {
        source.functions.push(parse_function(tokens)?);
    }

    if let Some((index, token)) = tokens.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: token.literal.clone(),
                                                          index });
    }

    Ok(source)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, logical `&&`/`||`, and
/// recursively descends through the precedence hierarchy.
///
/// Grammar: `expression := logical`
///
/// # Parameters
/// - `tokens`: Token iterator yielding `(index, token)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    parse_logical(tokens)
}
