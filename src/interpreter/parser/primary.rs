use std::iter::Peekable;

use num_bigint::BigInt;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, parse_comma_separated, peek_is, strip_quotes, unescape, unexpected},
        },
    },
};

/// Parses a primary expression.
///
/// Primary expressions are the atomic building blocks of the grammar:
///
/// ```text
/// primary := "NIL" | "TRUE" | "FALSE"
///          | INTEGER | DECIMAL | CHARACTER | STRING
///          | identifier ("(" arguments ")" | "[" expression "]")?
///          | "(" expression ")"
///          | "[" (expression ("," expression)*)? "]"
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Returns a `ParseError` if the token cannot start an expression or a
/// numeric literal cannot be converted.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some((index, token)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    let literal = |value: LiteralValue| -> ParseResult<Expr> { Ok(Expr::Literal { value, index }) };

    match token.kind {
        TokenKind::Identifier => match token.literal.as_str() {
            "NIL" => literal(LiteralValue::Nil),
            "TRUE" => literal(LiteralValue::Boolean(true)),
            "FALSE" => literal(LiteralValue::Boolean(false)),
            name => parse_access_or_call(tokens, name, index),
        },
        TokenKind::Integer => {
            let value = token.literal
                             .parse::<BigInt>()
                             .map_err(|_| invalid_number(token, index))?;
            literal(LiteralValue::Integer(value))
        },
        TokenKind::Decimal => {
            let value = token.literal
                             .parse::<f64>()
                             .map_err(|_| invalid_number(token, index))?;
            literal(LiteralValue::Decimal(value))
        },
        TokenKind::Character => {
            let text = unescape(strip_quotes(&token.literal, '\''));
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => literal(LiteralValue::Character(c)),
                _ => Err(unexpected(token, index, "a single character")),
            }
        },
        TokenKind::String => {
            literal(LiteralValue::String(unescape(strip_quotes(&token.literal, '"'))))
        },
        TokenKind::Operator if token.is("(") => {
            let inner = parse_expression(tokens)?;
            expect(tokens, ")")?;
            Ok(Expr::Group { inner: Box::new(inner),
                             index })
        },
        TokenKind::Operator if token.is("[") => {
            let elements = parse_comma_separated(tokens, parse_expression, "]")?;
            Ok(Expr::List { elements, index })
        },
        TokenKind::Operator => Err(unexpected(token, index, "an expression")),
    }
}

/// Parses what follows a name: a call, an indexed access or a plain variable.
fn parse_access_or_call<'a, I>(tokens: &mut Peekable<I>,
                               name: &str,
                               index: usize)
                               -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if peek_is(tokens, "(") {
        tokens.next();
        let arguments = parse_comma_separated(tokens, parse_expression, ")")?;
        return Ok(Expr::FunctionCall { name: name.to_string(),
                                       arguments,
                                       index });
    }

    let offset = if peek_is(tokens, "[") {
        tokens.next();
        let offset = parse_expression(tokens)?;
        expect(tokens, "]")?;
        Some(Box::new(offset))
    } else {
        None
    };

    Ok(Expr::Access { name: name.to_string(),
                      offset,
                      index })
}

fn invalid_number(token: &Token, index: usize) -> ParseError {
    ParseError::InvalidNumber { literal: token.literal.clone(),
                                index }
}
