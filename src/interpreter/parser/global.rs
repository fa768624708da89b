use std::iter::Peekable;

use crate::{
    ast::{Expr, Function, Global},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{
                expect, parse_comma_separated, parse_identifier, parse_type_annotation, peek_is,
                unexpected,
            },
        },
    },
};

/// Returns `true` if `token` starts a global declaration.
pub(in crate::interpreter::parser) fn is_global_keyword(token: &Token) -> bool {
    ["LIST", "VAL", "VAR", "LET"].iter().any(|keyword| token.is(keyword))
}

/// Parses one global declaration, including its terminating `;`.
///
/// Grammar:
/// ```text
/// global := ( "LIST" identifier (":" identifier)? "=" "[" expressions "]"
///           | "VAL" identifier (":" identifier)? "=" expression
///           | ("VAR" | "LET") identifier (":" identifier)? ("=" expression)? ) ";"
/// ```
///
/// `VAL` globals are immutable and must be initialized. A `LIST` global
/// always holds a list literal.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the declaring keyword.
///
/// # Returns
/// The parsed [`Global`].
pub fn parse_global<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Global>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some((index, keyword)) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput);
    };

    let global = if keyword.is("LIST") {
        parse_list(tokens, index)?
    } else if keyword.is("VAL") {
        parse_variable(tokens, index, false)?
    } else if keyword.is("VAR") || keyword.is("LET") {
        parse_variable(tokens, index, true)?
    } else {
        return Err(unexpected(keyword, index, "'LIST', 'VAL', 'VAR' or 'LET'"));
    };

    expect(tokens, ";")?;
    Ok(global)
}

fn parse_list<'a, I>(tokens: &mut Peekable<I>, index: usize) -> ParseResult<Global>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let (name, _) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;
    expect(tokens, "=")?;
    let open = expect(tokens, "[")?;
    let elements = parse_comma_separated(tokens, parse_expression, "]")?;

    Ok(Global { name,
                type_name,
                mutable: true,
                value: Some(Expr::List { elements,
                                         index: open }),
                index })
}

fn parse_variable<'a, I>(tokens: &mut Peekable<I>,
                         index: usize,
                         mutable: bool)
                         -> ParseResult<Global>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let (name, _) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;

    let value = if mutable && !peek_is(tokens, "=") {
        None
    } else {
        expect(tokens, "=")?;
        Some(parse_expression(tokens)?)
    };

    Ok(Global { name,
                type_name,
                mutable,
                value,
                index })
}

/// Parses a function declaration.
///
/// Grammar:
/// ```text
/// function  := "FUN" identifier "(" (parameter ("," parameter)*)? ")"
///              (":" identifier)? "DO" block "END"
/// parameter := identifier (":" identifier)?
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `FUN`.
///
/// # Returns
/// The parsed [`Function`].
pub fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Function>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let index = expect(tokens, "FUN")?;
    let (name, _) = parse_identifier(tokens)?;

    expect(tokens, "(")?;
    let (parameters, parameter_types) =
        parse_comma_separated(tokens, parse_parameter, ")")?.into_iter().unzip();
    let return_type = parse_type_annotation(tokens)?;

    expect(tokens, "DO")?;
    let body = parse_block(tokens)?;
    expect(tokens, "END")?;

    Ok(Function { name,
                  parameters,
                  parameter_types,
                  return_type,
                  body,
                  index })
}

fn parse_parameter<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<(String, Option<String>)>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let (name, _) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;
    Ok((name, type_name))
}
