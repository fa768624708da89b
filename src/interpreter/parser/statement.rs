use std::iter::Peekable;

use crate::{
    ast::{Case, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, parse_identifier, parse_type_annotation, peek_is},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a local declaration (`LET`).
/// - a `SWITCH`, `IF` or `WHILE` block.
/// - a `RETURN`.
/// - an assignment or an expression used as a statement.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. If none match, the input is parsed as an expression, which
/// becomes the receiver of an assignment when `=` follows it.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(index, token)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if let Some(statement) = parse_declaration(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_switch(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_if(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_while(tokens)? {
        return Ok(statement);
    }
    if let Some(statement) = parse_return(tokens)? {
        return Ok(statement);
    }

    let index = tokens.peek().map_or(0, |&(index, _)| index);
    let expr = parse_expression(tokens)?;

    if let Some(&(assign, token)) = tokens.peek()
       && token.is("=")
    {
        tokens.next();
        let value = parse_expression(tokens)?;
        expect(tokens, ";")?;

        return Ok(Statement::Assignment { receiver: expr,
                                          value,
                                          index: assign });
    }

    expect(tokens, ";")?;
    Ok(Statement::Expression { expr, index })
}

/// Consumes `keyword` if it is next and returns its token index.
fn take_keyword<'a, I>(tokens: &mut Peekable<I>, keyword: &str) -> Option<usize>
    where I: Iterator<Item = (usize, &'a Token)>
{
    if peek_is(tokens, keyword) {
        tokens.next().map(|(index, _)| index)
    } else {
        None
    }
}

/// Parses a local variable declaration.
///
/// Grammar: `declaration := "LET" identifier (":" identifier)? ("=" expression)? ";"`
///
/// If no `LET` is present at the current position, returns `Ok(None)`.
fn parse_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(index) = take_keyword(tokens, "LET") else {
        return Ok(None);
    };

    let (name, _) = parse_identifier(tokens)?;
    let type_name = parse_type_annotation(tokens)?;
    let value = if peek_is(tokens, "=") {
        tokens.next();
        Some(parse_expression(tokens)?)
    } else {
        None
    };
    expect(tokens, ";")?;

    Ok(Some(Statement::Declaration { name,
                                     type_name,
                                     value,
                                     index }))
}

/// Parses a `SWITCH` statement.
///
/// Grammar:
/// ```text
/// switch := "SWITCH" expression ("CASE" literal ":" block)+
///           "DEFAULT" ":"? block "END"
/// ```
///
/// At least one `CASE` is required, each case value must be a literal, and
/// the `DEFAULT` arm is mandatory. The returned node lists the `CASE` arms in
/// source order followed by the `DEFAULT` arm.
///
/// # Errors
/// Returns a `ParseError` if:
/// - no `CASE` follows the condition,
/// - a case value is not a literal,
/// - `DEFAULT` or `END` is missing.
fn parse_switch<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(index) = take_keyword(tokens, "SWITCH") else {
        return Ok(None);
    };

    let condition = parse_expression(tokens)?;
    let mut cases = Vec::new();

    while let Some(case_index) = take_keyword(tokens, "CASE") {
        let value = parse_expression(tokens)?;
        if !matches!(value, Expr::Literal { .. }) {
            return Err(ParseError::NonLiteralCase { index: value.index() });
        }
        expect(tokens, ":")?;
        let body = parse_block(tokens)?;
        cases.push(Case { value: Some(value),
                          body,
                          index: case_index });
    }

    match tokens.peek() {
        None => return Err(ParseError::UnexpectedEndOfInput),
        Some(&(next, _)) if cases.is_empty() => {
            return Err(ParseError::MissingCase { index: next });
        },
        Some(&(next, token)) if !token.is("DEFAULT") => {
            return Err(ParseError::MissingDefault { index: next });
        },
        Some(_) => {},
    }

    let default_index = expect(tokens, "DEFAULT")?;
    take_keyword(tokens, ":");
    let body = parse_block(tokens)?;
    cases.push(Case { value: None,
                      body,
                      index: default_index });
    expect(tokens, "END")?;

    Ok(Some(Statement::Switch { condition,
                                cases,
                                index }))
}

/// Parses an `IF` statement with its optional `ELSE` block.
///
/// Grammar: `if := "IF" expression "DO" block ("ELSE" block)? "END"`
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(index) = take_keyword(tokens, "IF") else {
        return Ok(None);
    };

    let condition = parse_expression(tokens)?;
    expect(tokens, "DO")?;
    let then_branch = parse_block(tokens)?;
    let else_branch = if take_keyword(tokens, "ELSE").is_some() {
        parse_block(tokens)?
    } else {
        Vec::new()
    };
    expect(tokens, "END")?;

    Ok(Some(Statement::If { condition,
                            then_branch,
                            else_branch,
                            index }))
}

/// Parses a `WHILE` loop.
///
/// Grammar: `while := "WHILE" expression "DO" block "END"`
fn parse_while<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(index) = take_keyword(tokens, "WHILE") else {
        return Ok(None);
    };

    let condition = parse_expression(tokens)?;
    expect(tokens, "DO")?;
    let body = parse_block(tokens)?;
    expect(tokens, "END")?;

    Ok(Some(Statement::While { condition,
                               body,
                               index }))
}

/// Parses `RETURN` with an optional value.
///
/// Grammar: `return := "RETURN" expression? ";"`
fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let Some(index) = take_keyword(tokens, "RETURN") else {
        return Ok(None);
    };

    let value = if peek_is(tokens, ";") {
        None
    } else {
        Some(parse_expression(tokens)?)
    };
    expect(tokens, ";")?;

    Ok(Some(Statement::Return { value, index }))
}
