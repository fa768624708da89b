use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, statement::parse_statement},
    },
};

/// Keywords that close a block.
pub const BLOCK_TERMINATORS: &[&str] = &["END", "ELSE", "CASE", "DEFAULT"];

/// Parses a block of statements.
///
/// A block consists of zero or more statements. Parsing stops in front of the
/// first `END`, `ELSE`, `CASE` or `DEFAULT`; the terminator is left for the
/// caller, which decides whether it is acceptable. Running out of input ends
/// the block too, and the caller's expected terminator then reports it.
///
/// Grammar: `block := statement*`
///
/// # Parameters
/// - `tokens`: Token stream positioned after `DO`, `ELSE`, `:` or `DEFAULT`.
///
/// # Returns
/// The statements of the block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut statements = Vec::new();

    while let Some(&(_, token)) = tokens.peek()
          && !BLOCK_TERMINATORS.iter().any(|keyword| token.is(keyword))
    {
        statements.push(parse_statement(tokens)?);
    }

    Ok(statements)
}
