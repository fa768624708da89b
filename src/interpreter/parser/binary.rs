use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses logical expressions.
///
/// Handles left-associative chains of `&&` and `||`. Both operators share
/// the lowest precedence level, so `a || b && c` parses as `(a || b) && c`.
///
/// Grammar: `logical := comparison (("&&" | "||") comparison)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree using `BinaryOperator::And` or
/// `BinaryOperator::Or`.
pub fn parse_logical<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_comparison(tokens)?;

    loop {
        if let Some(&(index, token)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::And | BinaryOperator::Or)
        {
            tokens.next();

            let right = parse_comparison(tokens)?;

            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  index };
            continue;
        }

        break;
    }

    Ok(left)
}

/// Parses comparison expressions.
///
/// Handles `<`, `>`, `==` and `!=`. Comparisons chain to the left like every
/// other level; the analyzer rejects chains whose operand types do not fit.
///
/// Grammar: `comparison := additive (("<" | ">" | "==" | "!=") additive)*`
///
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// A binary expression tree of comparison nodes.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_additive(tokens)?;

    while let Some(&(index, token)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && matches!(op,
                      BinaryOperator::Less
                      | BinaryOperator::Greater
                      | BinaryOperator::Equal
                      | BinaryOperator::NotEqual)
    {
        tokens.next();
        let right = parse_additive(tokens)?;
        left = Expr::Binary { op,
                              left: Box::new(left),
                              right: Box::new(right),
                              index };
    }

    Ok(left)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with index information.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some(&(index, token)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  index };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*`, `/` and `^`. Exponentiation
/// shares this level, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
///
/// The rule is: `multiplicative := primary (("*" | "/" | "^") primary)*`
///
/// # Parameters
/// - `tokens`: Token stream with index information.
///
/// # Returns
/// A binary expression tree combining primary nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = (usize, &'a Token)>
{
    let mut left = parse_primary(tokens)?;
    loop {
        if let Some(&(index, token)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Pow)
        {
            tokens.next();
            let right = parse_primary(tokens)?;
            left = Expr::Binary { op,
                                  left: Box::new(left),
                                  right: Box::new(right),
                                  index };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps an operator token to the binary operator it spells.
///
/// ```
/// use plc::{
///     ast::BinaryOperator,
///     interpreter::{
///         lexer::{Token, TokenKind},
///         parser::binary::token_to_binary_operator,
///     },
/// };
///
/// let token = Token::new(TokenKind::Operator, "!=", 3);
/// assert_eq!(token_to_binary_operator(&token), Some(BinaryOperator::NotEqual));
/// assert_eq!(token_to_binary_operator(&Token::new(TokenKind::Operator, ";", 0)), None);
/// ```
#[must_use]
pub fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    if token.kind != TokenKind::Operator {
        return None;
    }
    match token.literal.as_str() {
        "&&" => Some(BinaryOperator::And),
        "||" => Some(BinaryOperator::Or),
        "<" => Some(BinaryOperator::Less),
        ">" => Some(BinaryOperator::Greater),
        "==" => Some(BinaryOperator::Equal),
        "!=" => Some(BinaryOperator::NotEqual),
        "+" => Some(BinaryOperator::Add),
        "-" => Some(BinaryOperator::Sub),
        "*" => Some(BinaryOperator::Mul),
        "/" => Some(BinaryOperator::Div),
        "^" => Some(BinaryOperator::Pow),
        _ => None,
    }
}
