use logos::Logos;

use crate::error::LexError;

/// The classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Names and keywords, such as `main`, `@tmp`, `LET` or `is-empty`.
    Identifier,
    /// Integer literal tokens, such as `0`, `42` or `-7`.
    Integer,
    /// Decimal literal tokens, such as `0.5` or `-3.25`.
    Decimal,
    /// Character literal tokens, quotes included, such as `'a'` or `'\n'`.
    Character,
    /// String literal tokens, quotes included, such as `"hi\t"`.
    String,
    /// `==`, `!=`, `&&`, `||` or any other single character.
    Operator,
}

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the scanner:
/// its kind, the literal text exactly as written, and the character offset
/// where it starts. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The classification of the token.
    pub kind:    TokenKind,
    /// The literal source text of the token.
    pub literal: String,
    /// Offset of the first character, counted in characters.
    pub index:   usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, literal: impl Into<String>, index: usize) -> Self {
        Self { kind,
               literal: literal.into(),
               index }
    }

    /// Returns `true` if the token is the keyword or operator `literal`.
    ///
    /// Only identifier and operator tokens can match; a string literal whose
    /// text happens to equal `literal` never does.
    ///
    /// ```
    /// use plc::interpreter::lexer::{Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Identifier, "END", 0);
    /// assert!(token.is("END"));
    /// assert!(!Token::new(TokenKind::String, "\"END\"", 0).is("END"));
    /// ```
    #[must_use]
    pub fn is(&self, literal: &str) -> bool {
        matches!(self.kind, TokenKind::Identifier | TokenKind::Operator) && self.literal == literal
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}'", self.literal)
    }
}

/// Raw token classes recognized by the logos state machine.
///
/// Numbers, characters and strings only have their first character matched
/// by a pattern; a callback consumes the rest so malformed literals are
/// reported at the exact offending offset instead of being re-lexed as
/// operators.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\n\x08]+")]
enum RawToken {
    #[regex(r"[A-Za-z@][A-Za-z0-9_-]*")]
    Identifier,
    #[regex(r"-?[0-9]", lex_number)]
    Number(TokenKind),
    #[token("'", lex_character)]
    Character,
    #[token("\"", lex_string)]
    String,
    #[token("==")]
    #[token("!=")]
    #[token("&&")]
    #[token("||")]
    #[regex(r".", priority = 0)]
    Operator,
}

impl RawToken {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Identifier => TokenKind::Identifier,
            Self::Number(kind) => kind,
            Self::Character => TokenKind::Character,
            Self::String => TokenKind::String,
            Self::Operator => TokenKind::Operator,
        }
    }
}

/// Converts source text into an ordered sequence of tokens.
///
/// Whitespace (space, tab, newline, carriage return and backspace) separates
/// tokens and is never emitted. Identifier, number, character and string
/// classification is tried before the operator fallback, which accepts any
/// single character.
///
/// Token and error positions count characters, not bytes.
///
/// # Parameters
/// - `source`: The program text.
///
/// # Returns
/// Every token of the input, in order.
///
/// # Errors
/// Returns the first [`LexError`]; no partial token list is produced.
///
/// # Example
/// ```
/// use plc::interpreter::lexer::{TokenKind, scan};
///
/// let tokens = scan("LET x = -1.5;").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Identifier,
///             TokenKind::Identifier,
///             TokenKind::Operator,
///             TokenKind::Decimal,
///             TokenKind::Operator]);
/// assert_eq!(tokens[3].literal, "-1.5");
/// assert_eq!(tokens[3].index, 8);
/// ```
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);
    let mut offsets = CharOffsets { source,
                                    byte: 0,
                                    chars: 0 };

    while let Some(token) = lexer.next() {
        let start = offsets.at(lexer.span().start);
        match token {
            Ok(raw) => tokens.push(Token::new(raw.kind(), lexer.slice(), start)),
            Err(LexError::UnrecognizedCharacter { .. }) => {
                return Err(LexError::UnrecognizedCharacter { index: start });
            },
            Err(error) => {
                let index = offsets.at(error.index());
                return Err(error.at(index));
            },
        }
    }

    Ok(tokens)
}

/// Converts byte offsets into character offsets. Offsets must be requested
/// in non-decreasing order.
struct CharOffsets<'s> {
    source: &'s str,
    byte:   usize,
    chars:  usize,
}

impl CharOffsets<'_> {
    fn at(&mut self, byte: usize) -> usize {
        self.chars += self.source
                          .get(self.byte..byte)
                          .map_or(0, |skipped| skipped.chars().count());
        self.byte = byte;
        self.chars
    }
}

/// Counts the leading ASCII digits of `text`.
fn count_digits(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

/// Returns `true` for the characters allowed after a backslash.
const fn is_escape(c: char) -> bool {
    matches!(c, 'b' | 'n' | 'r' | 't' | '\'' | '"' | '\\')
}

/// Consumes the rest of a number whose sign and first digit are matched.
///
/// A leading `0` is never followed by more integer digits, so `01` scans as
/// `0` and `1`. A fraction needs at least one digit after the `.`; otherwise
/// the `.` is left for the next token.
fn lex_number(lex: &mut logos::Lexer<RawToken>) -> TokenKind {
    if !lex.slice().ends_with('0') {
        let digits = count_digits(lex.remainder());
        lex.bump(digits);
    }

    let rest = lex.remainder();
    if rest.starts_with('.') && rest[1..].starts_with(|c: char| c.is_ascii_digit()) {
        let fraction = 1 + count_digits(&rest[1..]);
        lex.bump(fraction);
        TokenKind::Decimal
    } else {
        TokenKind::Integer
    }
}

/// Consumes a character literal after its opening quote.
///
/// The body is either an escape sequence or one character other than a quote
/// or line break, and must be followed by the closing quote.
fn lex_character(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexError> {
    let start = lex.span().end;
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    let body = match chars.next() {
        Some((_, '\\')) => match chars.next() {
            Some((offset, c)) if is_escape(c) => offset + c.len_utf8(),
            Some((offset, _)) => return Err(LexError::InvalidEscape { index: start + offset }),
            None => return Err(LexError::InvalidEscape { index: start + 1 }),
        },
        Some((offset, c)) if !matches!(c, '\'' | '\n' | '\r') => offset + c.len_utf8(),
        _ => return Err(LexError::InvalidCharacter { index: start }),
    };

    if rest[body..].starts_with('\'') {
        lex.bump(body + 1);
        Ok(())
    } else {
        Err(LexError::InvalidCharacter { index: start + body })
    }
}

/// Consumes a string literal after its opening quote.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<(), LexError> {
    let start = lex.span().end;
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    while let Some((offset, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(offset + 1);
                return Ok(());
            },
            '\\' => match chars.next() {
                Some((_, escaped)) if is_escape(escaped) => {},
                Some((escaped, _)) => {
                    return Err(LexError::InvalidEscape { index: start + escaped });
                },
                None => return Err(LexError::UnterminatedString { index: start + rest.len() }),
            },
            '\n' | '\r' => return Err(LexError::UnterminatedString { index: start + offset }),
            c if c.is_control() => {
                return Err(LexError::InvalidStringCharacter { index: start + offset });
            },
            _ => {},
        }
    }

    Err(LexError::UnterminatedString { index: start + rest.len() })
}
