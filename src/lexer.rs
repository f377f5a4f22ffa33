use logos::Logos;
use num_bigint::BigUint;
use std::fmt;
use thiserror::Error;

// No skip patterns: whitespace is not part of the grammar and must surface
// as a lexical error like any other stray character.
#[derive(Logos, Debug, Clone, PartialEq)]
pub enum Token {
    #[regex(r"[0-9]+", |lex| {
        BigUint::parse_bytes(lex.slice().as_bytes(), 10)
    })]
    Number(BigUint),

    #[regex(r"[-+*/()]", |lex| lex.slice().chars().next())]
    Operator(char),

    Eof,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Number,
    Operator,
    Eof,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Number(_) => TokenKind::Number,
            Token::Operator(_) => TokenKind::Operator,
            Token::Eof => TokenKind::Eof,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "number {}", value),
            Token::Operator(c) => write!(f, "`{}`", c),
            Token::Eof => write!(f, "end of input"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "a number",
            TokenKind::Operator => "an operator",
            TokenKind::Eof => "end of input",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid character `{found}` at offset {offset}")]
pub struct LexicalError {
    pub found: char,
    pub offset: usize,
}

#[derive(Debug)]
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    /// Scans the next token. Once the source is exhausted this returns
    /// `Token::Eof`, and keeps returning it on every later call.
    pub fn next_token(&mut self) -> Result<Token, LexicalError> {
        match self.inner.next() {
            Some(Ok(token)) => Ok(token),
            Some(Err(_)) => {
                // an error span always covers at least one character
                let found = self
                    .inner
                    .slice()
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(LexicalError {
                    found,
                    offset: self.inner.span().start,
                })
            }
            None => Ok(Token::Eof),
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Token, LexicalError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(Token::Eof) => None,
            Ok(token) => Some(Ok(token)),
            Err(err) => Some(Err(err)),
        }
    }
}
