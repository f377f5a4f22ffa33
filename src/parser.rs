use crate::ast::{BinOp, Node};
use crate::lexer::{Lexer, LexicalError, Token, TokenKind};
use thiserror::Error;

// Grammar:
//   expr   -> term (('+' | '-') term)*
//   term   -> factor (('*' | '/') factor)*
//   factor -> NUMBER | '(' expr ')'

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SyntaxError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: TokenKind, found: Token },

    #[error("expected a number or `(`, found {found}")]
    ExpectedFactor { found: Token },

    #[error("expected `)` to close the group, found {found}")]
    UnclosedParen { found: Token },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("{0}")]
    Lexical(#[from] LexicalError),

    #[error("{0}")]
    Syntax(#[from] SyntaxError),
}

/// Parses `source` as a single arithmetic expression.
pub fn parse_expression(source: &str) -> Result<Node, ParseError> {
    let mut parser = Parser::new(Lexer::new(source))?;
    parser.parse()
}

#[derive(Debug)]
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a parser over `lexer` and eagerly scans the first token, so
    /// construction itself fails when the input starts with an invalid
    /// character.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Parser<'a>, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    /// Parses one expression and returns the root of its syntax tree.
    ///
    /// Parsing stops at the first token that cannot extend the expression;
    /// anything after it is ignored, so `1+2)` yields the tree for `1+2`.
    pub fn parse(&mut self) -> Result<Node, ParseError> {
        self.expr()
    }

    // Sole advance primitive: every grammar position consumes its token
    // through here.
    fn eat(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        if self.current_token.kind() == expected {
            self.current_token = self.lexer.next_token()?;
            Ok(())
        } else {
            Err(SyntaxError::UnexpectedToken {
                expected,
                found: self.current_token.clone(),
            }
            .into())
        }
    }

    fn factor(&mut self) -> Result<Node, ParseError> {
        match &self.current_token {
            Token::Number(value) => {
                let value = value.clone();
                self.eat(TokenKind::Number)?;
                Ok(Node::Number(value))
            }
            Token::Operator('(') => {
                self.eat(TokenKind::Operator)?;
                let node = self.expr()?;
                // eat(Operator) alone would accept any operator in place of
                // the closing paren; check the character first.
                if self.current_token == Token::Operator(')') {
                    self.eat(TokenKind::Operator)?;
                    Ok(node)
                } else {
                    Err(SyntaxError::UnclosedParen {
                        found: self.current_token.clone(),
                    }
                    .into())
                }
            }
            other => Err(SyntaxError::ExpectedFactor {
                found: other.clone(),
            }
            .into()),
        }
    }

    fn term(&mut self) -> Result<Node, ParseError> {
        let mut node = self.factor()?;
        loop {
            let op = match self.current_token {
                Token::Operator('*') => BinOp::Mul,
                Token::Operator('/') => BinOp::Div,
                _ => break,
            };
            self.eat(TokenKind::Operator)?;
            let right = self.factor()?;
            node = Node::Binary(op, Box::new(node), Box::new(right));
        }
        Ok(node)
    }

    fn expr(&mut self) -> Result<Node, ParseError> {
        let mut node = self.term()?;
        loop {
            let op = match self.current_token {
                Token::Operator('+') => BinOp::Add,
                Token::Operator('-') => BinOp::Sub,
                _ => break,
            };
            self.eat(TokenKind::Operator)?;
            let right = self.term()?;
            node = Node::Binary(op, Box::new(node), Box::new(right));
        }
        Ok(node)
    }
}
