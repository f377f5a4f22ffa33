//! Parse arithmetic expressions like `(1+2)*3` into syntax trees and render
//! them as indented text.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::*;
pub use lexer::{Lexer, LexicalError, Token, TokenKind};
pub use parser::{parse_expression, ParseError, Parser, SyntaxError};
pub use printer::format_tree;
