//! Statement language front end
//!
//! This module checks source text against the statement grammar:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Recognition (tokens → success or the first syntax error)
//!
//! # Supported Language
//!
//! - Types: `int`, `float`, `double`, `char`, `bool`, `string`, `void`
//! - Statements: declarations, assignments, `if`/`else`, `while`, `for`,
//!   `break`, `continue`, `return`, blocks
//! - Expressions: `+ - * /`, parentheses, and a single non-chaining `>`
//! - No comments, string literals, or multi-character operators
//!
//! # Recognizer Implementation
//!
//! Hand-written recursive descent with one token of lookahead and no
//! backtracking. No tree is built; the pass stops at the first error.

mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;

pub use lexer::{scan, LexError, Lexer, Token, TokenKind};
pub use parse::{check, check_with, recognize, CheckError, Recognizer, Summary, SyntaxError};
