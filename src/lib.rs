//! # Introduction
//!
//! stmtcheck decides whether source text is a well-formed program in a small
//! C-like statement language. It reports the first lexical or syntax error
//! with its line number, or confirms the whole input is accepted.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Recognizer → Summary | first error
//! ```
//!
//! 1. [`parser::lexer`] classifies characters into [`Token`]s carrying
//!    1-based line numbers.
//! 2. [`parser::parse`] runs recursive descent over the token slice with one
//!    token of lookahead. No tree is built.
//! 3. [`config`] loads embedded TOML defaults layered with user files and CLI
//!    overrides.
//! 4. [`report`] provides text or JSON rendering used by the binary.
//!
//! ## Example
//!
//! ```
//! assert!(stmtcheck::check("int x; x = 1 + 2;").is_ok());
//!
//! let err = stmtcheck::check("int ;").unwrap_err();
//! assert_eq!(err.line(), 1);
//! ```

pub mod config;
pub mod parser;
pub mod report;

pub use config::RecognizerConfig;
pub use parser::{
    check, check_with, recognize, scan, CheckError, LexError, Summary, SyntaxError, Token,
    TokenKind,
};
