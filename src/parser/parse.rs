//! Main recognizer coordinator
//!
//! This module provides the [`Recognizer`] struct and core infrastructure,
//! including error types, helper methods, and the main entry points.
//!
//! # Recognizer Architecture
//!
//! The Recognizer uses a recursive descent approach with the following organization:
//! - This module: Recognizer struct, helper methods, and coordination
//! - `declarations`: type keyword declarations
//! - `statements`: statement dispatch, blocks, control flow
//! - `expressions`: additive/multiplicative chains and the one-shot `>` comparison
//!
//! # Implementation
//!
//! Methods are split across multiple files using `impl Recognizer` blocks,
//! allowing each module to extend the Recognizer with related rules while
//! sharing the cursor. Nothing is built while walking the tokens; each rule
//! either consumes its tokens or fails.

use crate::config::{RecognizerConfig, MAX_DEPTH_LIMIT};
use crate::parser::lexer::{self, LexError, Token, TokenKind};
use serde::Serialize;
use thiserror::Error;

/// Recognizer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The current token cannot start the rule being applied.
    #[error("Syntax error: unexpected token '{found}' at line {line}")]
    UnexpectedToken { found: String, line: usize },

    /// A required token was missing.
    #[error(
        "Syntax error: expected '{}' at line {line} but found '{found}'",
        .expected.display_name()
    )]
    Expected {
        expected: TokenKind,
        found: String,
        line: usize,
    },

    /// Statements or parenthesized expressions nest past the configured limit.
    #[error("Syntax error: nesting deeper than {limit} levels at line {line}")]
    NestingTooDeep { limit: usize, line: usize },
}

impl SyntaxError {
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::UnexpectedToken { line, .. }
            | SyntaxError::Expected { line, .. }
            | SyntaxError::NestingTooDeep { line, .. } => *line,
        }
    }
}

/// Either stage of a full check failing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl CheckError {
    pub fn line(&self) -> usize {
        match self {
            CheckError::Lex(err) => err.line(),
            CheckError::Syntax(err) => err.line(),
        }
    }

    /// Short stage name, used by the JSON report.
    pub fn kind(&self) -> &'static str {
        match self {
            CheckError::Lex(_) => "lexical",
            CheckError::Syntax(_) => "syntax",
        }
    }
}

/// What a successful pass walked over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Tokens consumed, counting the end-of-input marker.
    pub tokens: usize,
    /// Top-level statements in the program.
    pub statements: usize,
}

/// Recursive descent recognizer for the statement grammar
pub struct Recognizer<'a> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    pub(crate) depth: usize,
    pub(crate) max_depth: usize,
    /// Stand-in returned by `peek` if the slice has no trailing `Eof`.
    end: Token,
}

impl<'a> Recognizer<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, &RecognizerConfig::default())
    }

    pub fn with_config(tokens: &'a [Token], config: &RecognizerConfig) -> Self {
        let last_line = tokens.last().map_or(1, |t| t.line);
        Self {
            tokens,
            position: 0,
            depth: 0,
            max_depth: config.max_depth.min(MAX_DEPTH_LIMIT),
            end: Token::new(TokenKind::Eof, "", last_line),
        }
    }

    /// Recognize the entire program: `statement* EOF`.
    pub fn recognize(mut self) -> Result<Summary, SyntaxError> {
        let mut statements = 0;

        while !self.is_at_end() {
            self.parse_statement()?;
            statements += 1;
        }

        Ok(Summary {
            tokens: self.position + 1,
            statements,
        })
    }

    // ===== Helper methods =====

    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    pub(crate) fn peek(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&self.end)
    }

    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<(), SyntaxError> {
        if self.match_token(kind) {
            Ok(())
        } else {
            let found = self.peek();
            Err(SyntaxError::Expected {
                expected: kind,
                found: found.describe().to_string(),
                line: found.line,
            })
        }
    }

    pub(crate) fn unexpected(&self) -> SyntaxError {
        let found = self.peek();
        SyntaxError::UnexpectedToken {
            found: found.describe().to_string(),
            line: found.line,
        }
    }

    /// Run `rule` one nesting level deeper, failing past `max_depth`.
    pub(crate) fn nested<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, SyntaxError>,
    ) -> Result<T, SyntaxError> {
        if self.depth >= self.max_depth {
            return Err(SyntaxError::NestingTooDeep {
                limit: self.max_depth,
                line: self.peek().line,
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }
}

/// Recognize a token sequence with the default configuration.
pub fn recognize(tokens: &[Token]) -> Result<Summary, SyntaxError> {
    Recognizer::new(tokens).recognize()
}

/// Scan and recognize `source` with the default configuration.
pub fn check(source: &str) -> Result<Summary, CheckError> {
    check_with(source, &RecognizerConfig::default())
}

/// Scan and recognize `source`, bounding nesting per `config`.
pub fn check_with(source: &str, config: &RecognizerConfig) -> Result<Summary, CheckError> {
    let tokens = lexer::scan(source)?;
    let summary = Recognizer::with_config(&tokens, config).recognize()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::scan;

    #[test]
    fn test_empty_program() {
        let tokens = scan("").unwrap();
        let summary = recognize(&tokens).unwrap();

        assert_eq!(
            summary,
            Summary {
                tokens: 1,
                statements: 0
            }
        );
    }

    #[test]
    fn test_summary_counts() {
        let summary = check("int x;\nx = 1 + 2;\n{ return x; }").unwrap();

        assert_eq!(summary.statements, 3);
        assert_eq!(summary.tokens, 15);
    }

    #[test]
    fn test_expected_message() {
        let err = check("int ;").unwrap_err();

        assert_eq!(
            err,
            CheckError::Syntax(SyntaxError::Expected {
                expected: TokenKind::Id,
                found: ";".to_string(),
                line: 1,
            })
        );
        assert_eq!(
            err.to_string(),
            "Syntax error: expected 'identifier' at line 1 but found ';'"
        );
    }

    #[test]
    fn test_unexpected_message() {
        let err = check("\n\n;").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Syntax error: unexpected token ';' at line 3"
        );
        assert_eq!(err.kind(), "syntax");
    }

    #[test]
    fn test_lex_error_passes_through() {
        let err = check("x = 1 & 2;").unwrap_err();
        assert!(matches!(err, CheckError::Lex(_)));
        assert_eq!(err.to_string(), "Unexpected character: '&' at line 1");
        assert_eq!(err.kind(), "lexical");
    }

    #[test]
    fn test_missing_eof_token_is_tolerated() {
        let tokens = vec![
            Token::new(TokenKind::Int, "int", 1),
            Token::new(TokenKind::Id, "x", 1),
        ];
        let err = recognize(&tokens).unwrap_err();
        assert_eq!(
            err,
            SyntaxError::Expected {
                expected: TokenKind::Semicolon,
                found: "end of input".to_string(),
                line: 1,
            }
        );
    }

    #[test]
    fn test_nesting_limit() {
        let config = RecognizerConfig { max_depth: 4 };
        assert!(check_with("x = ((1));", &config).is_ok());

        let err = check_with("x = (((1)));", &config).unwrap_err();
        assert_eq!(
            err,
            CheckError::Syntax(SyntaxError::NestingTooDeep { limit: 4, line: 1 })
        );
    }

    #[test]
    fn test_nesting_limit_is_capped() {
        let source = format!("x = {}1{};", "(".repeat(2000), ")".repeat(2000));
        let config = RecognizerConfig {
            max_depth: usize::MAX,
        };
        // Recursing all the way to the cap needs more than the default test stack.
        let err = std::thread::Builder::new()
            .stack_size(64 * 1024 * 1024)
            .spawn(move || check_with(&source, &config).unwrap_err())
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(
            err,
            CheckError::Syntax(SyntaxError::NestingTooDeep {
                limit: MAX_DEPTH_LIMIT,
                line: 1,
            })
        );
    }
}
