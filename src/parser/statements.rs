//! Statement recognition
//!
//! This module handles every statement form of the language:
//!
//! - Declarations: `int x;` (see [`declarations`](super::declarations))
//! - Assignments: `x = expr;`
//! - Control flow: `if`/`else`, `while`, `for`
//! - Jump statements: `return`, `break`, `continue`
//! - Compound statements: `{ ... }`
//!
//! # Grammar
//!
//! ```text
//! statement    ::= declaration | assignment | if_stmt | while_stmt | for_stmt
//!                | break_stmt | continue_stmt | return_stmt | block
//! block        ::= "{" statement* "}"
//! assignment   ::= IDENT "=" expression ";"
//! if_stmt      ::= "if" "(" expression ")" statement ("else" statement)?
//! while_stmt   ::= "while" "(" expression ")" statement
//! for_stmt     ::= "for" "(" expression ";" expression ";" expression ")" statement
//! break_stmt   ::= "break" ";"
//! continue_stmt ::= "continue" ";"
//! return_stmt  ::= "return" expression ";"
//! ```
//!
//! `break` and `continue` are accepted anywhere; there is no loop-context check.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Recognizer, SyntaxError};

impl Recognizer<'_> {
    /// Recognize a single statement, chosen by the current token alone.
    pub(crate) fn parse_statement(&mut self) -> Result<(), SyntaxError> {
        self.nested(|this| {
            let kind = this.peek().kind;
            match kind {
                TokenKind::Int
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Char
                | TokenKind::Bool
                | TokenKind::String
                | TokenKind::Void => this.parse_declaration(),
                TokenKind::Id => this.parse_assignment(),
                TokenKind::If => this.parse_if_statement(),
                TokenKind::While => this.parse_while_statement(),
                TokenKind::For => this.parse_for_statement(),
                TokenKind::Break => this.parse_jump(TokenKind::Break),
                TokenKind::Continue => this.parse_jump(TokenKind::Continue),
                TokenKind::Return => this.parse_return_statement(),
                TokenKind::LBrace => this.parse_block(),
                TokenKind::Num
                | TokenKind::Else
                | TokenKind::Assign
                | TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Mul
                | TokenKind::Div
                | TokenKind::Gt
                | TokenKind::Lt
                | TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::RBrace
                | TokenKind::Semicolon
                | TokenKind::Eof => Err(this.unexpected()),
            }
        })
    }

    /// Parse block: `{` statements until `}` or end of input, then `}`
    fn parse_block(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::LBrace)?;

        while !self.check(TokenKind::RBrace) && !self.is_at_end() {
            self.parse_statement()?;
        }

        self.expect(TokenKind::RBrace)
    }

    fn parse_assignment(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Id)?;
        self.expect(TokenKind::Assign)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)
    }

    /// Parse if statement
    ///
    /// The `else` check happens as soon as the then-branch finishes, so a
    /// dangling `else` attaches to the innermost `if`.
    fn parse_if_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::If)?;
        self.parse_condition()?;
        self.parse_statement()?;

        if self.match_token(TokenKind::Else) {
            self.parse_statement()?;
        }

        Ok(())
    }

    fn parse_while_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::While)?;
        self.parse_condition()?;
        self.parse_statement()
    }

    /// Parse for statement
    ///
    /// All three header clauses are full expressions, so none may be empty.
    fn parse_for_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::For)?;
        self.expect(TokenKind::LParen)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)?;
        self.parse_expression()?;
        self.expect(TokenKind::RParen)?;
        self.parse_statement()
    }

    /// `break;` or `continue;`
    fn parse_jump(&mut self, keyword: TokenKind) -> Result<(), SyntaxError> {
        self.expect(keyword)?;
        self.expect(TokenKind::Semicolon)
    }

    fn parse_return_statement(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::Return)?;
        self.parse_expression()?;
        self.expect(TokenKind::Semicolon)
    }

    /// `( expression )` as used by `if` and `while`
    fn parse_condition(&mut self) -> Result<(), SyntaxError> {
        self.expect(TokenKind::LParen)?;
        self.parse_expression()?;
        self.expect(TokenKind::RParen)
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::TokenKind;
    use crate::parser::parse::{check, CheckError, SyntaxError};

    fn syntax_error(source: &str) -> SyntaxError {
        match check(source) {
            Err(CheckError::Syntax(err)) => err,
            other => panic!("expected syntax error for {source:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_if_else() {
        assert!(check("if (a > b) { return a; } else { return b; }").is_ok());
    }

    #[test]
    fn test_dangling_else() {
        assert!(check("if (a) if (b) x = 1; else x = 2;").is_ok());
        assert!(check("if (a) if (b) x = 1; else x = 2; else x = 3;").is_ok());
        let err = syntax_error("if (a) x = 1; else x = 2; else x = 3;");
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                found: "else".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_while_and_for() {
        assert!(check("while (i > 0) i = i - 1;").is_ok());
        assert!(check("for (i; i > 10; i + 1) { x = x * 2; }").is_ok());
    }

    #[test]
    fn test_for_rejects_empty_clause() {
        let err = syntax_error("for (; i > 5; i) x = 1;");
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                found: ";".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_for_rejects_assignment_in_header() {
        let err = syntax_error("for (i = 0; i > 5; i) x = 1;");
        assert_eq!(
            err,
            SyntaxError::Expected {
                expected: TokenKind::Semicolon,
                found: "=".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_break_continue_outside_loop() {
        assert!(check("break; continue;").is_ok());
        let err = syntax_error("break x;");
        assert_eq!(
            err,
            SyntaxError::Expected {
                expected: TokenKind::Semicolon,
                found: "x".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_return_requires_expression() {
        let err = syntax_error("return;");
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                found: ";".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_nested_blocks() {
        assert!(check("{ { {} } { int x; } }").is_ok());
    }

    #[test]
    fn test_unclosed_block() {
        let err = syntax_error("{\n int x;\n");
        assert_eq!(err.to_string(), "Syntax error: expected '}' at line 3 but found 'end of input'");
    }

    #[test]
    fn test_stray_closing_brace() {
        let err = syntax_error("int x; }");
        assert_eq!(
            err,
            SyntaxError::UnexpectedToken {
                found: "}".to_string(),
                line: 1
            }
        );
    }

    #[test]
    fn test_expression_statement_rejected() {
        let err = syntax_error("1 + 2;");
        assert_eq!(err.line(), 1);
        assert!(matches!(err, SyntaxError::UnexpectedToken { ref found, .. } if found == "1"));
    }
}
