//! Expression recognition
//!
//! ```text
//! expression ::= term (("+" | "-") term)* (">" term)?
//! term       ::= factor (("*" | "/") factor)*
//! factor     ::= NUMBER | IDENT | "(" expression ")"
//! ```
//!
//! The trailing comparison is one-shot: after `>` and a single term the rule
//! returns, so `a > b > c` leaves the second `>` for the enclosing rule to
//! reject. `<` is scanned but appears in no rule.

use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Recognizer, SyntaxError};

impl Recognizer<'_> {
    /// Parse expression (additive chain plus optional comparison)
    pub(crate) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.nested(|this| {
            this.parse_term()?;

            while this.match_token(TokenKind::Plus) || this.match_token(TokenKind::Minus) {
                this.parse_term()?;
            }

            if this.match_token(TokenKind::Gt) {
                this.parse_term()?;
            }

            Ok(())
        })
    }

    /// Parse multiplicative chain (* /)
    fn parse_term(&mut self) -> Result<(), SyntaxError> {
        self.parse_factor()?;

        while self.match_token(TokenKind::Mul) || self.match_token(TokenKind::Div) {
            self.parse_factor()?;
        }

        Ok(())
    }

    fn parse_factor(&mut self) -> Result<(), SyntaxError> {
        let kind = self.peek().kind;
        match kind {
            TokenKind::Num | TokenKind::Id => {
                self.advance();
                Ok(())
            }
            TokenKind::LParen => {
                self.advance();
                self.parse_expression()?;
                self.expect(TokenKind::RParen)
            }
            _ => Err(self.unexpected()),
        }
    }
}
