//! Declaration recognition
//!
//! ```text
//! declaration  ::= type_keyword IDENT ";"
//! type_keyword ::= "int" | "float" | "double" | "char" | "bool" | "string" | "void"
//! ```
//!
//! Declared names are not recorded anywhere; a later assignment to an
//! undeclared name is still accepted.

use crate::parser::parse::{Recognizer, SyntaxError};
use crate::parser::lexer::TokenKind;

impl Recognizer<'_> {
    pub(crate) fn parse_declaration(&mut self) -> Result<(), SyntaxError> {
        self.parse_type_keyword()?;
        self.expect(TokenKind::Id)?;
        self.expect(TokenKind::Semicolon)
    }

    fn parse_type_keyword(&mut self) -> Result<(), SyntaxError> {
        let kind = self.peek().kind;
        if kind.is_type_keyword() {
            self.expect(kind)
        } else {
            Err(self.unexpected())
        }
    }
}
