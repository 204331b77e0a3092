//! Lexer (tokenizer) for statement source code
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the
//! recognizer. Every token records the line its first character sits on so
//! that syntax errors can point back into the source.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TokenKind {
    // Literals
    Num,

    // Identifiers
    Id,

    // Type keywords
    Int,
    Float,
    Double,
    Char,
    Bool,
    String,
    Void,

    // Control keywords
    If,
    Else,
    While,
    For,
    Break,
    Continue,
    Return,

    // Operators
    Assign, // =
    Plus,   // +
    Minus,  // -
    Mul,    // *
    Div,    // /
    Gt,     // >
    Lt,     // <

    // Punctuation
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;

    // End of input
    Eof,
}

impl TokenKind {
    /// Look up the reserved word spelled by `word`, if any.
    pub fn keyword(word: &str) -> Option<TokenKind> {
        let kind = match word {
            "int" => TokenKind::Int,
            "float" => TokenKind::Float,
            "double" => TokenKind::Double,
            "char" => TokenKind::Char,
            "bool" => TokenKind::Bool,
            "string" => TokenKind::String,
            "void" => TokenKind::Void,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "for" => TokenKind::For,
            "break" => TokenKind::Break,
            "continue" => TokenKind::Continue,
            "return" => TokenKind::Return,
            _ => return None,
        };
        Some(kind)
    }

    /// Single-character operators and punctuation.
    fn symbol(ch: char) -> Option<TokenKind> {
        let kind = match ch {
            '=' => TokenKind::Assign,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Mul,
            '/' => TokenKind::Div,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ';' => TokenKind::Semicolon,
            '>' => TokenKind::Gt,
            '<' => TokenKind::Lt,
            _ => return None,
        };
        Some(kind)
    }

    /// True for the keywords that may start a declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Int
                | TokenKind::Float
                | TokenKind::Double
                | TokenKind::Char
                | TokenKind::Bool
                | TokenKind::String
                | TokenKind::Void
        )
    }

    /// Name used when this kind is reported as missing.
    pub fn display_name(self) -> &'static str {
        match self {
            TokenKind::Num => "number",
            TokenKind::Id => "identifier",
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Double => "double",
            TokenKind::Char => "char",
            TokenKind::Bool => "bool",
            TokenKind::String => "string",
            TokenKind::Void => "void",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Break => "break",
            TokenKind::Continue => "continue",
            TokenKind::Return => "return",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Mul => "*",
            TokenKind::Div => "/",
            TokenKind::Gt => ">",
            TokenKind::Lt => "<",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Num => "NUM",
            TokenKind::Id => "ID",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::Double => "DOUBLE",
            TokenKind::Char => "CHAR",
            TokenKind::Bool => "BOOL",
            TokenKind::String => "STRING",
            TokenKind::Void => "VOID",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Break => "BREAK",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Return => "RETURN",
            TokenKind::Assign => "ASSIGN",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Mul => "MUL",
            TokenKind::Div => "DIV",
            TokenKind::Gt => "GT",
            TokenKind::Lt => "LT",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Eof => "EOF",
        };
        f.write_str(name)
    }
}

/// A classified lexeme and the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// The token as it should appear after "found" in a diagnostic.
    pub fn describe(&self) -> &str {
        if self.kind == TokenKind::Eof {
            TokenKind::Eof.display_name()
        } else {
            &self.text
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' {}", self.kind, self.text, self.line)
    }
}

/// Lexer error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Unexpected character: '{character}' at line {line}")]
    UnexpectedCharacter { character: char, line: usize },
}

impl LexError {
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } => *line,
        }
    }
}

/// Lexer for statement source code
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned sequence always ends with exactly one [`TokenKind::Eof`]
    /// token. The first unrecognized character aborts the scan.
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();

        while let Some(ch) = self.peek() {
            if is_space(ch) {
                self.advance();
                continue;
            }

            let token = if ch.is_ascii_digit() {
                self.number_literal()
            } else if ch.is_ascii_alphabetic() {
                self.identifier_or_keyword()
            } else if let Some(kind) = TokenKind::symbol(ch) {
                self.advance();
                Token::new(kind, ch, self.line)
            } else {
                return Err(LexError::UnexpectedCharacter {
                    character: ch,
                    line: self.line,
                });
            };

            tokens.push(token);
        }

        tokens.push(Token::new(TokenKind::Eof, "", self.line));
        Ok(tokens)
    }

    /// Parse numeric literal (decimal digits only)
    fn number_literal(&mut self) -> Token {
        let line = self.line;
        let digits = self.consume_while(|ch| ch.is_ascii_digit());
        Token::new(TokenKind::Num, digits, line)
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self) -> Token {
        let line = self.line;
        let word = self.consume_while(|ch| ch.is_ascii_alphanumeric());
        let kind = TokenKind::keyword(&word).unwrap_or(TokenKind::Id);
        Token::new(kind, word, line)
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.position;
        while self.peek().is_some_and(&pred) {
            self.advance();
        }
        self.input[start..self.position].iter().collect()
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }
}

/// Whitespace as classified by C's `isspace` in the "C" locale.
fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Scan `source` into a token sequence.
pub fn scan(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).tokenize()
}
