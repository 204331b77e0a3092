//! Outcome rendering for the command-line front end
//!
//! Turns a [`Summary`] or [`CheckError`] into the line(s) printed by the
//! binary, either as colored text or as a single JSON object.

use crate::parser::{CheckError, Summary, Token};
use crossterm::style::{style, Color, Stylize};
use serde::Serialize;

/// Colors applied to text output.
pub struct Theme {
    pub success: Color,
    pub error: Color,
    pub muted: Color,
}

/// Palette used by [`Reporter::new`].
pub const DEFAULT_THEME: Theme = Theme {
    success: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    }, // Green
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    }, // Red
    muted: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    }, // Grey
};

/// How outcomes are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct SuccessReport {
    ok: bool,
    tokens: usize,
    statements: usize,
}

#[derive(Serialize)]
struct FailureReport<'a> {
    ok: bool,
    kind: &'a str,
    message: String,
    line: usize,
}

/// Renders outcomes and token listings in the chosen [`Format`].
pub struct Reporter {
    format: Format,
    theme: &'static Theme,
}

impl Reporter {
    pub fn new(format: Format) -> Self {
        Self {
            format,
            theme: &DEFAULT_THEME,
        }
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Accepted input: the success message, or a JSON summary.
    pub fn success(
        &self,
        summary: &Summary,
        message: &str,
        color: bool,
    ) -> Result<String, serde_json::Error> {
        match self.format {
            Format::Text if color => Ok(style(message).with(self.theme.success).to_string()),
            Format::Text => Ok(message.to_string()),
            Format::Json => serde_json::to_string(&SuccessReport {
                ok: true,
                tokens: summary.tokens,
                statements: summary.statements,
            }),
        }
    }

    /// First lexical or syntax error, with its line.
    pub fn failure(&self, err: &CheckError, color: bool) -> Result<String, serde_json::Error> {
        match self.format {
            Format::Text if color => Ok(style(err).with(self.theme.error).to_string()),
            Format::Text => Ok(err.to_string()),
            Format::Json => serde_json::to_string(&FailureReport {
                ok: false,
                kind: err.kind(),
                message: err.to_string(),
                line: err.line(),
            }),
        }
    }

    /// Token listing: one `KIND 'text' line` per token, or a JSON array.
    pub fn tokens(&self, tokens: &[Token], color: bool) -> Result<String, serde_json::Error> {
        match self.format {
            Format::Json => serde_json::to_string(tokens),
            Format::Text => {
                let lines: Vec<String> = tokens
                    .iter()
                    .map(|token| {
                        if color {
                            format!(
                                "{} '{}' {}",
                                token.kind,
                                token.text,
                                style(token.line).with(self.theme.muted)
                            )
                        } else {
                            token.to_string()
                        }
                    })
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }
}
