//! Settings for the checker.
//!
//! `defaults/stmtcheck.default.toml` is embedded into the binary so that the
//! documented defaults and runtime behavior stay in sync. A [`Loader`] stacks
//! settings files and command-line values over those defaults; every result
//! goes through [`Settings::validate`] before it reaches the recognizer.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/stmtcheck.default.toml");

/// Nesting limit used when no configuration is supplied.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Largest accepted nesting limit. Deeper recursion would risk exhausting
/// the native stack before the limit is reached.
pub const MAX_DEPTH_LIMIT: usize = 1024;

/// Top-level settings consumed by the checker.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub recognizer: RecognizerConfig,
    pub output: OutputConfig,
}

impl Settings {
    /// The embedded defaults, with nothing layered on top.
    pub fn defaults() -> Result<Self, ConfigError> {
        Loader::new().build()
    }

    /// Reject values the recognizer cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let depth = self.recognizer.max_depth;
        if !(1..=MAX_DEPTH_LIMIT).contains(&depth) {
            return Err(ConfigError::Message(format!(
                "recognizer.max_depth must be between 1 and {MAX_DEPTH_LIMIT}, got {depth}"
            )));
        }
        Ok(())
    }
}

/// Knobs for a single recognition pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RecognizerConfig {
    /// Deepest nesting of statements and parenthesized expressions.
    pub max_depth: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub color: ColorChoice,
    pub success_message: String,
}

/// When to color terminal output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            ColorChoice::Auto => "auto",
            ColorChoice::Always => "always",
            ColorChoice::Never => "never",
        }
    }

    /// Resolve against whether the target stream is a terminal.
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            ColorChoice::Auto => is_terminal,
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Stacks settings sources over the embedded defaults. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a TOML file that must exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// Layer a TOML file if it exists.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Override `recognizer.max_depth`, as `--max-depth` does.
    pub fn max_depth(mut self, depth: usize) -> Result<Self, ConfigError> {
        // Out-of-range values still reach `validate` so the message names the bound.
        let depth = i64::try_from(depth).unwrap_or(i64::MAX);
        self.builder = self.builder.set_override("recognizer.max_depth", depth)?;
        Ok(self)
    }

    /// Override `output.color`, as `--color` does.
    pub fn color(mut self, color: ColorChoice) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.color", color.as_str())?;
        Ok(self)
    }

    pub fn build(self) -> Result<Settings, ConfigError> {
        let settings: Settings = self.builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(source);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let settings = Settings::defaults().expect("defaults to deserialize");
        assert_eq!(settings.recognizer, RecognizerConfig::default());
        assert_eq!(settings.output.color, ColorChoice::Auto);
        assert_eq!(
            settings.output.success_message,
            "Parsing completed successfully! No Syntax Error"
        );
    }

    #[test]
    fn applies_command_line_values() {
        let settings = Loader::new()
            .max_depth(8)
            .expect("depth to apply")
            .color(ColorChoice::Never)
            .expect("color to apply")
            .build()
            .expect("config to build");
        assert_eq!(settings.recognizer.max_depth, 8);
        assert_eq!(settings.output.color, ColorChoice::Never);
    }

    #[test]
    fn rejects_zero_depth() {
        let result = Loader::new().max_depth(0).expect("depth to apply").build();
        assert!(result.is_err());
    }

    #[test]
    fn rejects_depth_past_limit() {
        let err = Loader::new()
            .max_depth(1_000_000)
            .expect("depth to apply")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("between 1 and 1024"));

        let at_limit = Loader::new()
            .max_depth(MAX_DEPTH_LIMIT)
            .expect("depth to apply")
            .build()
            .expect("limit itself is accepted");
        assert_eq!(at_limit.recognizer.max_depth, MAX_DEPTH_LIMIT);
    }

    #[test]
    fn rejects_oversized_depth_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[recognizer]\nmax_depth = 5000").expect("write settings");

        assert!(Loader::new().with_file(file.path()).build().is_err());
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[output]\nsuccess_message = \"ok\"").expect("write settings");

        let settings = Loader::new().with_file(file.path()).build().expect("config to build");
        assert_eq!(settings.output.success_message, "ok");
        assert_eq!(settings.recognizer.max_depth, DEFAULT_MAX_DEPTH);
    }

    #[test]
    fn missing_optional_file_is_ignored() {
        let settings = Loader::new()
            .with_optional_file("/nonexistent/stmtcheck.toml")
            .build()
            .expect("config to build");
        assert_eq!(settings.output.color, ColorChoice::Auto);
    }

    #[test]
    fn color_resolution() {
        assert!(ColorChoice::Auto.enabled(true));
        assert!(!ColorChoice::Auto.enabled(false));
        assert!(ColorChoice::Always.enabled(false));
        assert!(!ColorChoice::Never.enabled(true));
    }
}
