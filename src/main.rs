// stmtcheck: syntax checker for a small C-like statement language

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use stmtcheck::config::{ColorChoice, Loader, Settings};
use stmtcheck::parser::{CheckError, Recognizer};
use stmtcheck::report::{Format, Reporter};

/// Check a source file against the statement grammar.
#[derive(Debug, Parser)]
#[command(name = "stmtcheck", version, about)]
struct Cli {
    /// Source file to check, or `-` for standard input
    file: PathBuf,

    /// TOML settings file layered over the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Deepest allowed nesting of statements and parentheses
    #[arg(long)]
    max_depth: Option<usize>,

    /// When to color output
    #[arg(long, value_enum)]
    color: Option<ColorChoice>,

    /// Outcome rendering
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Print the scanned tokens before recognizing
    #[arg(long)]
    tokens: bool,

    /// Report progress on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match load_settings(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(2);
        }
    };

    let source = match read_source(&cli.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: could not open file {}: {}", cli.file.display(), e);
            return ExitCode::from(2);
        }
    };

    let reporter = Reporter::new(cli.format);
    match run(&cli, &settings, &reporter, &source) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error formatting output: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(
    cli: &Cli,
    settings: &Settings,
    reporter: &Reporter,
    source: &str,
) -> Result<ExitCode, serde_json::Error> {
    let stdout_color = settings.output.color.enabled(io::stdout().is_terminal());
    let stderr_color = settings.output.color.enabled(io::stderr().is_terminal());

    if cli.verbose {
        eprintln!("Parsing {}...", cli.file.display());
    }

    let tokens = match stmtcheck::scan(source) {
        Ok(tokens) => tokens,
        Err(e) => return fail(reporter, &CheckError::from(e), stderr_color),
    };

    if cli.verbose {
        let lines = tokens.last().map_or(1, |t| t.line);
        eprintln!("Scanned {} tokens across {} lines.", tokens.len(), lines);
    }

    if cli.tokens {
        println!("{}", reporter.tokens(&tokens, stdout_color)?);
    }

    match Recognizer::with_config(&tokens, &settings.recognizer).recognize() {
        Ok(summary) => {
            if cli.verbose {
                eprintln!("Recognized {} top-level statements.", summary.statements);
            }
            let message = reporter.success(&summary, &settings.output.success_message, stdout_color)?;
            println!("{}", message);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => fail(reporter, &CheckError::from(e), stderr_color),
    }
}

/// Text diagnostics go to stderr; JSON reports always go to stdout.
fn fail(reporter: &Reporter, err: &CheckError, color: bool) -> Result<ExitCode, serde_json::Error> {
    match reporter.format() {
        Format::Text => eprintln!("{}", reporter.failure(err, color)?),
        Format::Json => println!("{}", reporter.failure(err, false)?),
    }
    Ok(ExitCode::FAILURE)
}

fn load_settings(cli: &Cli) -> Result<Settings, config::ConfigError> {
    let mut loader = Loader::new().with_optional_file("stmtcheck.toml");
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(depth) = cli.max_depth {
        loader = loader.max_depth(depth)?;
    }
    if let Some(color) = cli.color {
        loader = loader.color(color)?;
    }
    loader.build()
}

/// Bytes that are not UTF-8 become U+FFFD, which the scanner rejects at its line.
fn read_source(path: &Path) -> io::Result<String> {
    let bytes = if path.as_os_str() == "-" {
        let mut bytes = Vec::new();
        io::stdin().read_to_end(&mut bytes)?;
        bytes
    } else {
        fs::read(path)?
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
