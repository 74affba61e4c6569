//! minic-drv - Scanner Driver
//!
//! The command-line harness for the Mini scanner. It opens the input
//! file, drives the scanner until end of input, and prints one line per
//! token: `<line>:<column> <KIND>`, followed by ` (<value>)` for
//! identifiers and literals. Lexical diagnostics go to stderr and do not
//! change the exit status; only fatal problems (bad usage, unreadable
//! input) do.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use thiserror::Error;

use minic_lex::{Scanner, Token, TokenKind};
use minic_util::Handler;

/// Configuration for the scanner driver
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// The file to scan
    pub input_file: Option<PathBuf>,
    /// Print progress to stderr
    pub verbose: bool,
    /// Print usage and exit
    pub help: bool,
    /// Print version and exit
    pub version: bool,
}

/// Errors produced by command-line parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// An option the driver does not know
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// No input file on the command line
    #[error("please supply the name of a file to be scanned")]
    NoInputFile,

    /// More than one input file on the command line
    #[error("expected exactly one input file, got '{0}' as well")]
    ExtraInputFile(String),
}

/// Parse command line arguments (excluding the program name)
pub fn parse_args(args: &[String]) -> Result<Config, UsageError> {
    let mut config = Config::default();

    for arg in args {
        match arg.as_str() {
            "--help" | "-h" => {
                config.help = true;
                return Ok(config);
            },
            "--version" | "-V" => {
                config.version = true;
                return Ok(config);
            },
            "--verbose" | "-v" => {
                config.verbose = true;
            },
            opt if opt.starts_with('-') => {
                return Err(UsageError::UnknownOption(opt.to_string()));
            },
            file => {
                if config.input_file.is_some() {
                    return Err(UsageError::ExtraInputFile(file.to_string()));
                }
                config.input_file = Some(PathBuf::from(file));
            },
        }
    }

    if config.input_file.is_none() {
        return Err(UsageError::NoInputFile);
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("Mini Scanner v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: minic [OPTIONS] <input file>");
    println!();
    println!("Options:");
    println!("  -h, --help     Print this help message");
    println!("  -V, --version  Print version information");
    println!("  -v, --verbose  Enable verbose output");
    println!();
    println!("Scans the input file and prints one line per token:");
    println!("  <line>:<column> <KIND> [(<value>)]");
}

/// Print version
pub fn print_version() {
    println!("minic {}", env!("CARGO_PKG_VERSION"));
}

/// Format one token the way the harness prints it.
///
/// Identifiers and literals carry their decoded value in parentheses;
/// every other kind is just position and name.
pub fn format_token(token: &Token) -> String {
    let mut line = format!("{}:{} {}", token.line, token.column, token.kind.name());
    match &token.kind {
        TokenKind::Ident(name) => {
            let _ = write!(line, " ({})", name);
        },
        TokenKind::IntLit(value) => {
            let _ = write!(line, " ({})", value);
        },
        TokenKind::StrLit(value) => {
            let _ = write!(line, " ({})", value);
        },
        _ => {},
    }
    line
}

/// Scan the configured input file and print its tokens.
///
/// Returns an error only for fatal (I/O) failures; lexical problems in
/// the input are printed to stderr as diagnostics and do not fail the
/// run.
pub fn run(config: &Config) -> Result<()> {
    let path = config
        .input_file
        .as_ref()
        .expect("parse_args guarantees an input file");

    if config.verbose {
        eprintln!("[verbose] Scanning: {}", path.display());
    }

    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let handler = Handler::new();
    let mut scanner = Scanner::new(&source, &handler);

    loop {
        let token = scanner.next_token();
        println!("{}", format_token(&token));
        if token.is_eof() {
            break;
        }
    }

    for diag in handler.diagnostics() {
        match diag.code {
            Some(code) => eprintln!("{}: {}: {} [{}]", diag.level, diag.span, diag.message, code),
            None => eprintln!("{}: {}: {}", diag.level, diag.span, diag.message),
        }
    }

    if config.verbose {
        eprintln!(
            "[verbose] Done: {} errors, {} warnings",
            handler.error_count(),
            handler.warning_count()
        );
    }

    Ok(())
}
