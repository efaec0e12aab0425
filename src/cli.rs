// cli.rs
use std::path::PathBuf;

use clap::Parser;

/// Write text to the console through the single-byte and UTF-16 paths
#[derive(Parser, Debug)]
#[command(name = "conprint")]
pub struct Args {
    /// Path to a UTF-8 text file (use "-" to read from stdin)
    pub input: Option<PathBuf>,

    /// Only use the single-byte path; non-ASCII characters print as '?'
    #[arg(long)]
    pub ascii: bool,

    /// Issue one console write per character instead of one per line
    #[arg(long)]
    pub per_char: bool,

    /// Extra scalar values to print after the input (U+1F600, 0x1F600 or 128512)
    #[arg(long = "scalar", value_name = "VALUE", value_parser = parse_scalar)]
    pub scalars: Vec<u32>,

    #[command(flatten)]
    pub log: LogOptions,
}

impl Args {
    /// True when the input should come from stdin.
    pub fn reads_stdin(&self) -> bool {
        match self.input.as_ref().and_then(|p| p.to_str()) {
            Some("-") | None => true,
            Some(_) => false,
        }
    }
}

/// Logging options. Log records always go to stderr.
#[derive(clap::Args, Debug)]
pub struct LogOptions {
    /// Increase log verbosity. Pass multiple times for more log output.
    ///
    /// By default only errors are shown. `-v` adds warnings, `-vv` info,
    /// `-vvv` debug and `-vvvv` trace.
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    verbosity: u8,

    /// Set fancier logging filters, in `RUST_LOG` syntax.
    #[arg(long = "log-filter", env = "CONPRINT_LOG")]
    log_filter: Option<String>,
}

impl LogOptions {
    /// Installs the global logger. Panics if one is already installed.
    pub fn init_logger(&self) {
        let mut builder = env_logger::Builder::new();
        builder
            .filter_level(self.verbosity_level())
            .parse_filters(self.log_filter.as_deref().unwrap_or_default())
            .target(env_logger::Target::Stderr)
            .init();
    }

    fn verbosity_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Error,
            1 => log::LevelFilter::Warn,
            2 => log::LevelFilter::Info,
            3 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ScalarParseError {
    #[error("invalid scalar value \"{0}\"")]
    Malformed(String),

    #[error("{0:#X} is a surrogate code point, not a scalar value")]
    Surrogate(u32),

    #[error("{0:#X} is above U+10FFFF")]
    OutOfRange(u32),
}

/// Parses `U+1F600`, `0x1F600` or decimal `128512` into a Unicode scalar value.
pub fn parse_scalar(text: &str) -> Result<u32, ScalarParseError> {
    let trimmed = text.trim();
    let hex = trimmed
        .strip_prefix("U+")
        .or_else(|| trimmed.strip_prefix("u+"))
        .or_else(|| trimmed.strip_prefix("0x"))
        .or_else(|| trimmed.strip_prefix("0X"));
    let parsed = match hex {
        Some(digits) => u32::from_str_radix(digits, 16),
        None => trimmed.parse::<u32>(),
    };
    let malformed = || ScalarParseError::Malformed(text.to_string());
    let value = parsed.map_err(|_| malformed())?;

    match value {
        0xD800..=0xDFFF => Err(ScalarParseError::Surrogate(value)),
        0x110000.. => Err(ScalarParseError::OutOfRange(value)),
        _ => Ok(value),
    }
}
