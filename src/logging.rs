//! Token classification and global logger installation.
//!
//! The apply step turns an accumulated token sequence into a
//! [`LoggerConfig`]; the install step hands that configuration to the
//! `tracing` facility exactly once. Keeping the two apart means tests can
//! run the classification logic on isolated configurations without ever
//! touching process-wide state.

use crate::cli::LogDirectives;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

lazy_static! {
    static ref LEVELS: Regex =
        Regex::new(r"^(debug|info|warn|error|fatal)$").expect("LEVELS regex is valid");

    // Accepts color, colour, colors, colours, and each with a "no" prefix.
    static ref COLORS: Regex = Regex::new(r"^(no)?colou?rs?$").expect("COLORS regex is valid");

    static ref JSON: Regex = Regex::new(r"^json$").expect("JSON regex is valid");
}

/// Minimum severity a log event must have to be emitted
///
/// The variants form a fixed ordered vocabulary; tokens are matched
/// case-sensitively against the lowercase names. `tracing` has no fatal
/// level, so [`Severity::Fatal`] shares the `error` filter at install time
/// while keeping its own spelling everywhere else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Filter directive understood by the tracing `EnvFilter`
    pub fn as_filter_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error | Severity::Fatal => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
        };
        write!(f, "{}", name)
    }
}

/// A severity name outside the fixed vocabulary
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid log level: {0}")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

/// Color behavior of the human-readable text formatter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMode {
    /// Leave the facility's own ANSI detection untouched
    #[default]
    Auto,
    /// Emit ANSI color codes regardless of the output destination
    ForcedOn,
    /// Never emit ANSI color codes
    ForcedOff,
}

/// Active output formatter selection
///
/// Color and encoding are carried on this single axis: selecting JSON
/// discards any forced color, and a later color token replaces a JSON
/// selection with a text formatter. Whichever token came last wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Formatter {
    /// Human-readable text output with the given color behavior
    Text { color: ColorMode },
    /// Structured JSON output; has no color concept
    Json,
}

impl Default for Formatter {
    fn default() -> Self {
        Formatter::Text {
            color: ColorMode::Auto,
        }
    }
}

/// Logger configuration assembled from `--log` tokens
///
/// A plain value with no ties to process-wide state. `level = None` defers
/// to the facility's default filter (the `RUST_LOG` environment variable,
/// or `error` when unset), so the crate only overrides what a token
/// explicitly named.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub level: Option<Severity>,
    pub formatter: Formatter,
}

impl LoggerConfig {
    /// Create a configuration holding only facility defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an accumulated token sequence to this configuration
    ///
    /// A single linear pass. Each token is matched against the severity,
    /// color, and JSON patterns in that order; the first matching class
    /// mutates its axis immediately, so later tokens overwrite earlier
    /// ones. Tokens matching no class are ignored: unknown values must
    /// never abort the host program.
    pub fn apply(&mut self, directives: &LogDirectives) {
        for token in directives.tokens() {
            if LEVELS.is_match(token) {
                let level = token.parse::<Severity>().unwrap_or_else(|err| {
                    // Unreachable unless LEVELS and FromStr drift apart.
                    panic!("severity pattern accepted a level the parser rejects: {}", err)
                });
                self.level = Some(level);
            } else if COLORS.is_match(token) {
                let color = if token.starts_with("no") {
                    ColorMode::ForcedOff
                } else {
                    ColorMode::ForcedOn
                };
                self.formatter = Formatter::Text { color };
            } else if JSON.is_match(token) {
                self.formatter = Formatter::Json;
            }
        }
    }
}

/// Failure to hand a configuration to the tracing facility
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The global dispatcher accepts exactly one subscriber per process
    #[error("failed to install global logger: {0}")]
    Install(#[from] TryInitError),
}

/// Install `config` as the process-wide tracing subscriber
///
/// Must run once, before any thread or task that logs is spawned. A second
/// installation attempt returns [`LoggingError::Install`]; the first
/// configuration stays in effect.
pub fn install(config: &LoggerConfig) -> Result<(), LoggingError> {
    let filter = match config.level {
        Some(level) => EnvFilter::new(level.as_filter_str()),
        None => EnvFilter::from_default_env(),
    };

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match config.formatter {
        Formatter::Json => builder.json().finish().try_init()?,
        Formatter::Text { color } => match color {
            ColorMode::Auto => builder.finish().try_init()?,
            ColorMode::ForcedOn => builder.with_ansi(true).finish().try_init()?,
            ColorMode::ForcedOff => builder.with_ansi(false).finish().try_init()?,
        },
    }
    Ok(())
}

/// Apply `directives` to a fresh configuration and install the result
///
/// The one-call pipeline for hosts with no configuration of their own to
/// merge. Returns the configuration that was installed so the host can
/// echo or persist it.
pub fn init(directives: &LogDirectives) -> Result<LoggerConfig, LoggingError> {
    let mut config = LoggerConfig::new();
    config.apply(directives);
    install(&config)?;
    Ok(config)
}
