//! # Logflag - Command Line Logging Configuration
//!
//! A small library that adds a repeatable `--log` option to a command line
//! and uses the collected values to configure the process-wide [`tracing`]
//! logger before the host program starts doing real work.
//!
//! ## Recognized Flags
//!
//! Each occurrence of `--log` accepts a comma-separated list of tokens, and
//! the option may be given any number of times:
//!
//! - **debug, info, warn, error, fatal**: minimum severity level
//! - **color**: force colored human-readable output
//! - **nocolor**: force uncolored human-readable output
//! - **json**: switch to structured JSON output
//!
//! Tokens are applied in order of appearance, so the last token naming a
//! given axis wins. Unrecognized tokens are ignored rather than rejected,
//! so operators can share `--log` values across tools with different
//! vocabularies.
//!
//! Command line examples:
//!
//! ```text
//! command --log debug,json
//! command --log nocolor,warn
//! command --log info --log color
//! ```
//!
//! ## Architecture Overview
//!
//! The library is organized into two modules mirroring the two phases of
//! its job:
//!
//! - `cli`: accumulates `--log` occurrences into an ordered token sequence
//! - `logging`: classifies the tokens, builds a [`logging::LoggerConfig`],
//!   and installs the resulting global subscriber
//!
//! Configuration state lives in an explicit [`logging::LoggerConfig`] value
//! rather than hidden globals; nothing process-wide is touched until
//! [`logging::install`] runs, so tests can exercise the whole pipeline on
//! isolated configurations.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use clap::Parser;
//! use logflag::LogArgs;
//!
//! #[derive(Parser)]
//! struct Args {
//!     #[clap(flatten)]
//!     log: LogArgs,
//! }
//!
//! fn main() -> anyhow::Result<()> {
//!     let args = Args::parse();
//!     logflag::logging::init(&args.log.directives())?;
//!     tracing::info!("logger configured");
//!     Ok(())
//! }
//! ```
//!
//! ## Ordering Contract
//!
//! [`logging::init`] (or [`logging::install`]) must run once, after
//! argument parsing and before any thread or task that logs is spawned.
//! The apply step is a single synchronous pass with no internal locking;
//! the global subscriber itself enforces its once-only installation and a
//! second install surfaces as [`logging::LoggingError`].

/// Command-line accumulation of `--log` occurrences
///
/// Provides the [`cli::LogDirectives`] token accumulator together with the
/// two ways of wiring it into a clap command:
/// - [`cli::LogArgs`] for derive-based parsers (`#[clap(flatten)]`)
/// - [`cli::register`] / [`cli::from_matches`] for builder-based parsers
pub mod cli;

/// Token classification and tracing subscriber installation
///
/// Translates an accumulated token sequence into a [`logging::LoggerConfig`]
/// (severity threshold, color mode, output encoding) and installs the
/// corresponding global `tracing` subscriber.
pub mod logging;

// Re-export the types a typical host touches, so simple integrations only
// need the crate root.

/// Derive-API argument group and token accumulator for the `--log` option
pub use cli::{LogArgs, LogDirectives};

/// Logger configuration and the apply/install entry points
pub use logging::{ColorMode, Formatter, LoggerConfig, LoggingError, Severity};

/// The current version of the logflag crate
///
/// Populated from Cargo.toml; handy for hosts that echo their component
/// versions in diagnostics.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default names and help text for the command line surface
///
/// Kept as named constants so the derive path, the builder path, and the
/// documentation all agree on the option's spelling.
pub mod defaults {
    /// Canonical name of the logging option (`--log`)
    pub const OPTION_NAME: &str = "log";

    /// Placeholder shown for the option's value in generated help output
    pub const VALUE_NAME: &str = "FLAGS";

    /// Help text enumerating the recognized token vocabulary
    pub const OPTION_HELP: &str =
        "Logging flags, several allowed [debug, info, warn, error, fatal, color, nocolor, json]";
}
