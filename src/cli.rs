use clap::{Arg, ArgAction, ArgMatches, Args, Command};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered accumulation of `--log` tokens across all occurrences
///
/// Each occurrence of the option may carry a comma-separated list; tokens
/// keep their left-to-right order of appearance and empty fragments from
/// leading, trailing, or doubled commas are dropped. Duplicate and
/// conflicting tokens are allowed; conflicts are resolved later by the
/// apply step, where the last token naming an axis wins.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogDirectives {
    tokens: Vec<String>,
}

impl LogDirectives {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate one raw occurrence value
    ///
    /// Splits `raw` on `,` and appends every non-empty substring in order.
    /// Never fails; empty fragments are silently dropped.
    pub fn accumulate(&mut self, raw: &str) {
        for token in raw.split(',') {
            if !token.is_empty() {
                self.tokens.push(token.to_string());
            }
        }
    }

    /// Build an accumulator from raw occurrence values in order
    pub fn from_occurrences<I, S>(occurrences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut directives = Self::new();
        for raw in occurrences {
            directives.accumulate(raw.as_ref());
        }
        directives
    }

    /// The accumulated tokens in order of appearance
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Whether no tokens were supplied
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for LogDirectives {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(","))
    }
}

/// Argument group adding the repeatable `--log` option to a derive parser
///
/// Flatten into the host's `Parser` struct:
///
/// ```rust
/// use clap::Parser;
/// use logflag::LogArgs;
///
/// #[derive(Parser)]
/// struct Args {
///     #[clap(flatten)]
///     log: LogArgs,
/// }
/// ```
#[derive(Args, Clone, Debug, Default)]
pub struct LogArgs {
    /// Raw occurrence values of the `--log` option, one entry per occurrence
    #[clap(
        long = "log",
        value_name = "FLAGS",
        action = ArgAction::Append,
        help = crate::defaults::OPTION_HELP
    )]
    pub log: Vec<String>,
}

impl LogArgs {
    /// Normalize all occurrences into one ordered token sequence
    pub fn directives(&self) -> LogDirectives {
        LogDirectives::from_occurrences(&self.log)
    }
}

/// Register the repeatable `--log` option on a builder-API command
///
/// The builder-API counterpart of flattening [`LogArgs`]. Call once while
/// assembling the command, before parsing; collect the result afterwards
/// with [`from_matches`]. Registration only declares the option, it does
/// not touch any logger state.
pub fn register(cmd: Command) -> Command {
    cmd.arg(
        Arg::new(crate::defaults::OPTION_NAME)
            .long(crate::defaults::OPTION_NAME)
            .value_name(crate::defaults::VALUE_NAME)
            .action(ArgAction::Append)
            .help(crate::defaults::OPTION_HELP),
    )
}

/// Collect accumulated directives from a command built with [`register`]
pub fn from_matches(matches: &ArgMatches) -> LogDirectives {
    let mut directives = LogDirectives::new();
    if let Some(values) = matches.get_many::<String>(crate::defaults::OPTION_NAME) {
        for raw in values {
            directives.accumulate(raw);
        }
    }
    directives
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_accumulate_concatenates_occurrences_in_order() {
        let directives = LogDirectives::from_occurrences(["debug,json", "nocolor"]);
        assert_eq!(directives.tokens(), ["debug", "json", "nocolor"]);
    }

    #[test]
    fn test_accumulate_drops_empty_fragments() {
        let mut directives = LogDirectives::new();
        directives.accumulate(",warn,");
        directives.accumulate("a,,b");
        directives.accumulate(",,");
        assert_eq!(directives.tokens(), ["warn", "a", "b"]);
    }

    #[test]
    fn test_empty_accumulator() {
        let directives = LogDirectives::new();
        assert!(directives.is_empty());
        assert_eq!(directives.to_string(), "");
    }

    #[test]
    fn test_display_renders_comma_joined() {
        let directives = LogDirectives::from_occurrences(["debug,json", "nocolor"]);
        assert_eq!(directives.to_string(), "debug,json,nocolor");
    }

    #[test]
    fn test_register_and_from_matches() {
        let cmd = register(Command::new("demo"));
        let matches = cmd
            .try_get_matches_from(["demo", "--log", "debug,json", "--log", "nocolor"])
            .expect("arguments parse");
        let directives = from_matches(&matches);
        assert_eq!(directives.tokens(), ["debug", "json", "nocolor"]);
    }

    #[test]
    fn test_from_matches_without_occurrences() {
        let cmd = register(Command::new("demo"));
        let matches = cmd.try_get_matches_from(["demo"]).expect("arguments parse");
        assert!(from_matches(&matches).is_empty());
    }

    #[derive(Parser, Debug)]
    struct Host {
        #[clap(flatten)]
        log: LogArgs,
    }

    #[test]
    fn test_derive_flatten_accumulates() {
        let host = Host::try_parse_from(["host", "--log", "info", "--log", "color,json"])
            .expect("arguments parse");
        assert_eq!(host.log.directives().tokens(), ["info", "color", "json"]);
    }
}
