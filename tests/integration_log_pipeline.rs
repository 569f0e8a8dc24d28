use clap::{Command, Parser};
use logflag::{cli, ColorMode, Formatter, LogArgs, LoggerConfig, Severity};
use tracing::{debug, info, warn};

#[derive(Parser, Debug)]
struct DemoArgs {
    #[clap(flatten)]
    log: LogArgs,
}

#[test]
fn builder_command_to_config_pipeline() {
    // Register the option on a builder-API command, parse a realistic
    // argument vector, and run the accumulated tokens through apply.
    let cmd = cli::register(Command::new("pipeline"));
    let matches = cmd
        .try_get_matches_from(["pipeline", "--log", "warn,nocolor", "--log", "json,bogus"])
        .expect("arguments parse");

    let directives = cli::from_matches(&matches);
    assert_eq!(directives.tokens(), ["warn", "nocolor", "json", "bogus"]);

    let mut config = LoggerConfig::new();
    config.apply(&directives);
    assert_eq!(config.level, Some(Severity::Warn));
    // json came after nocolor, so the structured formatter wins; the
    // unrecognized trailing token changes nothing.
    assert_eq!(config.formatter, Formatter::Json);
}

#[test]
fn derive_host_installs_global_logger() {
    let args =
        DemoArgs::try_parse_from(["demo", "--log", "debug,nocolor"]).expect("arguments parse");

    // First installation in this process must succeed.
    let config = logflag::logging::init(&args.log.directives()).expect("install global logger");
    assert_eq!(config.level, Some(Severity::Debug));
    assert_eq!(
        config.formatter,
        Formatter::Text {
            color: ColorMode::ForcedOff
        }
    );

    // The installed subscriber is live; emitting through it must not panic.
    debug!("debug event after init");
    info!("info event after init");
    warn!("warn event after init");

    // The facility accepts exactly one subscriber per process.
    assert!(logflag::logging::install(&config).is_err());
}
