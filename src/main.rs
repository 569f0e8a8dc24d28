//! # Logflag Demo - Example Host Program
//!
//! A minimal host showing the intended integration sequence:
//!
//! 1. **Declare**: flatten [`LogArgs`] into the host's own parser
//! 2. **Parse**: let clap fill the accumulator as it walks the arguments
//! 3. **Initialize**: apply the accumulated tokens and install the logger
//! 4. **Log**: emit one event per level so the effect is observable
//!
//! Try it with different flag combinations:
//!
//! ```text
//! logflag-demo --log debug,json
//! logflag-demo --log nocolor,warn
//! logflag-demo --log info --log color
//! ```

use anyhow::Result;
use clap::Parser;
use logflag::LogArgs;
use tracing::{debug, error, info, warn};

/// Demonstration host for the repeatable --log option
#[derive(Parser, Debug)]
#[clap(version, about, long_about = None)]
struct Args {
    #[clap(flatten)]
    log: LogArgs,

    /// Message carried by the demo events
    #[clap(short, long, default_value = "hello from logflag")]
    message: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize the logger before doing anything that logs. The returned
    // configuration is echoed below so the effect of the flags is visible
    // even when the chosen threshold suppresses most events.
    let directives = args.log.directives();
    let config = logflag::logging::init(&directives)?;
    eprintln!(
        "logflag-demo v{}: directives [{}] -> {:?}",
        logflag::VERSION,
        directives,
        config
    );

    // One event per severity; which ones appear depends on the threshold.
    debug!(message = %args.message, "debug event");
    info!(message = %args.message, "info event");
    warn!(message = %args.message, "warn event");
    error!(message = %args.message, "error event");

    Ok(())
}
