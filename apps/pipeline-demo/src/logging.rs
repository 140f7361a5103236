//! Console logging setup.

use tracing_subscriber::EnvFilter;

/// Plain levels, least verbose first.
const LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn verbosity(directive: &str) -> Option<usize> {
    LEVELS
        .iter()
        .position(|level| level.eq_ignore_ascii_case(directive.trim()))
}

/// Pick the filter directive for the given `-v` count.
///
/// Without `-v` the configured level is used as is. With `-v` the more
/// verbose of the two wins; a configured per-target directive
/// (e.g. `greeter=debug`) is replaced by the `-v` level.
pub fn filter_directive(configured: &str, verbose: u8) -> &str {
    let requested = match verbose {
        0 => return configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    match (verbosity(configured), verbosity(requested)) {
        (Some(have), Some(want)) if have > want => configured,
        _ => requested,
    }
}

/// Install the global subscriber writing to stderr.
///
/// `RUST_LOG` takes precedence over both the configured level and `-v`.
pub fn init_logging(configured: &str, verbose: u8) {
    let directive = filter_directive(configured, verbose);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
    {
        eprintln!("failed to install log subscriber: {e}");
    }
}
