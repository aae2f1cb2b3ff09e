use crate::error::{CricketError, Result};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LEVEL: &str = "warn";

/// Command-line flags win over the configured level; `None` defers to
/// `RUST_LOG`.
pub fn filter_directive(verbose: u8, quiet: bool, configured: Option<&str>) -> Option<String> {
    if quiet {
        return Some("error".to_string());
    }
    match verbose {
        0 => configured.map(str::to_string),
        1 => Some("info".to_string()),
        _ => Some("debug".to_string()),
    }
}

/// Installs the stderr subscriber. Events never go to stdout, which carries
/// command output.
pub fn init(directive: Option<&str>) -> Result<()> {
    let filter = match directive {
        Some(directive) => EnvFilter::try_new(directive)
            .map_err(|e| CricketError::ConfigParse(format!("logging.level: {e}")))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    };

    // fails only when a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
    Ok(())
}
