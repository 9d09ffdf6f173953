// src/logging.rs
use route_count_shared_kernel::{PresentationError, PresentationResult};
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable that overrides the `-v` derived filter.
pub const LOG_ENV: &str = "ROUTE_COUNT_LOG";

/// Filter directive for a `-v` count. Quiet by default so stdout stays a single line.
pub fn directive_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr subscriber.
///
/// # Errors
/// Fails if `ROUTE_COUNT_LOG` holds an invalid directive or a global subscriber is already set.
pub fn init_tracing(verbosity: u8) -> PresentationResult<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(&directives).map_err(|e| PresentationError::InvalidValue {
                flag: LOG_ENV.to_string(),
                value: directives.clone(),
                reason: e.to_string(),
            })?
        }
        _ => EnvFilter::new(directive_for(verbosity)),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| PresentationError::LoggingSetup(e.to_string()))
}
