use crate::error::LeadScoreError;
use crate::types::config::TelemetryConfig;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Filter used when `RUST_LOG` is unset. Command-line flags beat the
/// configured level.
pub fn resolve_level(verbose: u8, quiet: bool, config: &TelemetryConfig) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => config
            .log_level
            .clone()
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        1 => "info".to_string(),
        _ => "debug".to_string(),
    }
}

/// Installs the stderr subscriber. Stdout stays reserved for reports.
pub fn init(level: &str) -> Result<(), LeadScoreError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|err| {
            LeadScoreError::Telemetry(format!("invalid log level/filter '{level}': {err}"))
        })?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| LeadScoreError::Telemetry(err.to_string()))
}
