//! Tracing setup.
//!
//! The terminal is the display, so log output goes to a file instead.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::SessionConfig;

/// Install a global fmt subscriber writing to `config.log_path`.
///
/// Returns `Ok(false)` without installing anything when no path is set.
pub fn init_logging(config: &SessionConfig) -> Result<bool> {
    let Some(path) = &config.log_path else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_path_means_no_subscriber() {
        let config = SessionConfig::default();
        assert!(!init_logging(&config).unwrap());
    }

    #[test]
    fn unwritable_path_is_an_error() {
        let config = SessionConfig {
            log_path: Some("/nonexistent-dir/raycast.log".into()),
            ..SessionConfig::default()
        };
        let err = init_logging(&config).unwrap_err();
        assert!(err.to_string().contains("creating log file"));
    }
}
