//! Command-line and environment configuration.
//!
//! Every flag has an `ORGCHART_*` environment fallback, so the binary can be
//! driven from a shell or a container without arguments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

use clap::Parser;
use stage::consts::{MIN_SCALE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/companystructure";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be positive and finite, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("scale must be finite and at least {min}, got {scale}")]
    InvalidScale { scale: f64, min: f64 },
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "orgchart", about = "Fetch a company structure and lay it out as a card grid")]
pub struct Config {
    /// URL returning the structure as a JSON array.
    #[arg(long, env = "ORGCHART_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Viewport width in CSS pixels.
    #[arg(long, env = "ORGCHART_WIDTH", default_value_t = VIEWPORT_WIDTH)]
    pub width: f64,

    /// Viewport height in CSS pixels.
    #[arg(long, env = "ORGCHART_HEIGHT", default_value_t = VIEWPORT_HEIGHT)]
    pub height: f64,

    /// Viewport scale the cards are built for.
    #[arg(long, env = "ORGCHART_SCALE", default_value_t = 1.0)]
    pub scale: f64,

    #[arg(long, env = "ORGCHART_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,
}

impl Config {
    /// Reject values the layout cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for a non-positive or non-finite viewport, a
    /// scale below the zoom floor, or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !(valid(self.width) && valid(self.height)) {
            return Err(ConfigError::InvalidViewport { width: self.width, height: self.height });
        }
        if !(self.scale.is_finite() && self.scale >= MIN_SCALE) {
            return Err(ConfigError::InvalidScale { scale: self.scale, min: MIN_SCALE });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
