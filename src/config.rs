//! Runtime configuration.
//!
//! Defaults match the deck's reference behavior; every value can be
//! overridden through `SWIPEDECK_*` environment variables or the builder.
//!
//! # Example
//!
//! ```ignore
//! use swipedeck::config::DeckConfig;
//!
//! let config = DeckConfig::from_env()?
//!     .with_swipe_threshold(80.0)
//!     .with_refill_floor(6);
//! config.validate()?;
//! ```

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::deck::leaving::DEFAULT_EXIT_DELAY;
use crate::deck::refill::{RefillPolicy, DEFAULT_REFILL_BUFFER, DEFAULT_REFILL_FLOOR};
use crate::error::ConfigError;
use crate::gesture::decision::DEFAULT_SWIPE_THRESHOLD;
use crate::gesture::CellScale;

pub const ENV_THRESHOLD: &str = "SWIPEDECK_THRESHOLD";
pub const ENV_EXIT_DELAY_MS: &str = "SWIPEDECK_EXIT_DELAY_MS";
pub const ENV_REFILL_FLOOR: &str = "SWIPEDECK_REFILL_FLOOR";
pub const ENV_REFILL_BUFFER: &str = "SWIPEDECK_REFILL_BUFFER";
pub const ENV_CELL_WIDTH: &str = "SWIPEDECK_CELL_WIDTH";
pub const ENV_CELL_HEIGHT: &str = "SWIPEDECK_CELL_HEIGHT";
pub const ENV_SUPPLIER_URL: &str = "SWIPEDECK_SUPPLIER_URL";
pub const ENV_FEEDBACK_URL: &str = "SWIPEDECK_FEEDBACK_URL";
pub const ENV_LOG: &str = "SWIPEDECK_LOG";
pub const ENV_LOG_FILE: &str = "SWIPEDECK_LOG_FILE";

/// Configuration for the deck core and the terminal shell.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckConfig {
    /// Minimum |delta_x| for a drag release to count as a swipe (default: 100)
    pub swipe_threshold: f64,
    /// Duration of the exit animation before the card is removed (default: 300ms)
    pub exit_delay: Duration,
    /// Stack depth below which a refill is requested (default: 4)
    pub refill_floor: usize,
    /// Extra cards requested per refill (default: 2)
    pub refill_buffer: usize,
    /// Drag distance per degree of tilt (default: 12)
    pub tilt_divisor: f64,
    /// Maximum tilt in degrees (default: 25)
    pub max_tilt_degrees: f64,
    /// Size of one terminal cell in px-equivalent units (default: 8x16)
    pub cell_scale: CellScale,
    /// Base URL of the card service; `None` uses the offline catalog
    pub supplier_url: Option<String>,
    /// Base URL of the feedback service; `None` logs feedback locally
    pub feedback_url: Option<String>,
    /// Event loop tick (default: 16ms)
    pub tick_interval: Duration,
    /// Log filter directive (default: `swipedeck=info`)
    pub log_filter: String,
    /// Log file override; `None` uses the platform data directory
    pub log_file: Option<PathBuf>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            exit_delay: DEFAULT_EXIT_DELAY,
            refill_floor: DEFAULT_REFILL_FLOOR,
            refill_buffer: DEFAULT_REFILL_BUFFER,
            tilt_divisor: 12.0,
            max_tilt_degrees: 25.0,
            cell_scale: CellScale::default(),
            supplier_url: None,
            feedback_url: None,
            tick_interval: Duration::from_millis(16),
            log_filter: "swipedeck=info".to_string(),
            log_file: None,
        }
    }
}

impl DeckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_swipe_threshold(mut self, threshold: f64) -> Self {
        self.swipe_threshold = threshold;
        self
    }

    pub fn with_exit_delay(mut self, delay: Duration) -> Self {
        self.exit_delay = delay;
        self
    }

    pub fn with_refill_floor(mut self, floor: usize) -> Self {
        self.refill_floor = floor;
        self
    }

    pub fn with_refill_buffer(mut self, buffer: usize) -> Self {
        self.refill_buffer = buffer;
        self
    }

    pub fn with_cell_scale(mut self, scale: CellScale) -> Self {
        self.cell_scale = scale;
        self
    }

    pub fn with_supplier_url(mut self, url: impl Into<String>) -> Self {
        self.supplier_url = Some(url.into());
        self
    }

    pub fn with_feedback_url(mut self, url: impl Into<String>) -> Self {
        self.feedback_url = Some(url.into());
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Refill policy derived from the floor and buffer settings.
    pub fn refill_policy(&self) -> RefillPolicy {
        RefillPolicy::new(self.refill_floor, self.refill_buffer)
    }

    /// Build a config from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(threshold) = parse_var::<f64, _>(&lookup, ENV_THRESHOLD)? {
            config.swipe_threshold = threshold;
        }
        if let Some(delay_ms) = parse_var::<u64, _>(&lookup, ENV_EXIT_DELAY_MS)? {
            config.exit_delay = Duration::from_millis(delay_ms);
        }
        if let Some(floor) = parse_var::<usize, _>(&lookup, ENV_REFILL_FLOOR)? {
            config.refill_floor = floor;
        }
        if let Some(buffer) = parse_var::<usize, _>(&lookup, ENV_REFILL_BUFFER)? {
            config.refill_buffer = buffer;
        }
        if let Some(width) = parse_var::<f64, _>(&lookup, ENV_CELL_WIDTH)? {
            config.cell_scale.width = width;
        }
        if let Some(height) = parse_var::<f64, _>(&lookup, ENV_CELL_HEIGHT)? {
            config.cell_scale.height = height;
        }
        config.supplier_url = non_empty(lookup(ENV_SUPPLIER_URL));
        config.feedback_url = non_empty(lookup(ENV_FEEDBACK_URL));
        if let Some(filter) = non_empty(lookup(ENV_LOG)) {
            config.log_filter = filter;
        }
        config.log_file = non_empty(lookup(ENV_LOG_FILE)).map(PathBuf::from);

        Ok(config)
    }

    /// Reject values the deck cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.swipe_threshold.is_finite() && self.swipe_threshold > 0.0) {
            return Err(ConfigError::out_of_range(
                ENV_THRESHOLD,
                "must be a positive number",
            ));
        }
        if self.exit_delay.is_zero() {
            return Err(ConfigError::out_of_range(
                ENV_EXIT_DELAY_MS,
                "must be at least 1ms",
            ));
        }
        if self.refill_floor == 0 {
            return Err(ConfigError::out_of_range(
                ENV_REFILL_FLOOR,
                "must be at least 1",
            ));
        }
        if !(self.cell_scale.width > 0.0 && self.cell_scale.height > 0.0) {
            return Err(ConfigError::out_of_range(
                ENV_CELL_WIDTH,
                "cell sizes must be positive",
            ));
        }
        Ok(())
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup(key)) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| ConfigError::invalid(key, &raw, e)),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    Run(CliOptions),
    Version,
    Help,
}

/// Command line overrides applied on top of the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub offline: bool,
    pub supplier_url: Option<String>,
    pub feedback_url: Option<String>,
}

impl CliOptions {
    /// Apply the overrides to `config`.
    pub fn apply(&self, mut config: DeckConfig) -> DeckConfig {
        if let Some(url) = &self.supplier_url {
            config.supplier_url = Some(url.clone());
        }
        if let Some(url) = &self.feedback_url {
            config.feedback_url = Some(url.clone());
        }
        if self.offline {
            config.supplier_url = None;
        }
        config
    }
}

/// Parse command line arguments (without the program name).
pub fn parse_args<I, S>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--offline" => options.offline = true,
            "--supplier-url" => {
                options.supplier_url = Some(args.next().ok_or_else(|| {
                    ConfigError::MissingArgument {
                        flag: arg.clone(),
                    }
                })?);
            }
            "--feedback-url" => {
                options.feedback_url = Some(args.next().ok_or_else(|| {
                    ConfigError::MissingArgument {
                        flag: arg.clone(),
                    }
                })?);
            }
            other => return Err(ConfigError::UnknownArgument(other.to_string())),
        }
    }

    Ok(CliCommand::Run(options))
}
