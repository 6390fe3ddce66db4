//! Configuration file support for nvd-cpe-report.
//!
//! Provides YAML-based configuration through `nvd-cpe-report.config.yml`
//! files, and the resolution of file values against command-line values.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::adapters::outbound::network::DEFAULT_FEED_BASE_URL;
use crate::application::dto::OutputFormat;
use crate::cve_report::domain::{CpeFilter, FeedYear};
use crate::shared::error::ReportError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "nvd-cpe-report.config.yml";

/// Directory feeds are read from and downloaded into
pub const DEFAULT_INPUT_DIR: &str = "./input";

/// Directory reports are written to when no explicit output path is given
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub year: Option<u16>,
    pub cpe: Option<String>,
    pub format: Option<String>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub feed_base_url: Option<String>,
    pub offline: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(year) = config.year {
        FeedYear::new(year).context("Invalid config: year")?;
    }
    if let Some(ref format) = config.format {
        parse_format(format)?;
    }
    if let Some(ref url) = config.feed_base_url {
        validate_feed_base_url(url)?;
    }
    Ok(())
}

fn parse_format(format: &str) -> Result<OutputFormat> {
    OutputFormat::from_str(format).map_err(|e| invalid(&e))
}

fn validate_feed_base_url(url: &str) -> Result<()> {
    if !(url.starts_with("https://") || url.starts_with("http://")) {
        return Err(invalid(&format!(
            "feed_base_url must be an http(s) URL, got '{}'.",
            url
        )));
    }
    Ok(())
}

fn invalid(message: &str) -> anyhow::Error {
    ReportError::Validation {
        message: message.to_string(),
    }
    .into()
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; `None`/`false` defers to the config file
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub year: Option<u16>,
    pub cpe: Option<String>,
    pub format: Option<OutputFormat>,
    pub input_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub offline: bool,
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub year: FeedYear,
    pub filter: CpeFilter,
    pub format: OutputFormat,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub feed_base_url: String,
    pub offline: bool,
}

impl Settings {
    /// Merges command-line values over config file values over defaults
    ///
    /// # Errors
    /// Returns a validation error if `year` or `cpe` is given nowhere, or a
    /// command-line value is invalid
    pub fn resolve(cli: CliOverrides, config: Option<&ConfigFile>) -> Result<Self> {
        let year = cli.year.or(config.and_then(|c| c.year)).ok_or_else(|| {
            invalid(&format!(
                "No feed year given.\n\n💡 Hint: Pass --year or set 'year' in {}.",
                CONFIG_FILENAME
            ))
        })?;

        let cpe = cli
            .cpe
            .or_else(|| config.and_then(|c| c.cpe.clone()))
            .ok_or_else(|| {
                invalid(&format!(
                    "No CPE filter given.\n\n💡 Hint: Pass --cpe or set 'cpe' in {}.",
                    CONFIG_FILENAME
                ))
            })?;

        let format = match cli.format {
            Some(format) => format,
            None => match config.and_then(|c| c.format.as_deref()) {
                Some(format) => parse_format(format)?,
                None => OutputFormat::default(),
            },
        };

        let feed_base_url = config
            .and_then(|c| c.feed_base_url.clone())
            .unwrap_or_else(|| DEFAULT_FEED_BASE_URL.to_string());

        Ok(Self {
            year: FeedYear::new(year)?,
            filter: CpeFilter::new(&cpe),
            format,
            input_dir: cli
                .input_dir
                .or_else(|| config.and_then(|c| c.input_dir.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_DIR)),
            output_dir: cli
                .output_dir
                .or_else(|| config.and_then(|c| c.output_dir.clone()))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            feed_base_url,
            offline: cli.offline || config.and_then(|c| c.offline).unwrap_or(false),
        })
    }
}
