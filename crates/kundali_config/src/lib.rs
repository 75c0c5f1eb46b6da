//! Layered TOML configuration for the kundali pipeline.
//!
//! Every section is optional and every field falls back to the default of
//! the struct it configures, so a partial file only overrides what it names.
//! [`KundaliConfig::discover`] resolves the file from `KUNDALI_CONFIG`, then
//! `kundali.toml` in the working directory, then built-in defaults.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use kundali_analysis::{AnalysisConfig, ReportConfig};
use kundali_base::amsha::Amsha;
use kundali_base::dasha::MAX_DASHA_LEVEL;
use kundali_base::{ChartConfig, DashaConfig, RajaYogaConfig};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "KUNDALI_CONFIG";

/// File looked up in the working directory when `KUNDALI_CONFIG` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "kundali.toml";

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    Io(String),
    /// The file is not valid TOML for this schema.
    Parse(String),
    /// Values parsed but are out of range.
    Invalid(&'static str),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config io error: {msg}"),
            Self::Parse(msg) => write!(f, "config parse error: {msg}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

/// Complete configuration, one section per consuming module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KundaliConfig {
    pub chart: ChartConfig,
    pub yoga: RajaYogaConfig,
    pub dasha: DashaConfig,
    pub analysis: AnalysisConfig,
}

fn valid_orb(orb: f64) -> bool {
    orb.is_finite() && orb >= 0.0
}

impl KundaliConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {e}", path.display())))?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Path the configuration would be discovered at, if any.
    pub fn discover_path() -> Option<PathBuf> {
        if let Some(p) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(p));
        }
        let local = PathBuf::from(DEFAULT_CONFIG_FILE);
        local.is_file().then_some(local)
    }

    /// Load from `KUNDALI_CONFIG` or `./kundali.toml`, else defaults.
    ///
    /// A path named by `KUNDALI_CONFIG` must exist; a missing
    /// `kundali.toml` simply means defaults.
    pub fn discover() -> Result<Self, ConfigError> {
        match Self::discover_path() {
            Some(path) => Self::load(path),
            None => {
                log::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reject values no module can work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.chart.vargas.is_empty() {
            return Err(ConfigError::Invalid("chart.vargas must not be empty"));
        }
        if self
            .chart
            .vargas
            .iter()
            .any(|&d| Amsha::from_code(d).is_err())
        {
            return Err(ConfigError::Invalid("chart.vargas names an unsupported division"));
        }
        if !valid_orb(self.yoga.conjunction_orb) {
            return Err(ConfigError::Invalid(
                "yoga.conjunction_orb must be a non-negative number",
            ));
        }
        if !valid_orb(self.yoga.aspect_orb) {
            return Err(ConfigError::Invalid(
                "yoga.aspect_orb must be a non-negative number",
            ));
        }
        if self.yoga.combustion_orb.is_some_and(|o| !valid_orb(o)) {
            return Err(ConfigError::Invalid(
                "yoga.combustion_orb must be a non-negative number",
            ));
        }
        if self.dasha.max_level > MAX_DASHA_LEVEL {
            return Err(ConfigError::Invalid("dasha.max_level must be at most 4"));
        }
        if self
            .analysis
            .required_sections
            .iter()
            .any(|s| s.trim().is_empty())
        {
            return Err(ConfigError::Invalid(
                "analysis.required_sections must not contain blank names",
            ));
        }
        Ok(())
    }

    /// Settings for [`kundali_analysis::build_report`].
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            yoga: self.yoga,
            dasha: self.dasha,
            analysis: self.analysis.clone(),
        }
    }
}
