//! Optional TOML configuration.
//!
//! `rhetmap.toml` can extend the marker lexicons and point the risk log at a
//! different file. All fields default, so the file is optional and may be
//! partial.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::RiskDimension;
use crate::errors::RhetmapError;
use crate::lexicon::{MarkerExtensions, MarkerTier};

pub const DEFAULT_CONFIG_FILE: &str = "rhetmap.toml";
pub const DEFAULT_LOG_FILE: &str = "rhetmap_log.txt";

/// Extra phrases for one dimension, split by tier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TierPhrases {
    pub base: Vec<String>,
    pub high_severity: Vec<String>,
}

/// Marker extensions keyed by dimension.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub embedded_default: TierPhrases,
    pub burden_shift: TierPhrases,
    pub deflection: TierPhrases,
    pub interest_concealment: TierPhrases,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RhetmapConfig {
    /// Append-only risk log destination.
    pub log_file: PathBuf,
    /// File extensions picked up when a directory is analyzed.
    pub extensions: Vec<String>,
    /// Extra marker phrases merged over the built-in lexicons.
    pub markers: MarkerConfig,
}

impl Default for RhetmapConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            extensions: vec!["txt".to_string(), "md".to_string(), "text".to_string()],
            markers: MarkerConfig::default(),
        }
    }
}

impl RhetmapConfig {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one,
    /// `rhetmap.toml` in the working directory is used when present,
    /// defaults otherwise. A malformed file is always an error, never
    /// silently ignored.
    pub fn load(path: Option<&Path>) -> Result<Self, RhetmapError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self, RhetmapError> {
        let content = fs::read_to_string(path).map_err(|err| RhetmapError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        let config: Self = toml::from_str(&content).map_err(|err| RhetmapError::Config {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Collect the configured extra phrases for the lexicon registry.
    pub fn marker_extensions(&self) -> MarkerExtensions {
        let mut extensions = MarkerExtensions::default();
        let per_dimension = [
            (RiskDimension::EmbeddedDefault, &self.markers.embedded_default),
            (RiskDimension::BurdenShift, &self.markers.burden_shift),
            (RiskDimension::Deflection, &self.markers.deflection),
            (
                RiskDimension::InterestConcealment,
                &self.markers.interest_concealment,
            ),
        ];
        for (dimension, tiers) in per_dimension {
            for phrase in &tiers.base {
                extensions.push(dimension, MarkerTier::Base, phrase);
            }
            for phrase in &tiers.high_severity {
                extensions.push(dimension, MarkerTier::HighSeverity, phrase);
            }
        }
        extensions
    }
}
