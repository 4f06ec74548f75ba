//! Business constants and their overridable configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{MenuError, MenuResult};

/// Converts the normalized 0-100 volume score into assumed monthly units.
pub const VOLUME_SCALE: f64 = 10.0;
/// Annual revenue the waterfall starts from.
pub const WATERFALL_BASELINE: f64 = 500_000.0;
pub const BEST_PERFORMERS: usize = 4;
pub const WORST_PERFORMERS: usize = 5;
pub const TOP_CONTRIBUTORS: usize = 10;

/// Tunables for the report pipeline. Every field is optional in TOML and
/// falls back to the constant of the same name.
///
/// ```toml
/// volume_scale = 10.0
/// waterfall_baseline = 750000.0
/// best_performers = 3
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DerivationConfig {
    pub volume_scale: f64,
    pub waterfall_baseline: f64,
    pub best_performers: usize,
    pub worst_performers: usize,
    pub top_contributors: usize,
}

impl Default for DerivationConfig {
    fn default() -> Self {
        Self {
            volume_scale: VOLUME_SCALE,
            waterfall_baseline: WATERFALL_BASELINE,
            best_performers: BEST_PERFORMERS,
            worst_performers: WORST_PERFORMERS,
            top_contributors: TOP_CONTRIBUTORS,
        }
    }
}

impl DerivationConfig {
    pub fn from_toml_str(text: &str) -> MenuResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a config file from disk.
    pub fn load_file<P: AsRef<Path>>(path: P) -> MenuResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        log::debug!("loaded derivation config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
