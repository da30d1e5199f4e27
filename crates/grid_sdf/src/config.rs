//! Generator configuration, loadable from TOML.
//!
//! ```toml
//! relaxation_2d = "source_relative"
//! relaxation_3d = "accumulated"
//! normalization = "max_dimension"
//! ```
//!
//! Every field is optional; missing fields take their defaults.

use std::path::Path;
use std::{fmt, io};

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// How a relaxed neighbor's tentative distance is computed from the popped
/// candidate's source seed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relaxation {
  /// `|neighbor - source|`. A multi-source Euclidean distance transform
  /// driven by Dijkstra ordering.
  #[default]
  SourceRelative,
  /// `|neighbor - source| + distance[source]`. Carries the seed's sub-cell
  /// offset out along the front.
  Accumulated,
}

/// Post-processing applied to the frozen distances.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Normalization {
  /// Scale by `1 / max(dimensions)` and clamp into `[-1, 1]`.
  #[default]
  MaxDimension,
  /// Signed distances in cell units.
  Raw,
}

/// Configuration for [`SdfGenerator`](crate::SdfGenerator).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdfConfig {
  /// Relaxation rule for 2D grids.
  pub relaxation_2d: Relaxation,
  /// Relaxation rule for 3D grids.
  pub relaxation_3d: Relaxation,
  /// Output scaling.
  pub normalization: Normalization,
}

impl Default for SdfConfig {
  fn default() -> Self {
    Self {
      relaxation_2d: Relaxation::SourceRelative,
      relaxation_3d: Relaxation::Accumulated,
      normalization: Normalization::MaxDimension,
    }
  }
}

impl SdfConfig {
  /// Uses `relaxation` for both dimensionalities.
  pub fn unified(relaxation: Relaxation) -> Self {
    Self {
      relaxation_2d: relaxation,
      relaxation_3d: relaxation,
      ..Self::default()
    }
  }

  /// Returns a copy with the given normalization.
  pub fn with_normalization(mut self, normalization: Normalization) -> Self {
    self.normalization = normalization;
    self
  }

  /// Parses a config from TOML text.
  pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
    Ok(toml::from_str(contents)?)
  }

  /// Serializes the config as pretty TOML.
  pub fn to_toml_string(&self) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(self)?)
  }

  /// Reads a config file.
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Self::from_toml_str(&contents)
  }

  /// Reads a config file, falling back to defaults if it is missing or
  /// malformed.
  pub fn load_or_default(path: impl AsRef<Path>) -> Self {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No SDF config at {}, using defaults", path.display());
      return Self::default();
    }
    match Self::load(path) {
      Ok(config) => {
        info!("Loaded SDF config from {}", path.display());
        config
      }
      Err(e) => {
        warn!("Failed to load SDF config: {e}, using defaults");
        Self::default()
      }
    }
  }

  /// Writes the config to `path`, creating parent directories.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, self.to_toml_string()?)?;
    debug!("Saved SDF config to {}", path.display());
    Ok(())
  }
}

/// Error reading or writing a config.
#[derive(Debug)]
pub enum ConfigError {
  Io(io::Error),
  Parse(toml::de::Error),
  Serialize(toml::ser::Error),
}

impl From<io::Error> for ConfigError {
  fn from(err: io::Error) -> Self {
    Self::Io(err)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(err: toml::de::Error) -> Self {
    Self::Parse(err)
  }
}

impl From<toml::ser::Error> for ConfigError {
  fn from(err: toml::ser::Error) -> Self {
    Self::Serialize(err)
  }
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Io(e) => write!(f, "I/O error: {e}"),
      Self::Parse(e) => write!(f, "parse error: {e}"),
      Self::Serialize(e) => write!(f, "serialize error: {e}"),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::Io(e) => Some(e),
      Self::Parse(e) => Some(e),
      Self::Serialize(e) => Some(e),
    }
  }
}
