//! Device configuration, read from a JSON file.
//!
//! Every section and field has a default, so `{}` is a valid config.

use std::fs;
use std::path::{Path, PathBuf};

use phasor_core::Captions;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    pub animation: AnimationConfig,
    pub surface: SurfaceConfig,
    pub captions: CaptionConfig,
    pub splatter: SplatterConfig,
    pub text_field: TextFieldConfig,
    pub log: LogConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub tick_interval_ms: u64,
    pub step_degrees: f32,
    pub initial_angle_degrees: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: 100,
            step_degrees: 5.0,
            initial_angle_degrees: 10.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1080.0,
            height: 1920.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptionConfig {
    pub label: String,
    pub wave: String,
}

impl Default for CaptionConfig {
    fn default() -> Self {
        let Captions { label, wave } = Captions::default();
        Self { label, wave }
    }
}

impl From<&CaptionConfig> for Captions {
    fn from(config: &CaptionConfig) -> Self {
        Self {
            label: config.label.clone(),
            wave: config.wave.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplatterConfig {
    pub seed: u64,
    pub rings: u32,
}

impl Default for SplatterConfig {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            rings: 2000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFieldConfig {
    pub icon_width: f32,
    pub icon_height: f32,
}

impl Default for TextFieldConfig {
    fn default() -> Self {
        Self {
            icon_width: 48.0,
            icon_height: 48.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_owned(),
        }
    }
}

impl DeviceConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&raw)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: DeviceConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.animation.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "animation.tick_interval_ms must be positive".to_owned(),
            ));
        }
        if !self.animation.step_degrees.is_finite()
            || !self.animation.initial_angle_degrees.is_finite()
        {
            return Err(ConfigError::Invalid(
                "animation angles must be finite".to_owned(),
            ));
        }
        // NaN fails both comparisons
        if !(self.surface.width >= 1.0 && self.surface.height >= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "surface must be at least 1x1, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        if !(self.text_field.icon_width >= 0.0 && self.text_field.icon_height >= 0.0) {
            return Err(ConfigError::Invalid(
                "text_field icon size must be non-negative".to_owned(),
            ));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty".to_owned()));
        }
        Ok(())
    }
}
