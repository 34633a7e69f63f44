use std::path::PathBuf;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use super::Environment;

pub const DEFAULT_MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub text: TextSettings,
    pub image: ImageSettings,
    pub audio: AudioSettings,
    pub storage: StorageSettings,
    pub limits: LimitSettings,
}

impl Settings {
    /// Built-in defaults, then `appsettings.<env>` (optional), then
    /// `APP_<SECTION>__<KEY>` environment variables.
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str().to_lowercase()))
                    .required(false),
            )
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        configuration.try_deserialize()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Bare level or filter directives; empty uses the built-in filter.
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    /// WordNet `dict/` directory; when unset the standard install locations are searched.
    pub wordnet_dir: Option<PathBuf>,
    pub max_synonyms: usize,
}

impl Default for TextSettings {
    fn default() -> Self {
        Self {
            wordnet_dir: None,
            max_synonyms: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub target_width: u32,
    pub target_height: u32,
    pub rotation_degrees: i32,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            target_width: 128,
            target_height: 128,
            rotation_degrees: -90,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// `0` keeps each upload's native rate.
    pub target_sample_rate: Option<u32>,
    pub n_fft: usize,
    pub hop_length: usize,
    pub top_db: f32,
    pub pitch_shift_semitones: f32,
}

impl AudioSettings {
    pub fn resample_to(&self) -> Option<u32> {
        self.target_sample_rate.filter(|&rate| rate > 0)
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            target_sample_rate: Some(22_050),
            n_fft: 2048,
            hop_length: 512,
            top_db: 80.0,
            pitch_shift_semitones: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub local_path: String,
    pub public_url_prefix: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: StorageProviderSetting::Local,
            local_path: "./static".to_string(),
            public_url_prefix: "/static/uploads".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitSettings {
    pub max_body_bytes: usize,
}

impl Default for LimitSettings {
    fn default() -> Self {
        Self {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}
