mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    AudioSettings, DEFAULT_MAX_BODY_BYTES, ImageSettings, LimitSettings, LoggingSettings,
    ServerSettings, Settings, StorageProviderSetting, StorageSettings, TextSettings,
};
