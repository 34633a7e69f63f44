use super::init_tracing::DEFAULT_FILTER;

/// Configuration for tracing initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    /// `level` may be a bare level (`warn`) or a full filter directive list.
    pub fn new(environment: impl Into<String>, level: &str, json_format: bool) -> Self {
        let level = level.trim();
        let filter = if level.is_empty() {
            DEFAULT_FILTER.to_string()
        } else if level.contains('=') || level.contains(',') {
            level.to_string()
        } else {
            format!("{},augmenta={},tower_http={}", level, level, level)
        };

        Self {
            environment: environment.into(),
            json_format,
            filter,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: "local".to_string(),
            json_format: false,
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}
