use serde::{self, Deserialize};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize, Clone, Debug)]
pub struct LoggingConfig {
    /// Minimum level of emitted tracing events (`error`, `warn`, `info`, `debug`, `trace`, `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl LoggingConfig {
    /// Unknown level names fall back to `INFO`.
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::INFO)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
