use serde::{Deserialize, Serialize};

use self::export::ExportConfig;
use self::search::SearchConfig;

pub mod export;
pub mod search;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub search: SearchConfig,
    pub export: ExportConfig,
}

impl Config {
    pub fn new() -> Self {
        Config {
            search: SearchConfig::new(),
            export: ExportConfig::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

/// Read an env var and parse it, ignoring unset or malformed values
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}
