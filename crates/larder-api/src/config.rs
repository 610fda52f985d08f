use std::fmt;

use larder_core::config::{
    env_snapshot, optional_trimmed, value_or_default, ConfigError, SheetsConfig,
};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub storage: StorageConfig,
}

/// Where item rows live.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageConfig {
    Sheets(SheetsConfig),
    /// Process-local grid, lost on restart
    Memory,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sheets(config) => formatter.debug_tuple("Sheets").field(config).finish(),
            Self::Memory => formatter.write_str("Memory"),
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("AppConfig")
            .field("bind_addr", &self.bind_addr)
            .field("storage", &self.storage)
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values = env_snapshot();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "LARDER_API_BIND_ADDR", DEFAULT_BIND_ADDR);

        let storage = match optional_trimmed(&lookup, "LARDER_STORAGE")
            .map(|value| value.to_ascii_lowercase())
            .as_deref()
        {
            None | Some("sheets") => StorageConfig::Sheets(SheetsConfig::from_lookup(&lookup)?),
            Some("memory") => StorageConfig::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid(format!(
                    "LARDER_STORAGE must be `sheets` or `memory`, got `{other}`"
                )))
            }
        };

        Ok(Self { bind_addr, storage })
    }
}
