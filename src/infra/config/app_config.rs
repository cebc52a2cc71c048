use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub dataset: DatasetConfig,
    pub identity: IdentityConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// Overrides the per-user log directory.
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            directory: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetConfig {
    /// File path, or an `http://` / `https://` URL.
    pub location: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            location: "chat-data.json".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdentityConfig {
    /// Sender id of the local user. Comments from it render as own bubbles.
    pub current_user: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            current_user: "customer@mail.com".to_owned(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiConfig {
    pub compact_breakpoint_columns: u16,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            compact_breakpoint_columns: 80,
        }
    }
}
