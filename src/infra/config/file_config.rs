use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, DatasetConfig, IdentityConfig, LogConfig, UiConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub dataset: Option<FileDatasetConfig>,
    pub identity: Option<FileIdentityConfig>,
    pub ui: Option<FileUiConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(dataset) = self.dataset {
            dataset.merge_into(&mut config.dataset);
        }

        if let Some(identity) = self.identity {
            identity.merge_into(&mut config.identity);
        }

        if let Some(ui) = self.ui {
            ui.merge_into(&mut config.ui);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub directory: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(directory) = self.directory {
            config.directory = Some(directory);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileDatasetConfig {
    pub location: Option<String>,
}

impl FileDatasetConfig {
    fn merge_into(self, config: &mut DatasetConfig) {
        if let Some(location) = self.location {
            config.location = location;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileIdentityConfig {
    pub current_user: Option<String>,
}

impl FileIdentityConfig {
    fn merge_into(self, config: &mut IdentityConfig) {
        if let Some(current_user) = self.current_user {
            config.current_user = current_user;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileUiConfig {
    pub compact_breakpoint_columns: Option<u16>,
}

impl FileUiConfig {
    fn merge_into(self, config: &mut UiConfig) {
        if let Some(columns) = self.compact_breakpoint_columns {
            config.compact_breakpoint_columns = columns;
        }
    }
}
