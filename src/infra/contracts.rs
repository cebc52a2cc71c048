use anyhow::Result;

use crate::infra::{config::AppConfig, error::AppError};

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError>;
}

/// Hands a URL or path to whatever the OS uses to open it.
pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}
