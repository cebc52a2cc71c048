use std::{env, fs, path::PathBuf};

use crate::infra::error::AppError;

const APP_DIR_NAME: &str = "chatview";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLayout {
    pub cache_dir: PathBuf,
    pub log_dir: PathBuf,
}

impl StorageLayout {
    pub fn resolve() -> Result<Self, AppError> {
        let cache_base = env::var_os("XDG_CACHE_HOME")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::cache_dir)
            .ok_or_else(|| AppError::StoragePathResolution {
                details: "unable to resolve cache base directory (XDG_CACHE_HOME/HOME)".into(),
            })?;

        Ok(Self::under(cache_base))
    }

    fn under(cache_base: PathBuf) -> Self {
        let cache_dir = cache_base.join(APP_DIR_NAME);
        let log_dir = cache_dir.join("logs");

        Self { cache_dir, log_dir }
    }

    pub fn ensure_dirs(&self) -> Result<(), AppError> {
        for dir in [&self.cache_dir, &self.log_dir] {
            fs::create_dir_all(dir).map_err(|source| AppError::StorageDirCreate {
                path: dir.clone(),
                source,
            })?;
        }

        Ok(())
    }
}
