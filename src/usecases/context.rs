use tracing_appender::non_blocking::WorkerGuard;

use crate::infra::{config::AppConfig, storage_layout::StorageLayout};

pub struct AppContext {
    pub config: AppConfig,
    pub storage: StorageLayout,
    /// Flushes buffered log lines when the context is dropped.
    _log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig, storage: StorageLayout) -> Self {
        Self {
            config,
            storage,
            _log_guard: None,
        }
    }

    pub fn with_log_guard(mut self, guard: WorkerGuard) -> Self {
        self._log_guard = Some(guard);
        self
    }
}
