use std::{path::Path, sync::mpsc::Receiver};

use crate::{
    domain::room::ChatDataset,
    infra::{
        self, config::FileConfigAdapter, contracts::ConfigAdapter, error::AppError,
        opener::SystemOpener, storage_layout::StorageLayout,
    },
    ui::CrosstermEventSource,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
        shell::{DefaultShellOrchestrator, ShellSettings},
    },
};

pub struct ShellComposition {
    pub event_source: Box<dyn AppEventSource>,
    pub orchestrator: Box<dyn ShellOrchestrator>,
}

/// Loads configuration, applies CLI overrides and starts file logging.
pub fn bootstrap(
    config_path: Option<&Path>,
    dataset_override: Option<&str>,
) -> Result<AppContext, AppError> {
    let context = build_context(config_path, dataset_override)?;
    context.storage.ensure_dirs()?;

    let log_dir = context
        .config
        .logging
        .directory
        .clone()
        .unwrap_or_else(|| context.storage.log_dir.clone());
    let guard = infra::logging::init(&context.config.logging, &log_dir)?;

    Ok(context.with_log_guard(guard))
}

fn build_context(
    config_path: Option<&Path>,
    dataset_override: Option<&str>,
) -> Result<AppContext, AppError> {
    let config_adapter = FileConfigAdapter::new(config_path);
    let mut config = config_adapter.load()?;

    if let Some(location) = dataset_override {
        config.dataset.location = location.to_owned();
    }

    Ok(AppContext::new(config, StorageLayout::resolve()?))
}

pub fn shell_settings(context: &AppContext) -> ShellSettings {
    ShellSettings {
        current_user: context.config.identity.current_user.clone(),
        compact_breakpoint: context.config.ui.compact_breakpoint_columns,
    }
}

pub fn compose_shell(
    context: &AppContext,
    dataset_rx: Receiver<ChatDataset>,
) -> ShellComposition {
    ShellComposition {
        event_source: Box::new(CrosstermEventSource::new(dataset_rx)),
        orchestrator: Box::new(DefaultShellOrchestrator::new(
            shell_settings(context),
            SystemOpener,
        )),
    }
}
