use anyhow::{Context, Result};

use crate::infra::contracts::ExternalOpener;

/// Opens attachments with the platform handler (browser, viewer).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        tracing::info!(target_url = %target, "opening attachment with system handler");
        open::that_detached(target).with_context(|| format!("failed to open {target}"))
    }
}
