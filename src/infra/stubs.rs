use std::cell::RefCell;

use anyhow::{bail, Result};

use crate::infra::{
    config::AppConfig,
    contracts::{ConfigAdapter, ExternalOpener},
    error::AppError,
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig, AppError> {
        Ok(AppConfig::default())
    }
}

/// Records every target instead of launching anything.
#[derive(Debug, Default)]
pub struct RecordingOpener {
    opened: RefCell<Vec<String>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn failing() -> Self {
        Self {
            opened: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl ExternalOpener for RecordingOpener {
    fn open(&self, target: &str) -> Result<()> {
        self.opened.borrow_mut().push(target.to_owned());
        if self.fail {
            bail!("no handler for {target}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let config = StubConfigAdapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn recording_opener_keeps_targets_in_order() {
        let opener = RecordingOpener::default();

        opener.open("a").expect("open a");
        opener.open("b").expect("open b");

        assert_eq!(opener.opened(), vec!["a".to_owned(), "b".to_owned()]);
    }
}
