//! Infrastructure layer: adapters for config, dataset sources, storage, and OS integrations.

pub mod config;
pub mod contracts;
pub mod dataset_loader;
pub mod dataset_source;
pub mod error;
pub mod logging;
pub mod opener;
pub mod storage_layout;

#[cfg(test)]
pub mod stubs;
