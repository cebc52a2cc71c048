//! Use case layer: application workflows and orchestration.

pub mod bootstrap;
pub mod context;
pub mod contracts;
pub mod load_dataset;
pub mod send_message;
pub mod shell;
