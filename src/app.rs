use std::sync::mpsc;

use anyhow::{anyhow, Result};

use crate::{
    cli::{Cli, Command},
    domain::room::ChatDataset,
    infra::{dataset_loader::DatasetLoader, dataset_source},
    ui,
    usecases::{bootstrap, load_dataset::load_dataset},
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref(), cli.data.as_deref())?;
    let location = context.config.dataset.location.clone();

    match cli.command_or_default() {
        Command::Run => {
            let (dataset_tx, dataset_rx) = mpsc::channel();
            let _loader = DatasetLoader::start(dataset_source::source_for(&location), dataset_tx)?;

            let mut shell = bootstrap::compose_shell(&context, dataset_rx);
            ui::shell::start(
                &context,
                shell.event_source.as_mut(),
                shell.orchestrator.as_mut(),
            )?;
        }
        Command::Check => {
            let source = dataset_source::source_for(&location);
            let output = load_dataset(source.as_ref()).map_err(|error| {
                tracing::error!(code = error.code(), location = %location, "dataset check failed");
                anyhow!("{}: could not load dataset from {location}", error.code())
            })?;

            tracing::info!(
                rooms = output.room_count,
                comments = output.comment_count,
                "dataset check passed"
            );
            for line in summary_lines(&output.dataset) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn summary_lines(dataset: &ChatDataset) -> Vec<String> {
    if dataset.is_empty() {
        return vec!["No chat rooms".to_owned()];
    }

    dataset
        .rooms()
        .iter()
        .map(|room| {
            let kind = if room.is_group() { "group" } else { "direct" };
            let mut line = format!(
                "{:>6}  {:<6}  {} ({} comments, {} participants)",
                room.id(),
                kind,
                room.name(),
                room.comments().len(),
                room.info().participants.len()
            );
            if let Some(image_url) = room.info().image_url.as_deref() {
                line.push_str(&format!(" image: {image_url}"));
            }
            line
        })
        .collect()
}
