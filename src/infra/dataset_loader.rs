use std::{
    sync::mpsc::Sender,
    thread::{self, JoinHandle},
};

use crate::{
    domain::room::ChatDataset,
    usecases::load_dataset::{load_dataset, DatasetSource},
};

const DATASET_LOAD_FAILED: &str = "DATASET_LOAD_FAILED";
const DATASET_LOADER_PANICKED: &str = "DATASET_LOADER_PANICKED";

/// Runs the one-shot dataset fetch off the UI thread.
#[derive(Debug)]
pub struct DatasetLoader {
    worker: Option<JoinHandle<()>>,
}

impl DatasetLoader {
    pub fn start<S>(
        source: S,
        dataset_tx: Sender<ChatDataset>,
    ) -> Result<Self, DatasetLoaderStartError>
    where
        S: DatasetSource + Send + 'static,
    {
        let worker = thread::Builder::new()
            .name("chatview-dataset-load".to_owned())
            .spawn(move || run_load(&source, &dataset_tx))
            .map_err(DatasetLoaderStartError::WorkerSpawn)?;

        Ok(Self {
            worker: Some(worker),
        })
    }
}

impl Drop for DatasetLoader {
    fn drop(&mut self) {
        // A fetch still in flight is left to finish on its own.
        let Some(worker) = self.worker.take() else {
            return;
        };
        if !worker.is_finished() {
            return;
        }

        if let Err(error) = worker.join() {
            tracing::warn!(
                code = DATASET_LOADER_PANICKED,
                error = ?error,
                "dataset loader worker panicked"
            );
        }
    }
}

fn run_load(source: &dyn DatasetSource, dataset_tx: &Sender<ChatDataset>) {
    match load_dataset(source) {
        Ok(output) => {
            tracing::info!(
                rooms = output.room_count,
                comments = output.comment_count,
                "dataset loaded"
            );
            let _ = dataset_tx.send(output.dataset);
        }
        Err(error) => {
            tracing::error!(
                code = DATASET_LOAD_FAILED,
                reason = error.code(),
                "dataset could not be loaded; staying on the loading screen"
            );
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetLoaderStartError {
    #[error("dataset loader worker spawn failed: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}
