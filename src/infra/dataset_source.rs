use std::{fs, io, path::PathBuf};

use crate::{
    domain::room::ChatDataset,
    usecases::load_dataset::{DatasetSource, DatasetSourceError},
};

const DATASET_READ_FAILED: &str = "DATASET_READ_FAILED";
const DATASET_PARSE_FAILED: &str = "DATASET_PARSE_FAILED";
const DATASET_HTTP_FAILED: &str = "DATASET_HTTP_FAILED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetLocation {
    File(PathBuf),
    Http(String),
}

impl DatasetLocation {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Http(trimmed.to_owned())
        } else {
            Self::File(PathBuf::from(trimmed))
        }
    }
}

pub fn source_for(location: &str) -> Box<dyn DatasetSource + Send> {
    match DatasetLocation::parse(location) {
        DatasetLocation::File(path) => Box::new(FileDatasetSource::new(path)),
        DatasetLocation::Http(url) => Box::new(HttpDatasetSource::new(url)),
    }
}

#[derive(Debug, Clone)]
pub struct FileDatasetSource {
    path: PathBuf,
}

impl FileDatasetSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DatasetSource for FileDatasetSource {
    fn fetch(&self) -> Result<ChatDataset, DatasetSourceError> {
        let raw = fs::read_to_string(&self.path).map_err(|error| {
            tracing::warn!(
                code = DATASET_READ_FAILED,
                path = %self.path.display(),
                error = %error,
                "dataset file could not be read"
            );
            match error.kind() {
                io::ErrorKind::NotFound => DatasetSourceError::NotFound,
                _ => DatasetSourceError::Unavailable,
            }
        })?;

        parse_document(&raw, &self.path.display().to_string())
    }
}

#[derive(Debug, Clone)]
pub struct HttpDatasetSource {
    url: String,
}

impl HttpDatasetSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl DatasetSource for HttpDatasetSource {
    fn fetch(&self) -> Result<ChatDataset, DatasetSourceError> {
        let response = reqwest::blocking::get(&self.url).map_err(|error| {
            tracing::warn!(
                code = DATASET_HTTP_FAILED,
                url = %self.url,
                error = %error,
                "dataset request failed"
            );
            DatasetSourceError::Unavailable
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            tracing::warn!(
                code = DATASET_HTTP_FAILED,
                url = %self.url,
                %status,
                "dataset not found"
            );
            return Err(DatasetSourceError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!(
                code = DATASET_HTTP_FAILED,
                url = %self.url,
                %status,
                "dataset request rejected"
            );
            return Err(DatasetSourceError::Unavailable);
        }

        let body = response.text().map_err(|error| {
            tracing::warn!(
                code = DATASET_HTTP_FAILED,
                url = %self.url,
                error = %error,
                "dataset body could not be read"
            );
            DatasetSourceError::Unavailable
        })?;

        parse_document(&body, &self.url)
    }
}

fn parse_document(raw: &str, origin: &str) -> Result<ChatDataset, DatasetSourceError> {
    let dataset = ChatDataset::from_json(raw).map_err(|error| {
        tracing::warn!(
            code = DATASET_PARSE_FAILED,
            origin,
            error = %error,
            "dataset document is malformed"
        );
        DatasetSourceError::InvalidData
    })?;

    tracing::debug!(origin, rooms = dataset.rooms().len(), "dataset document parsed");
    Ok(dataset)
}
