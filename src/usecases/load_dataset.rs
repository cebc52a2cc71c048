use crate::domain::room::ChatDataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSourceError {
    /// The resource does not exist (missing file, HTTP 404).
    NotFound,
    /// The resource could not be read or the transport failed.
    Unavailable,
    /// The resource was read but is not a valid dataset document.
    InvalidData,
}

pub trait DatasetSource {
    fn fetch(&self) -> Result<ChatDataset, DatasetSourceError>;
}

impl<T> DatasetSource for &T
where
    T: DatasetSource + ?Sized,
{
    fn fetch(&self) -> Result<ChatDataset, DatasetSourceError> {
        (*self).fetch()
    }
}

impl<T> DatasetSource for Box<T>
where
    T: DatasetSource + ?Sized,
{
    fn fetch(&self) -> Result<ChatDataset, DatasetSourceError> {
        self.as_ref().fetch()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadDatasetOutput {
    pub dataset: ChatDataset,
    pub room_count: usize,
    pub comment_count: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadDatasetError {
    NotFound,
    TemporarilyUnavailable,
    DataContractViolation,
}

impl LoadDatasetError {
    pub fn code(self) -> &'static str {
        match self {
            Self::NotFound => "DATASET_NOT_FOUND",
            Self::TemporarilyUnavailable => "DATASET_UNAVAILABLE",
            Self::DataContractViolation => "DATASET_INVALID",
        }
    }
}

/// Fetches the dataset once. There is no retry: a failure is final for the
/// session.
pub fn load_dataset(source: &dyn DatasetSource) -> Result<LoadDatasetOutput, LoadDatasetError> {
    let dataset = source.fetch().map_err(map_source_error)?;
    let room_count = dataset.rooms().len();
    let comment_count = dataset.rooms().iter().map(|room| room.comments().len()).sum();

    Ok(LoadDatasetOutput {
        dataset,
        room_count,
        comment_count,
    })
}

fn map_source_error(error: DatasetSourceError) -> LoadDatasetError {
    match error {
        DatasetSourceError::NotFound => LoadDatasetError::NotFound,
        DatasetSourceError::Unavailable => LoadDatasetError::TemporarilyUnavailable,
        DatasetSourceError::InvalidData => LoadDatasetError::DataContractViolation,
    }
}
