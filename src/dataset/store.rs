//! Load-once store for state records.

use std::path::PathBuf;

use thiserror::Error;

use crate::http_client::{self, FetchError};

use super::records::StateRecord;

/// Size cap for a fetched dataset body.
const MAX_DATASET_BYTES: usize = 16 * 1024 * 1024;

/// Where the dataset is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    /// A local JSON file, resolved relative to the working directory.
    File(PathBuf),
    /// A remote JSON resource fetched over HTTP.
    Url(String),
}

/// Failure while loading or decoding the dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Fetching the resource failed.
    #[error("dataset fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// The resource was not valid dataset JSON.
    #[error("dataset parse failed: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable collection of state records, populated once at startup.
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    states: Vec<StateRecord>,
}

impl DatasetStore {
    /// Store with no records; every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Decode a store from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, DatasetError> {
        let states: Vec<StateRecord> = serde_json::from_slice(bytes)?;
        Ok(Self { states })
    }

    /// Load from a source, propagating failures to the caller.
    pub fn try_load(source: &DatasetSource) -> Result<Self, DatasetError> {
        let bytes = match source {
            DatasetSource::File(path) => std::fs::read(path).map_err(FetchError::Io)?,
            DatasetSource::Url(url) => http_client::fetch_bytes(url, MAX_DATASET_BYTES)?,
        };
        Self::from_slice(&bytes)
    }

    /// Load from a source, degrading to an empty store on any failure.
    ///
    /// The error is logged at the boundary; callers only ever see a store.
    pub fn load(source: &DatasetSource) -> Self {
        match Self::try_load(source) {
            Ok(store) => {
                tracing::info!("Dataset loaded: {} states", store.len());
                store
            }
            Err(error) => {
                tracing::error!("Dataset load failed, continuing with empty data: {error}");
                Self::empty()
            }
        }
    }

    /// All records in dataset order.
    pub fn states(&self) -> &[StateRecord] {
        &self.states
    }

    /// Look up a record by UF code. Linear scan; the dataset holds at most
    /// 27 states.
    pub fn find_by_code(&self, code: &str) -> Option<&StateRecord> {
        self.states.iter().find(|state| state.code == code)
    }

    /// Position of a record by UF code, for join click targets.
    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.states.iter().position(|state| state.code == code)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
