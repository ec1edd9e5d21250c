//! JSON decoding of journal entries.

use crate::model::entry::RawEntry;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

pub type DatasetResult<T> = Result<T, DatasetError>;

/// Dataset read/decode failure.
#[derive(Debug)]
pub enum DatasetError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Decode(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Decode(err) => write!(f, "invalid dataset json: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Decodes a JSON array of entries.
pub fn load_entries_from_str(json: &str) -> DatasetResult<Vec<RawEntry>> {
    let entries: Vec<RawEntry> = serde_json::from_str(json)?;
    Ok(entries)
}

/// Reads and decodes a dataset file.
pub fn load_entries_from_path(path: impl AsRef<Path>) -> DatasetResult<Vec<RawEntry>> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entries = load_entries_from_str(json.as_str())?;
    info!(
        "event=dataset_load module=dataset status=ok entries={}",
        entries.len()
    );
    Ok(entries)
}
