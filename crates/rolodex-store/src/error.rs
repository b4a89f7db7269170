use rolodex_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode address book: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("corrupt store {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("corrupt store {path}: invalid record: {source}")]
    InvalidRecord {
        path: PathBuf,
        #[source]
        source: CoreError,
    },
    #[error("corrupt store {path}: duplicate contact {name}")]
    DuplicateName { path: PathBuf, name: String },
    #[error("unsupported store version {version} in {path}")]
    UnsupportedVersion { path: PathBuf, version: u32 },
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid data path: {0}")]
    InvalidDataPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    Io,
    Encode,
    Corrupt,
    MissingHomeDir,
    InvalidPath,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::Io(_) => StoreErrorKind::Io,
            StoreError::Encode(_) => StoreErrorKind::Encode,
            StoreError::Corrupt { .. }
            | StoreError::InvalidRecord { .. }
            | StoreError::DuplicateName { .. }
            | StoreError::UnsupportedVersion { .. } => StoreErrorKind::Corrupt,
            StoreError::MissingHomeDir => StoreErrorKind::MissingHomeDir,
            StoreError::InvalidDataPath(_) => StoreErrorKind::InvalidPath,
        }
    }

    pub fn is_corrupt(&self) -> bool {
        self.kind() == StoreErrorKind::Corrupt
    }
}
