use std::path::PathBuf;

use thiserror::Error;

use crate::store::SuffixSet;

/// Classifies suffix store errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    /// Cache file loaded but holds too few suffixes
    CacheCorrupt,
    /// Cache file could not be written
    CacheNotWritable,
    /// The HTTP request could not be set up
    FetchInitFailed,
    /// The HTTP request did not complete successfully
    FetchFailed,
    /// Other I/O failure
    Io,
}

/// Public suffix extraction error types
#[derive(Error, Debug)]
pub enum PslError {
    #[error("Suffix cache is empty or corrupt: {found} suffixes, expected at least {minimum}")]
    CacheCorrupt { found: usize, minimum: usize },

    #[error("Suffix cache {} is not writable: {message}", .path.display())]
    CacheNotWritable { path: PathBuf, message: String },

    #[error("HTTP client initialisation failed{}", detail(.message))]
    FetchInitFailed { message: Option<String> },

    #[error("Public suffix list download failed{}", detail(.message))]
    FetchFailed { message: Option<String> },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn detail(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

impl PslError {
    /// Kind of this error
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            PslError::CacheCorrupt { .. } => StoreErrorKind::CacheCorrupt,
            PslError::CacheNotWritable { .. } => StoreErrorKind::CacheNotWritable,
            PslError::FetchInitFailed { .. } => StoreErrorKind::FetchInitFailed,
            PslError::FetchFailed { .. } => StoreErrorKind::FetchFailed,
            PslError::IoError(_) => StoreErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, PslError>;

/// Failure of [`SuffixStore::obtain`](crate::store::SuffixStore::obtain).
///
/// Carries the suffixes gathered before the failure: the undersized cache
/// content for `CacheCorrupt`, the fetched list for `CacheNotWritable`,
/// nothing for fetch errors. Resolution can still run on them.
#[derive(Error, Debug)]
#[error("{error}")]
pub struct ObtainError {
    pub error: PslError,
    pub partial: SuffixSet,
}

impl ObtainError {
    /// Error with no usable suffixes
    pub fn empty(error: PslError) -> Self {
        Self {
            error,
            partial: SuffixSet::new(),
        }
    }

    /// Kind of the underlying error
    pub fn kind(&self) -> StoreErrorKind {
        self.error.kind()
    }

    /// Take the suffixes gathered before the failure
    pub fn into_partial(self) -> SuffixSet {
        self.partial
    }
}
