use std::path::{Path, PathBuf};
use std::time::Duration;

use parking_lot::Mutex;

use crate::error::{ObtainError, PslError, Result};

use super::cache;
use super::set::SuffixSet;

/// Default cache file name, relative to the working directory
pub const DEFAULT_CACHE_FILE: &str = "suffixes.txt";

/// Mozilla Public Suffix List
pub const DEFAULT_SUFFIX_URL: &str = "https://publicsuffix.org/list/effective_tld_names.dat";

/// Smallest suffix count a sane cache can hold.
/// The real list has well over this many entries of depth 3 or less.
pub const MIN_CACHE_ENTRIES: usize = 8000;

/// Public suffix store: loads the cached list, or downloads, cleans and
/// caches it.
pub struct SuffixStore {
    pub cache_path: PathBuf,
    pub url: String,
    pub verbose: bool,

    // Historical depth filter for downloaded lists (None keeps everything)
    pub max_depth: Option<usize>,
    pub min_entries: usize,

    // Re-download once the cache is older than this (None: never expires)
    pub update_interval: Option<Duration>,

    fetch_lock: Mutex<()>,
}

impl SuffixStore {
    /// Create a store using `suffixes.txt` and the publicsuffix.org list
    pub fn new() -> Self {
        Self {
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            url: DEFAULT_SUFFIX_URL.to_string(),
            verbose: false,
            max_depth: None,
            min_entries: MIN_CACHE_ENTRIES,
            update_interval: None,
            fetch_lock: Mutex::new(()),
        }
    }

    /// Set cache file path
    pub fn with_cache_path(mut self, path: impl AsRef<Path>) -> Self {
        self.cache_path = path.as_ref().to_path_buf();
        self
    }

    /// Set custom list URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Report progress and attach transport errors to fetch failures
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Drop downloaded suffixes with `depth` or more dots
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Set the minimum suffix count for a cache to be accepted
    pub fn with_min_entries(mut self, min: usize) -> Self {
        self.min_entries = min;
        self
    }

    /// Re-download the list when the cache is older than `interval`
    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval = Some(interval);
        self
    }

    /// Obtain the suffix set, from the cache when possible.
    ///
    /// On failure the returned [`ObtainError`] still carries any suffixes
    /// gathered: a download that cannot be cached is still usable.
    pub fn obtain(&self) -> std::result::Result<SuffixSet, ObtainError> {
        if cache::is_usable(&self.cache_path, self.update_interval) {
            return self.load();
        }

        let _lock = self.fetch_lock.lock();

        // Double-check after acquiring lock
        if cache::is_usable(&self.cache_path, self.update_interval) {
            return self.load();
        }

        if self.verbose {
            log::info!("Downloading public suffixes, please wait...");
        }
        log::debug!("Downloading {} from {}", self.cache_path.display(), self.url);

        let raw = self.download().map_err(ObtainError::empty)?;
        let suffixes = SuffixSet::clean(&raw, self.max_depth);
        log::debug!("Kept {} suffixes from {} bytes", suffixes.len(), raw.len());

        if let Err(error) = cache::persist(&self.cache_path, &suffixes) {
            return Err(ObtainError {
                error,
                partial: suffixes,
            });
        }

        log::debug!("Cached suffixes in {}", self.cache_path.display());
        Ok(suffixes)
    }

    /// Empty the cache file so the next `obtain` downloads again
    pub fn delete_cache(&self) -> bool {
        match cache::truncate(&self.cache_path) {
            Ok(()) => true,
            Err(e) => {
                log::warn!(
                    "Failed to empty suffix cache {}: {}",
                    self.cache_path.display(),
                    e
                );
                false
            }
        }
    }

    fn load(&self) -> std::result::Result<SuffixSet, ObtainError> {
        log::debug!("Loading suffixes from {}", self.cache_path.display());
        cache::load(&self.cache_path, self.min_entries)
    }

    /// Download the raw list
    fn download(&self) -> Result<String> {
        let mut response = ureq::get(self.url.as_str())
            .call()
            .map_err(|e| self.fetch_error(e))?;

        response
            .body_mut()
            .read_to_string()
            .map_err(|e| self.fetch_error(e))
    }

    fn fetch_error(&self, err: ureq::Error) -> PslError {
        log::debug!("Fetching {} failed: {}", self.url, err);
        let message = self.verbose.then(|| err.to_string());

        match err {
            // The request could not even be built
            ureq::Error::BadUri(_) | ureq::Error::Http(_) => PslError::FetchInitFailed { message },
            _ => PslError::FetchFailed { message },
        }
    }
}

impl Default for SuffixStore {
    fn default() -> Self {
        Self::new()
    }
}
