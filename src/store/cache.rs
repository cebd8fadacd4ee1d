//! Suffix cache file access.
//!
//! The cache is plain text, one suffix per line, no header.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::error::{ObtainError, PslError, Result};

use super::set::SuffixSet;

/// Check whether the cache file can be used instead of downloading.
///
/// The file must open for reading, be non-empty and, when `max_age` is set,
/// have been modified no longer than `max_age` ago.
pub fn is_usable(path: &Path, max_age: Option<Duration>) -> bool {
    let meta = match fs::File::open(path).and_then(|file| file.metadata()) {
        Ok(meta) if meta.is_file() => meta,
        _ => return false,
    };
    if meta.len() == 0 {
        return false;
    }

    match max_age {
        None => true,
        Some(max_age) => match meta.modified() {
            Ok(mtime) => SystemTime::now()
                .duration_since(mtime)
                .map(|age| age <= max_age)
                .unwrap_or(true),
            Err(_) => false,
        },
    }
}

/// Load the cached suffixes.
///
/// Fails with `CacheCorrupt` when fewer than `minimum` suffixes are found;
/// the undersized set travels with the error.
pub fn load(path: &Path, minimum: usize) -> std::result::Result<SuffixSet, ObtainError> {
    let bytes = fs::read(path).map_err(|e| ObtainError::empty(PslError::IoError(e)))?;
    let set = SuffixSet::from_cache_text(&String::from_utf8_lossy(&bytes));

    if set.len() < minimum {
        let err = PslError::CacheCorrupt {
            found: set.len(),
            minimum,
        };
        return Err(ObtainError {
            error: err,
            partial: set,
        });
    }
    Ok(set)
}

/// Overwrite the cache with `set`.
///
/// Writes a temporary file next to the cache and renames it into place, so a
/// concurrent reader never sees a half-written list.
pub fn persist(path: &Path, set: &SuffixSet) -> Result<()> {
    let not_writable = |e: std::io::Error| PslError::CacheNotWritable {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(not_writable)?;
        }
    }

    let tmp_path = path.with_extension(format!("tmp.{}", std::process::id()));
    let write = || -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(set.to_cache_text().as_bytes())?;
        file.flush()?;
        drop(file);
        fs::rename(&tmp_path, path)
    };

    if let Err(e) = write() {
        let _ = fs::remove_file(&tmp_path);
        return Err(not_writable(e));
    }
    Ok(())
}

/// Empty the cache file without removing it
pub fn truncate(path: &Path) -> Result<()> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;
    Ok(())
}
