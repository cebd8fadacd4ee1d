//! Suffix resolver module.
//!
//! Splits hostnames into organisation, public suffix and TLD by longest
//! suffix match against a [`SuffixSet`].

use std::num::NonZeroUsize;

use lru::LruCache;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::store::{SuffixSet, SuffixStore};
use crate::types::Host;

/// Default number of memoised resolutions
pub const DEFAULT_CACHE_SIZE: usize = 1024;

/// RFC 2606 names reserved for local use.
/// Treated as a suffix when a label precedes them (`myapp.localhost`).
pub const RESERVED_NAMES: [&str; 4] = ["test", "example", "invalid", "localhost"];

/// Check if `name` is an RFC 2606 reserved name
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// Hostname labels, right-most first, borrowed from the hostname.
struct HostLabels<'a> {
    hostname: &'a str,
    // Byte offset of each label, right-most label first
    starts: Vec<usize>,
}

impl<'a> HostLabels<'a> {
    fn split(hostname: &'a str) -> Self {
        let mut starts = vec![0];
        starts.extend(hostname.match_indices('.').map(|(pos, _)| pos + 1));
        starts.reverse();
        Self { hostname, starts }
    }

    fn len(&self) -> usize {
        self.starts.len()
    }

    /// Label `index` counting from the right (0 is the TLD)
    fn label(&self, index: usize) -> &'a str {
        let start = self.starts[index];
        let end = match index {
            0 => self.hostname.len(),
            _ => self.starts[index - 1] - 1,
        };
        &self.hostname[start..end]
    }

    /// The `depth` right-most labels, dot-joined
    fn suffix(&self, depth: usize) -> &'a str {
        &self.hostname[self.starts[depth - 1]..]
    }
}

/// Resolves hostnames against the public suffix list.
///
/// Built either from a ready [`SuffixSet`] or from a [`SuffixStore`], in
/// which case the set is obtained on first use. Store failures are logged
/// and resolution continues with whatever suffixes were gathered; reserved
/// names resolve even with an empty set.
pub struct SuffixResolver {
    store: Option<SuffixStore>,
    suffixes: OnceCell<SuffixSet>,
    cache: Mutex<LruCache<String, Host>>,
}

impl SuffixResolver {
    /// Create a resolver over a loaded suffix set
    pub fn new(suffixes: SuffixSet) -> Self {
        Self {
            store: None,
            suffixes: OnceCell::with_value(suffixes),
            cache: Mutex::new(LruCache::new(cache_capacity(DEFAULT_CACHE_SIZE))),
        }
    }

    /// Create a resolver that obtains its suffixes from `store` on first use
    pub fn with_store(store: SuffixStore) -> Self {
        Self {
            store: Some(store),
            suffixes: OnceCell::new(),
            cache: Mutex::new(LruCache::new(cache_capacity(DEFAULT_CACHE_SIZE))),
        }
    }

    /// Set the number of memoised resolutions
    pub fn with_cache_size(mut self, size: usize) -> Self {
        self.cache = Mutex::new(LruCache::new(cache_capacity(size)));
        self
    }

    /// The backing store, if any
    pub fn store(&self) -> Option<&SuffixStore> {
        self.store.as_ref()
    }

    /// Loaded suffixes, obtaining them from the store if needed
    pub fn suffixes(&self) -> &SuffixSet {
        self.suffixes.get_or_init(|| match &self.store {
            Some(store) => obtain_or_partial(store),
            None => SuffixSet::new(),
        })
    }

    /// Number of known suffixes
    pub fn suffix_count(&self) -> usize {
        self.suffixes().len()
    }

    /// Check if `suffix` is in the public suffix list
    pub fn contains_suffix(&self, suffix: &str) -> bool {
        self.suffixes().contains(suffix)
    }

    /// Empty the store's cache file so the next run downloads the list again.
    ///
    /// Suffixes already loaded by this resolver are kept. Returns false when
    /// there is no store or the file cannot be truncated.
    pub fn delete_cache(&self) -> bool {
        match &self.store {
            Some(store) => store.delete_cache(),
            None => false,
        }
    }

    /// Resolve a hostname.
    ///
    /// A single trailing dot is ignored. A hostname matching no suffix and no
    /// reserved name comes back with only `hostname` set.
    pub fn resolve(&self, hostname: &str) -> Host {
        let hostname = hostname.strip_suffix('.').unwrap_or(hostname);
        let suffixes = self.suffixes();

        let mut cache = self.cache.lock();
        if let Some(cached) = cache.get(hostname) {
            return cached.clone();
        }

        let host = find_suffix(suffixes, hostname);
        cache.put(hostname.to_string(), host.clone());
        host
    }
}

fn cache_capacity(size: usize) -> NonZeroUsize {
    NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN)
}

fn obtain_or_partial(store: &SuffixStore) -> SuffixSet {
    match store.obtain() {
        Ok(suffixes) => {
            if store.verbose {
                log::info!(
                    "{} suffixes were loaded (thanks publicsuffix.org)",
                    suffixes.len()
                );
            }
            suffixes
        }
        Err(err) => {
            log::warn!(
                "{}; continuing with {} suffixes and RFC 2606 reserved names",
                err,
                err.partial.len()
            );
            err.into_partial()
        }
    }
}

/// Longest suffix match, then the reserved name fallback
fn find_suffix(suffixes: &SuffixSet, hostname: &str) -> Host {
    let mut host = Host::from_name(hostname);
    let labels = HostLabels::split(hostname);

    for depth in (1..=labels.len()).rev() {
        let suffix = labels.suffix(depth);
        if suffixes.contains(suffix) {
            if depth < labels.len() {
                host.organisation = labels.label(depth).to_string();
            }
            host.suffix = suffix.to_string();
            host.tld = labels.label(0).to_string();
            return host;
        }
    }

    // Reserved names need a label in front of them
    if labels.len() > 1 && is_reserved(labels.label(0)) {
        host.organisation = labels.label(1).to_string();
        host.suffix = labels.label(0).to_string();
        host.tld = labels.label(0).to_string();
    }
    host
}
