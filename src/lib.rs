//! Public suffix extraction - split hostnames into organisation, public
//! suffix, TLD and subdomain using the Mozilla Public Suffix List.
//!
//! This library provides:
//! - A suffix store that loads a cached copy of the list, or downloads it
//!   from publicsuffix.org, cleans it and caches it
//! - Longest suffix matching of hostnames against the list
//! - RFC 2606 reserved names (`test`, `example`, `invalid`, `localhost`)
//!   resolved as suffixes when a label precedes them
//!
//! # Example
//!
//! ```rust
//! use psl_extract::{SuffixResolver, SuffixSet};
//!
//! let suffixes: SuffixSet = ["com", "uk", "co.uk"].into_iter().collect();
//! let resolver = SuffixResolver::new(suffixes);
//!
//! let host = resolver.resolve("www.example.co.uk");
//! assert_eq!(host.organisation, "example");
//! assert_eq!(host.suffix, "co.uk");
//! assert_eq!(host.tld, "uk");
//! assert_eq!(host.domain(), "example.co.uk");
//! assert_eq!(host.country(), "uk");
//! assert_eq!(host.subdomain(), "www");
//! ```
//!
//! With the real list, build the resolver from a store. The list is loaded
//! from `suffixes.txt`, or downloaded on first use:
//!
//! ```no_run
//! use psl_extract::{SuffixResolver, SuffixStore};
//!
//! let resolver = SuffixResolver::with_store(SuffixStore::new().with_verbose(true));
//! let host = resolver.resolve("myapp.localhost");
//! assert_eq!(host.suffix, "localhost");
//! ```
//!
//! # Fields
//!
//! | Field | `www.example.co.uk` | Description |
//! |-------|---------------------|-------------|
//! | hostname | `www.example.co.uk` | Input without trailing dot |
//! | organisation | `example` | Label left of the suffix |
//! | suffix | `co.uk` | Longest matching public suffix |
//! | subdomain | `www` | Labels left of the domain |
//! | domain | `example.co.uk` | Organisation and suffix |
//! | tld | `uk` | Right-most label |
//! | country | `uk` | TLD when it has two letters |

pub mod error;
pub mod resolver;
pub mod store;
pub mod types;
pub mod url;

// Re-export commonly used items
pub use error::{ObtainError, PslError, Result, StoreErrorKind};
pub use resolver::{is_reserved, SuffixResolver, DEFAULT_CACHE_SIZE, RESERVED_NAMES};
pub use store::{SuffixSet, SuffixStore, DEFAULT_CACHE_FILE, DEFAULT_SUFFIX_URL, MIN_CACHE_ENTRIES};
pub use types::{format_fields, Host, HostField};
pub use url::hostname_from_url;
