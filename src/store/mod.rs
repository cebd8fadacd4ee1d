pub mod cache;
pub mod loader;
pub mod set;

pub use loader::{SuffixStore, DEFAULT_CACHE_FILE, DEFAULT_SUFFIX_URL, MIN_CACHE_ENTRIES};
pub use set::SuffixSet;
