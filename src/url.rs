use once_cell::sync::Lazy;
use regex::Regex;

/// Everything up to the first `://`, then the host up to the first `:` or `/`
static URL_HOST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?s:.*?://)?([^:/]*)")
        .expect("URL_HOST_PATTERN: hardcoded regex is invalid")
});

/// Strip a URL down to its hostname.
///
/// Removes the scheme (anything up to and including `://`), then the port
/// (from the first `:`) and the path and query (from the first `/`). Input
/// without these parts is returned unchanged.
pub fn hostname_from_url(url: &str) -> &str {
    URL_HOST_PATTERN
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map_or("", |m| m.as_str())
}
