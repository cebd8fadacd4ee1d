//! Integration tests for suffix resolution and the suffix cache.

use std::fs;
use std::path::PathBuf;

use psl_extract::store::cache;
use psl_extract::{Host, StoreErrorKind, SuffixResolver, SuffixSet, SuffixStore};

/// Excerpt of the public suffix list
const LIST_EXCERPT: &str = "\
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0.

// ===BEGIN ICANN DOMAINS===

// com : https://en.wikipedia.org/wiki/.com
com

// jp : https://en.wikipedia.org/wiki/.jp
jp
ac.jp
co.jp
kyoto.jp
ide.kyoto.jp

// uk : https://en.wikipedia.org/wiki/.uk
uk
ac.uk
co.uk
gov.uk
ltd.uk
nhs.uk
org.uk
plc.uk
police.uk

// au : https://en.wikipedia.org/wiki/.au
au
com.au
edu.au
act.edu.au
nsw.edu.au

// fr : https://en.wikipedia.org/wiki/.fr
fr
asso.fr
gouv.fr

// ===END ICANN DOMAINS===
// ===BEGIN PRIVATE DOMAINS===

// GitHub, Inc.
github.io
githubusercontent.com

// Amazon
s3.dualstack.eu-west-1.amazonaws.com

// ===END PRIVATE DOMAINS===
";

fn test_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "psl_extract_it_{}_{}",
        name,
        std::process::id()
    ));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn excerpt_resolver() -> SuffixResolver {
    SuffixResolver::new(SuffixSet::clean(LIST_EXCERPT, None))
}

#[test]
fn test_www_example_co_uk() {
    let host = excerpt_resolver().resolve("www.example.co.uk");

    assert_eq!(host.organisation, "example");
    assert_eq!(host.suffix, "co.uk");
    assert_eq!(host.tld, "uk");
    assert_eq!(host.domain(), "example.co.uk");
    assert_eq!(host.country(), "uk");
    assert_eq!(host.subdomain(), "www");
}

#[test]
fn test_trailing_dot_is_ignored() {
    let resolver = excerpt_resolver();
    let hostnames = [
        "example.com",
        "www.example.co.uk",
        "www.ide.kyoto.jp",
        "myapp.localhost",
        "unknownbrand",
        "co.uk",
    ];

    for hostname in hostnames {
        assert_eq!(
            resolver.resolve(&format!("{}.", hostname)),
            resolver.resolve(hostname),
            "{}",
            hostname
        );
    }

    let host = resolver.resolve("example.com.");
    assert_eq!(host.organisation, "example");
    assert_eq!(host.suffix, "com");
    assert_eq!(host.tld, "com");
}

#[test]
fn test_longest_suffix_wins() {
    let resolver = excerpt_resolver();

    let cases = [
        ("www.anu.act.edu.au", "anu", "act.edu.au", 3),
        ("www.unsw.edu.au", "unsw", "edu.au", 2),
        ("shop.com.au", "shop", "com.au", 2),
        ("a.b.ide.kyoto.jp", "b", "ide.kyoto.jp", 3),
        ("city.kyoto.jp", "city", "kyoto.jp", 2),
        (
            "bucket.s3.dualstack.eu-west-1.amazonaws.com",
            "bucket",
            "s3.dualstack.eu-west-1.amazonaws.com",
            5,
        ),
        ("raw.githubusercontent.com", "raw", "githubusercontent.com", 2),
    ];

    for (hostname, organisation, suffix, depth) in cases {
        let host = resolver.resolve(hostname);
        assert_eq!(host.organisation, organisation, "{}", hostname);
        assert_eq!(host.suffix, suffix, "{}", hostname);
        assert_eq!(host.suffix.split('.').count(), depth, "{}", hostname);
    }
}

#[test]
fn test_depth_limited_list_drops_deep_private_suffixes() {
    let resolver = SuffixResolver::new(SuffixSet::clean(LIST_EXCERPT, Some(3)));

    // act.edu.au has two dots and survives
    assert_eq!(resolver.resolve("www.anu.act.edu.au").suffix, "act.edu.au");

    // The five-label Amazon suffix is gone, so `com` matches instead
    let host = resolver.resolve("bucket.s3.dualstack.eu-west-1.amazonaws.com");
    assert_eq!(host.suffix, "com");
    assert_eq!(host.organisation, "amazonaws");
}

#[test]
fn test_reserved_name_fallback() {
    let host = excerpt_resolver().resolve("myapp.localhost");

    assert_eq!(host.organisation, "myapp");
    assert_eq!(host.suffix, "localhost");
    assert_eq!(host.tld, "localhost");
    assert_eq!(host.country(), "");
}

#[test]
fn test_hostname_equal_to_suffix() {
    let host = excerpt_resolver().resolve("co.uk");

    assert_eq!(host.organisation, "");
    assert_eq!(host.suffix, "co.uk");
    assert_eq!(host.tld, "uk");
    assert_eq!(host.domain(), "");
}

#[test]
fn test_unresolvable_hostname() {
    let host = excerpt_resolver().resolve("unknownbrand");

    assert_eq!(host, Host::from_name("unknownbrand"));
    assert_eq!(host.domain(), "");
    assert_eq!(host.country(), "");
    assert_eq!(host.subdomain(), "");
}

#[test]
fn test_cache_round_trip_through_store() {
    let dir = test_dir("round_trip");
    let path = dir.join("suffixes.txt");
    let suffixes = SuffixSet::clean(LIST_EXCERPT, None);

    cache::persist(&path, &suffixes).unwrap();

    let store = SuffixStore::new()
        .with_cache_path(&path)
        .with_url("http://127.0.0.1:1/effective_tld_names.dat")
        .with_min_entries(suffixes.len());
    let loaded = store.obtain().unwrap();
    assert_eq!(loaded, suffixes);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_lazy_resolver_loads_cache_on_first_use() {
    let dir = test_dir("lazy");
    let path = dir.join("suffixes.txt");
    let suffixes = SuffixSet::clean(LIST_EXCERPT, None);
    cache::persist(&path, &suffixes).unwrap();

    let store = SuffixStore::new()
        .with_cache_path(&path)
        .with_min_entries(10);
    let resolver = SuffixResolver::with_store(store);

    assert_eq!(resolver.suffix_count(), suffixes.len());
    assert_eq!(resolver.resolve("www.example.co.uk").domain(), "example.co.uk");

    // Emptying the cache keeps what is already loaded
    assert!(resolver.delete_cache());
    assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    assert_eq!(resolver.resolve("www.example.co.uk").suffix, "co.uk");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_corrupt_cache_still_resolves_partial_data() {
    let dir = test_dir("corrupt");
    let path = dir.join("suffixes.txt");
    fs::write(&path, "com\nco.uk\n").unwrap();

    let store = SuffixStore::new().with_cache_path(&path);
    assert_eq!(store.obtain().unwrap_err().kind(), StoreErrorKind::CacheCorrupt);

    let resolver = SuffixResolver::with_store(store);
    assert_eq!(resolver.resolve("www.example.co.uk").suffix, "co.uk");
    assert_eq!(resolver.resolve("api.test").suffix, "test");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_failed_download_falls_back_to_reserved_names() {
    let dir = test_dir("offline");
    let store = SuffixStore::new()
        .with_cache_path(dir.join("suffixes.txt"))
        .with_url("http://127.0.0.1:1/effective_tld_names.dat");
    let resolver = SuffixResolver::with_store(store);

    assert_eq!(resolver.suffix_count(), 0);
    assert!(!resolver.resolve("www.example.co.uk").is_resolved());

    let host = resolver.resolve("myapp.localhost");
    assert_eq!(host.organisation, "myapp");
    assert_eq!(host.suffix, "localhost");

    let _ = fs::remove_dir_all(&dir);
}
