use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[("API_BASE_URL", "http://localhost:3333")])).unwrap();
    assert_eq!(cfg.base_url, "http://localhost:3333");
    assert_eq!(cfg.storage_dir, PathBuf::from(DEFAULT_STORAGE_DIR));
    assert_eq!(cfg.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS));
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ClientConfig::from_lookup(lookup_from(&[
        ("API_BASE_URL", "https://api.example.test/v1/"),
        ("THEMPLUS_STORAGE_DIR", "/tmp/themplus-session"),
        ("THEMPLUS_REQUEST_TIMEOUT_SECS", "42"),
        ("THEMPLUS_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://api.example.test/v1");
    assert_eq!(cfg.storage_dir, PathBuf::from("/tmp/themplus-session"));
    assert_eq!(cfg.request_timeout, Duration::from_secs(42));
    assert_eq!(cfg.connect_timeout, Duration::from_secs(7));
}

#[test]
fn from_lookup_missing_base_url_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { var: "API_BASE_URL" }));

    let err = ClientConfig::from_lookup(lookup_from(&[("API_BASE_URL", "  ")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing { .. }));
}

#[test]
fn from_lookup_invalid_timeout_errors() {
    let err = ClientConfig::from_lookup(lookup_from(&[
        ("API_BASE_URL", "http://localhost"),
        ("THEMPLUS_REQUEST_TIMEOUT_SECS", "soon"),
    ]))
    .unwrap_err()
    .to_string();
    assert!(err.contains("THEMPLUS_REQUEST_TIMEOUT_SECS"));
    assert!(err.contains("soon"));
}

#[test]
fn new_trims_trailing_slashes() {
    assert_eq!(ClientConfig::new("http://host//").base_url, "http://host");
}
