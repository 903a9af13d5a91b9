use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "http://localhost:8080")])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig {
            port: DEFAULT_PORT,
            api_upstream: "http://localhost:8080".to_owned(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    );
}

#[test]
fn from_lookup_trims_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "https://words.example.test/ ")])).unwrap();
    assert_eq!(cfg.api_upstream, "https://words.example.test");
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("API_UPSTREAM_URL", "http://api:8080"),
        ("PORT", "8000"),
        ("API_UPSTREAM_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.upstream_timeout_secs, 5);
}

#[test]
fn from_lookup_requires_upstream() {
    let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "API_UPSTREAM_URL" });

    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "API_UPSTREAM_URL" });
}

#[test]
fn from_lookup_rejects_non_http_upstream() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "localhost:8080")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "API_UPSTREAM_URL", value: "localhost:8080".to_owned() });
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("API_UPSTREAM_URL", "http://api"), ("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn config_error_messages_name_the_variable() {
    assert_eq!(
        ConfigError::Missing { var: "API_UPSTREAM_URL" }.to_string(),
        "missing required env var API_UPSTREAM_URL"
    );
}
