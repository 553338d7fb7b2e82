use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================
// from_lookup
// =============================================================

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg.identity_base_url, DEFAULT_IDENTITY_BASE_URL);
    assert_eq!(cfg.session_notice_ms, DEFAULT_SESSION_NOTICE_MS);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("EDUBRIDGE_API_BASE_URL", "https://api.example.test/"),
        ("EDUBRIDGE_IDENTITY_BASE_URL", "https://id.example.test/v1/"),
        ("EDUBRIDGE_SESSION_NOTICE_MS", "2500"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_base_url, "https://api.example.test");
    assert_eq!(cfg.identity_base_url, "https://id.example.test/v1");
    assert_eq!(cfg.session_notice_ms, 2500);
    assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
}

#[test]
fn from_lookup_treats_blank_as_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("EDUBRIDGE_API_BASE_URL", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
}

#[test]
fn from_lookup_rejects_bad_numbers() {
    assert_eq!(
        ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::InvalidNumber { var: "PORT", value: "eighty".to_owned() })
    );
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("EDUBRIDGE_SESSION_NOTICE_MS", "-1")])),
        Err(ConfigError::InvalidNumber { var: "EDUBRIDGE_SESSION_NOTICE_MS", .. })
    ));
}

// =============================================================
// app_config
// =============================================================

#[test]
fn app_config_mirrors_server_values() {
    let cfg = ServerConfig::from_lookup(lookup(&[("EDUBRIDGE_SESSION_NOTICE_MS", "100")])).unwrap();
    let app = cfg.app_config();
    assert_eq!(app.api_base_url, cfg.api_base_url);
    assert_eq!(app.identity_base_url, cfg.identity_base_url);
    assert_eq!(app.session_notice_after_ms, 100);
}
