use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |name| map.get(name).cloned()
}

#[test]
fn from_meta_reads_all_values() {
    let config = AppConfig::from_meta(lookup(&[
        (META_API_BASE, "https://api.example.com"),
        (META_IDENTITY_BASE, "https://id.example.com"),
        (META_SESSION_NOTICE_MS, "2500"),
    ]));
    assert_eq!(config.api_base_url, "https://api.example.com");
    assert_eq!(config.identity_base_url, "https://id.example.com");
    assert_eq!(config.session_notice_after_ms, 2500);
}

#[test]
fn from_meta_falls_back_for_missing_blank_or_invalid() {
    let config = AppConfig::from_meta(lookup(&[(META_API_BASE, "   "), (META_SESSION_NOTICE_MS, "soon")]));
    assert_eq!(config, AppConfig::default());
}

#[test]
fn meta_entries_round_trip_through_from_meta() {
    let config = AppConfig {
        api_base_url: "https://api.example.com".to_owned(),
        identity_base_url: "/id".to_owned(),
        session_notice_after_ms: 1234,
    };
    let entries = config.meta_entries();
    let pairs: Vec<(&str, &str)> = entries.iter().map(|(k, v)| (*k, v.as_str())).collect();
    assert_eq!(AppConfig::from_meta(lookup(&pairs)), config);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn current_without_context_uses_defaults() {
    let owner = Owner::new();
    owner.with(|| assert_eq!(AppConfig::current(), AppConfig::default()));
}
