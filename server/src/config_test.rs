use super::*;

use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_backend_set() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("AUTH_BACKEND_URL", "http://localhost:4000")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.auth_backend_url, "http://localhost:4000");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn overrides_are_parsed() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("AUTH_BACKEND_URL", "https://id.example.test/"),
        ("PORT", "8080"),
        ("AUTH_PROXY_TIMEOUT_SECS", " 5 "),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.auth_backend_url, "https://id.example.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn missing_backend_errors() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "AUTH_BACKEND_URL" });
    assert!(err.to_string().contains("AUTH_BACKEND_URL"));
}

#[test]
fn blank_backend_counts_as_missing() {
    let err = ServerConfig::from_lookup(lookup_from(&[("AUTH_BACKEND_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "AUTH_BACKEND_URL" });
}

#[test]
fn backend_without_scheme_is_invalid() {
    let err = ServerConfig::from_lookup(lookup_from(&[("AUTH_BACKEND_URL", "localhost:4000")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "AUTH_BACKEND_URL", .. }));
}

#[test]
fn bad_port_is_invalid() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("AUTH_BACKEND_URL", "http://localhost:4000"),
        ("PORT", "not-a-port"),
    ]))
    .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "not-a-port".to_owned() });
}

#[test]
fn from_env_reads_process_environment() {
    unsafe {
        std::env::set_var("AUTH_BACKEND_URL", "http://127.0.0.1:4100");
        std::env::remove_var("PORT");
        std::env::remove_var("AUTH_PROXY_TIMEOUT_SECS");
    }
    let cfg = ServerConfig::from_env().unwrap();
    assert_eq!(cfg.auth_backend_url, "http://127.0.0.1:4100");
    unsafe { std::env::remove_var("AUTH_BACKEND_URL") };
}
