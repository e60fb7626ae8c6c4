use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False", " OFF "] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_garbage() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// ServerConfig::from_lookup
// =============================================================================

#[test]
fn missing_database_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
}

#[test]
fn blank_database_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "   ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "DATABASE_URL" });
}

#[test]
fn defaults_apply_when_only_database_url_is_set() {
    let config = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/hb")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/hb");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
    assert_eq!(config.session_ttl_hours, DEFAULT_SESSION_TTL_HOURS);
    assert!(!config.echo_login_codes);
    assert!(!config.cookie_secure);
    assert_eq!(config.housekeeping_interval_secs, DEFAULT_HOUSEKEEPING_INTERVAL_SECS);
}

#[test]
fn overrides_are_parsed() {
    let config = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/hb"),
        ("PORT", "8080"),
        ("DB_MAX_CONNECTIONS", "12"),
        ("SESSION_TTL_HOURS", "24"),
        ("LOGIN_CODE_ECHO", "yes"),
        ("COOKIE_SECURE", "1"),
        ("HOUSEKEEPING_INTERVAL_SECS", "60"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.db_max_connections, 12);
    assert_eq!(config.session_ttl_hours, 24);
    assert!(config.echo_login_codes);
    assert!(config.cookie_secure);
    assert_eq!(config.housekeeping_interval_secs, 60);
}

#[test]
fn invalid_port_reports_variable_and_value() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://db/hb"), ("PORT", "http")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn session_ttl_must_be_positive() {
    for raw in ["0", "-5"] {
        let err = ServerConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/hb"),
            ("SESSION_TTL_HOURS", raw),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Invalid { var: "SESSION_TTL_HOURS", value: raw.to_owned() });
    }
}

#[test]
fn session_ttl_beyond_i32_is_invalid() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/hb"),
        ("SESSION_TTL_HOURS", "9999999999"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "SESSION_TTL_HOURS", .. }));
}

#[test]
fn invalid_bool_reports_variable() {
    let err = ServerConfig::from_lookup(lookup_from(&[
        ("DATABASE_URL", "postgres://db/hb"),
        ("COOKIE_SECURE", "sometimes"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COOKIE_SECURE", .. }));
}

#[test]
fn config_error_messages_name_the_variable() {
    let err = ConfigError::Missing { var: "DATABASE_URL" };
    assert!(err.to_string().contains("DATABASE_URL"));
}
