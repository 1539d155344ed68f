use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = GuardConfig::default();
    assert_eq!(cfg.api_base, "/api");
    assert_eq!(cfg.refresh_timeout, Duration::from_secs(300));
    assert_eq!(cfg.reload_delay, Duration::from_secs(1));
    assert_eq!(cfg.paths.sign_in, "/sign-in");
    assert_eq!(cfg.paths.admin_home, "/admin/dashboard");
    assert_eq!(cfg.paths.user_home, "/user/status");
}

#[test]
fn from_raw_without_values_equals_default() {
    assert_eq!(GuardConfig::from_raw(None, None, None), GuardConfig::default());
}

#[test]
fn from_raw_trims_trailing_slash_from_api_base() {
    let cfg = GuardConfig::from_raw(Some("https://certs.example.edu/api/"), None, None);
    assert_eq!(cfg.api_base, "https://certs.example.edu/api");
}

#[test]
fn from_raw_blank_api_base_falls_back() {
    let cfg = GuardConfig::from_raw(Some("   "), None, None);
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn from_raw_parses_millisecond_overrides() {
    let cfg = GuardConfig::from_raw(None, Some("60000"), Some("250"));
    assert_eq!(cfg.refresh_timeout, Duration::from_secs(60));
    assert_eq!(cfg.reload_delay, Duration::from_millis(250));
}

#[test]
fn parse_millis_rejects_garbage_and_zero() {
    assert_eq!(parse_millis(Some("soon"), 42), 42);
    assert_eq!(parse_millis(Some("0"), 42), 42);
    assert_eq!(parse_millis(Some("-5"), 42), 42);
    assert_eq!(parse_millis(Some(" 17 "), 42), 17);
}
