use super::*;
use crate::config::{ADMIN_HOME_PATH, USER_HOME_PATH};

fn paths(entries: &[&RouteEntry]) -> Vec<String> {
    entries.iter().map(|e| e.path.clone()).collect()
}

#[test]
fn bundled_manifest_parses_cleanly() {
    let table = route_table();
    assert_eq!(table.len(), 3);
    assert!(table.iter().all(|e| e.access.allowed().is_ok()));
}

#[test]
fn bundled_manifest_covers_role_homes() {
    let table = route_table();
    assert!(access_for(&table, ADMIN_HOME_PATH).permits(Some(&Role::Admin)));
    assert!(access_for(&table, USER_HOME_PATH).permits(Some(&Role::User)));
}

#[test]
fn visible_routes_for_admin_and_user() {
    let table = route_table();
    assert_eq!(paths(&visible_routes(&table, Some(&Role::Admin))), vec!["/admin/dashboard", "/account"]);
    assert_eq!(paths(&visible_routes(&table, Some(&Role::User))), vec!["/user/status", "/account"]);
}

#[test]
fn visible_routes_without_role_only_shows_unrestricted() {
    let table = parse_manifest(
        r#"[{"path":"/verify","label":"Verify"},{"path":"/admin/dashboard","label":"Dashboard","allowedRoles":["admin"]}]"#,
    );
    assert_eq!(paths(&visible_routes(&table, None)), vec!["/verify"]);
}

#[test]
fn malformed_entry_is_hidden_and_denied() {
    let table = parse_manifest(r#"[{"path":"/reports","label":"Reports","allowedRoles":"admin"}]"#);
    assert_eq!(table.len(), 1);
    assert!(visible_routes(&table, Some(&Role::Admin)).is_empty());
    assert!(access_for(&table, "/reports").allowed().is_err());
}

#[test]
fn unknown_path_is_denied() {
    let table = route_table();
    assert!(!access_for(&table, "/nowhere").permits(Some(&Role::Admin)));
}

#[test]
fn unreadable_manifest_yields_no_routes() {
    assert!(parse_manifest("not json").is_empty());
}
