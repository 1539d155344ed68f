use super::*;

#[test]
fn parse_known_roles() {
    assert_eq!(Role::parse("admin"), Role::Admin);
    assert_eq!(Role::parse(" user "), Role::User);
}

#[test]
fn parse_unknown_role_keeps_name() {
    assert_eq!(Role::parse("registrar"), Role::Other("registrar".to_owned()));
    assert_eq!(Role::parse("registrar").as_str(), "registrar");
}

#[test]
fn role_names_are_case_sensitive() {
    assert_eq!(Role::parse("Admin"), Role::Other("Admin".to_owned()));
}

#[test]
fn serde_uses_plain_strings() {
    let json = serde_json::to_string(&Role::Admin).unwrap();
    assert_eq!(json, "\"admin\"");
    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::User);
}
