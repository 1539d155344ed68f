use serde_json::json;

use super::*;

#[test]
fn unrestricted_permits_any_role_including_none() {
    let allowed = AllowedRoles::Unrestricted;
    assert!(allowed.permits(Some(&Role::Admin)));
    assert!(allowed.permits(Some(&Role::Other("x".to_owned()))));
    assert!(allowed.permits(None));
}

#[test]
fn only_with_empty_set_is_unrestricted() {
    assert_eq!(AllowedRoles::only(Vec::new()), AllowedRoles::Unrestricted);
}

#[test]
fn only_permits_listed_roles() {
    let allowed = AllowedRoles::only([Role::Admin]);
    assert!(allowed.permits(Some(&Role::Admin)));
    assert!(!allowed.permits(Some(&Role::User)));
    assert!(!allowed.permits(None));
}

#[test]
fn from_value_accepts_string_array() {
    let allowed = AllowedRoles::from_value(&json!(["admin", "user"])).unwrap();
    assert_eq!(allowed, AllowedRoles::only([Role::Admin, Role::User]));
}

#[test]
fn from_value_null_and_empty_are_unrestricted() {
    assert_eq!(AllowedRoles::from_value(&Value::Null), Ok(AllowedRoles::Unrestricted));
    assert_eq!(AllowedRoles::from_value(&json!([])), Ok(AllowedRoles::Unrestricted));
}

#[test]
fn from_value_rejects_bare_string() {
    assert_eq!(
        AllowedRoles::from_value(&json!("admin")),
        Err(RoleConfigError::NotAnArray("\"admin\"".to_owned()))
    );
}

#[test]
fn from_value_rejects_non_string_entry() {
    assert_eq!(
        AllowedRoles::from_value(&json!(["admin", 7])),
        Err(RoleConfigError::NonStringEntry { index: 1 })
    );
}

#[test]
fn unknown_role_names_restrict_rather_than_open() {
    let allowed = AllowedRoles::from_value(&json!(["auditor"])).unwrap();
    assert!(!allowed.permits(Some(&Role::Admin)));
    assert!(allowed.permits(Some(&Role::Other("auditor".to_owned()))));
}

#[test]
fn route_access_absent_value_is_unrestricted() {
    assert_eq!(RouteAccess::from_value(None), RouteAccess::default());
    assert!(RouteAccess::default().permits(Some(&Role::User)));
}

#[test]
fn malformed_route_access_permits_nobody() {
    let access = RouteAccess::from_value(Some(&json!({"roles": "admin"})));
    assert!(access.allowed().is_err());
    assert!(!access.permits(Some(&Role::Admin)));
    assert!(!access.permits(None));
}

#[test]
fn missing_route_access_permits_nobody() {
    let access = RouteAccess::missing("/reports");
    assert_eq!(
        access.allowed(),
        Err(&RoleConfigError::MissingRoute("/reports".to_owned()))
    );
    assert!(!access.permits(Some(&Role::Admin)));
}
