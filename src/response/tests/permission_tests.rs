//! Unit tests for permissions and the permission set.

use crate::response::domain::{Permission, PermissionSet};
use rstest::rstest;

#[rstest]
#[case(Permission::Name, "NAME")]
#[case(Permission::DeviceCoarseLocation, "DEVICE_COARSE_LOCATION")]
#[case(Permission::DevicePreciseLocation, "DEVICE_PRECISE_LOCATION")]
fn permission_wire_names(#[case] permission: Permission, #[case] expected: &str) {
    assert_eq!(permission.as_str(), expected);
    assert_eq!(permission.to_string(), expected);
    assert_eq!(Permission::try_from(expected), Ok(permission));
    assert_eq!(
        serde_json::to_value(permission).expect("serialize"),
        serde_json::Value::from(expected)
    );
}

#[rstest]
#[case("")]
#[case("name")]
#[case("LOCATION")]
fn permission_rejects_unknown_names(#[case] input: &str) {
    let err = Permission::try_from(input).expect_err("unknown permission should fail");
    assert_eq!(err.to_string(), format!("invalid permission: '{input}'"));
}

#[rstest]
fn insert_reports_whether_set_changed() {
    let mut set = PermissionSet::default();
    assert!(set.insert(Permission::Name));
    assert!(!set.insert(Permission::Name));
    assert_eq!(set.as_slice(), [Permission::Name]);
}

#[rstest]
fn insert_preserves_first_request_order() {
    let mut set = PermissionSet::default();
    set.insert(Permission::DevicePreciseLocation);
    set.insert(Permission::Name);
    set.insert(Permission::DevicePreciseLocation);
    set.insert(Permission::DeviceCoarseLocation);
    assert_eq!(
        set.as_slice(),
        [
            Permission::DevicePreciseLocation,
            Permission::Name,
            Permission::DeviceCoarseLocation,
        ]
    );
    assert!(set.contains(Permission::Name));
}

#[rstest]
fn rehydrated_duplicates_collapse_on_next_insert() {
    let mut set: PermissionSet =
        serde_json::from_str(r#"{"permissions": ["NAME", "NAME", "DEVICE_COARSE_LOCATION"]}"#)
            .expect("deserialize");
    set.insert(Permission::DeviceCoarseLocation);
    assert_eq!(
        set.as_slice(),
        [Permission::Name, Permission::DeviceCoarseLocation]
    );
}

#[rstest]
fn insert_reports_new_permission_on_set_with_repeats() {
    let mut set: PermissionSet =
        serde_json::from_str(r#"{"permissions": ["NAME", "NAME"]}"#).expect("deserialize");
    assert!(set.insert(Permission::DeviceCoarseLocation));
    assert!(!set.insert(Permission::Name));
    assert_eq!(
        set.as_slice(),
        [Permission::Name, Permission::DeviceCoarseLocation]
    );
}
