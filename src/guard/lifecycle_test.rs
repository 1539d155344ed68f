use super::*;

#[test]
fn new_lifecycle_is_mounted_and_accepts_results() {
    let lc = GuardLifecycle::new();
    assert!(lc.is_mounted());
    assert!(!lc.is_refreshing());
    assert!(lc.accepts_check_result());
}

#[test]
fn begin_refresh_succeeds_once() {
    let lc = GuardLifecycle::new();
    assert!(lc.begin_refresh());
    assert!(!lc.begin_refresh());
    assert!(lc.is_refreshing());
}

#[test]
fn scheduled_reload_discards_late_check_result() {
    let lc = GuardLifecycle::new();
    assert!(lc.begin_refresh());
    assert!(!lc.accepts_check_result());
}

#[test]
fn unmount_blocks_refresh_and_results() {
    let lc = GuardLifecycle::new();
    lc.unmount();
    assert!(!lc.is_mounted());
    assert!(!lc.begin_refresh());
    assert!(!lc.accepts_check_result());
}

#[test]
fn clones_share_state() {
    let lc = GuardLifecycle::new();
    let task_handle = lc.clone();
    lc.unmount();
    assert!(!task_handle.is_mounted());
}
