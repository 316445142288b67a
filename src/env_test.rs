use super::*;
use serial_test::serial;

#[test]
#[serial]
fn test_get_existing_var() {
    std::env::set_var(TABSYNC_LOG, "tabsync=debug");
    assert_eq!(EnvVar::get(TABSYNC_LOG), Some("tabsync=debug".to_string()));
    std::env::remove_var(TABSYNC_LOG);
}

#[test]
#[serial]
fn test_get_empty_var() {
    std::env::set_var(TABSYNC_LOG, "");
    assert_eq!(EnvVar::get(TABSYNC_LOG), None);
    std::env::remove_var(TABSYNC_LOG);
}

#[test]
fn test_get_nonexistent_var() {
    assert_eq!(EnvVar::get("TABSYNC_NONEXISTENT_VAR_12345"), None);
}
