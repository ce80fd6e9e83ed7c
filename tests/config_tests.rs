// tests/config_tests.rs
//! Global config — env overrides
//!
//! The config is cached in a OnceLock, so this binary holds exactly one
//! test that touches load().

use serial_test::serial;

#[test]
#[serial]
fn env_overrides_replace_configured_values() {
    std::env::remove_var("P2K_CONFIG");
    std::env::set_var("P2K_STORE_DIR", "/tmp/p2k-test-store");
    std::env::set_var("P2K_OUTPUT", "/tmp/p2k-test-out.kdbx");
    std::env::set_var("P2K_PASS_BIN", "/tmp/fake-pass");

    let config = pass2kdbx::load_config();
    assert_eq!(config.paths.store_dir, "/tmp/p2k-test-store");
    assert_eq!(config.paths.output, "/tmp/p2k-test-out.kdbx");
    assert_eq!(config.tools.pass_bin, "/tmp/fake-pass");
}
