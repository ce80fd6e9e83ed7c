// tests/common.rs
//! Test utilities — fake password stores and stub decrypt commands
//!
//! The stub scripts stand in for `pass`, so tests never shell out to
//! gpg or touch a real store.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write a fake encrypted entry under `root`. The stub decrypt commands
/// print the file as-is, so bodies are stored in cleartext.
#[allow(dead_code)]
pub fn write_entry(root: &Path, name: &str, body: &str) {
    let path = root.join(format!("{name}.gpg"));
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create entry parent dirs");
    }
    fs::write(path, body).expect("write entry file");
}

#[allow(dead_code)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).expect("write stub script");
    let mut perms = fs::metadata(&path).expect("stat stub script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("chmod stub script");
    path
}

/// Stub `pass` that "decrypts" by printing the entry file.
#[allow(dead_code)]
pub fn fake_pass_bin(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-pass",
        "#!/bin/sh\n\
         [ \"$1\" = \"show\" ] || exit 2\n\
         exec cat \"$PASSWORD_STORE_DIR/$2.gpg\"\n",
    )
}

/// Stub `pass` that always fails, like a store the agent cannot unlock.
#[allow(dead_code)]
pub fn failing_pass_bin(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "failing-pass",
        "#!/bin/sh\n\
         echo 'gpg: decryption failed: No secret key' >&2\n\
         exit 2\n",
    )
}

/// Stub `pass` that requires the expected passphrase on stdin, the way
/// loopback-pinentry gpg behaves in quick mode.
#[allow(dead_code)]
pub fn passphrase_pass_bin(dir: &Path, expected: &str) -> PathBuf {
    write_script(
        dir,
        "passphrase-pass",
        &format!(
            "#!/bin/sh\n\
             read -r passphrase\n\
             [ \"$passphrase\" = \"{expected}\" ] || {{ echo 'gpg: bad passphrase' >&2; exit 2; }}\n\
             [ \"$1\" = \"show\" ] || exit 2\n\
             exec cat \"$PASSWORD_STORE_DIR/$2.gpg\"\n"
        ),
    )
}
