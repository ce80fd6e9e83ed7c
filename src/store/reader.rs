// src/store/reader.rs
//! Read a pass store and construct an in-memory version of it
//!
//! Discovery walks the store directory for `*.gpg` files; decryption is
//! delegated to the external `pass` tool, one subprocess per entry.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::consts::STORE_EXTENSION;
use crate::error::{ConvertError, Result};
use crate::progress::Progress;
use crate::store::entry::PassEntry;

/// GPG options injected for quick mode, so no interactive pinentry
/// fires. The passphrase itself travels over the child's stdin.
const LOOPBACK_GPG_OPTS: &str = "--pinentry-mode loopback --batch --passphrase-fd 0";

pub struct StoreReader {
    root: PathBuf,
    pass_bin: String,
    passphrase: Option<String>,
}

impl StoreReader {
    /// Reader over the configured default store location.
    pub fn new() -> Self {
        let config = crate::config::load();
        Self {
            root: PathBuf::from(&config.paths.store_dir),
            pass_bin: config.tools.pass_bin.clone(),
            passphrase: None,
        }
    }

    /// Reader over an explicit store root.
    pub fn with_root<P: AsRef<Path>>(root: P) -> Self {
        let config = crate::config::load();
        Self {
            root: root.as_ref().to_path_buf(),
            pass_bin: config.tools.pass_bin.clone(),
            passphrase: None,
        }
    }

    /// Override the decrypt command (default `pass`).
    pub fn pass_bin<S: Into<String>>(mut self, bin: S) -> Self {
        self.pass_bin = bin.into();
        self
    }

    /// Attach a store passphrase; the decrypt subprocess then runs with
    /// loopback pinentry and reads the passphrase from stdin.
    pub fn passphrase<S: Into<String>>(mut self, passphrase: S) -> Self {
        self.passphrase = Some(passphrase.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List the store keys of every entry under the root.
    ///
    /// A store key is the file path relative to the root, extension
    /// stripped, `/`-separated. Order is walk order; no sorting.
    pub fn entry_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(STORE_EXTENSION) {
                continue;
            }
            let relative = path
                .strip_prefix(&self.root)
                .expect("walked path is under the walk root");
            let stem = relative.with_extension("");
            let name = stem
                .to_str()
                .ok_or_else(|| ConvertError::NonUtf8Path(path.to_path_buf()))?;
            names.push(name.replace(std::path::MAIN_SEPARATOR, "/"));
        }
        Ok(names)
    }

    /// Decrypt one entry via `pass show <name>` and return its body.
    pub fn decrypt(&self, name: &str) -> Result<String> {
        trace!(entry = name, "decrypting store entry");

        let mut cmd = Command::new(&self.pass_bin);
        cmd.arg("show")
            .arg(name)
            .env("PASSWORD_STORE_DIR", &self.root)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = if let Some(passphrase) = &self.passphrase {
            cmd.env("PASSWORD_STORE_GPG_OPTS", LOOPBACK_GPG_OPTS);
            cmd.stdin(Stdio::piped());
            let mut child = cmd.spawn()?;
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(passphrase.as_bytes())?;
                stdin.write_all(b"\n")?;
            }
            child.wait_with_output()?
        } else {
            cmd.stdin(Stdio::null());
            cmd.output()?
        };

        if !output.status.success() {
            return Err(ConvertError::PassCommand {
                name: name.to_owned(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| ConvertError::Utf8Output(name.to_owned()))
    }

    /// Decrypt and parse every entry in the store, in discovery order.
    ///
    /// The observer is called with `(done, total)` after each entry.
    /// The first failing entry aborts the whole run.
    pub fn read_all<P: Progress>(&self, progress: &mut P) -> Result<Vec<PassEntry>> {
        let names = self.entry_names()?;
        let total = names.len();
        debug!(total, root = %self.root.display(), "reading password store");

        let mut entries = Vec::with_capacity(total);
        for (idx, name) in names.into_iter().enumerate() {
            let body = self.decrypt(&name)?;
            entries.push(PassEntry::parse(&name, &body));
            progress.update(idx + 1, total);
        }
        Ok(entries)
    }
}

impl Default for StoreReader {
    fn default() -> Self {
        Self::new()
    }
}
