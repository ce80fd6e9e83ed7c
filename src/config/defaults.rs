// src/config/defaults.rs
use crate::config::app::{Paths, Tools};

pub const DEFAULT_OUTPUT: &str = "pass.kdbx";
pub const DEFAULT_PASS_BIN: &str = "pass";
pub const DEFAULT_STORE_DIR_NAME: &str = ".password-store";

pub fn default_store_dir() -> String {
    dirs::home_dir()
        .map(|home| home.join(DEFAULT_STORE_DIR_NAME))
        .map(|path| path.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_STORE_DIR_NAME.to_string())
}

pub fn default_paths() -> Paths {
    Paths {
        store_dir: default_store_dir(),
        output: DEFAULT_OUTPUT.into(),
    }
}

pub fn default_tools() -> Tools {
    Tools {
        pass_bin: DEFAULT_PASS_BIN.into(),
    }
}
