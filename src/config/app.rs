// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::sync::OnceLock;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub paths: Paths,
    pub tools: Tools,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Paths {
    pub store_dir: String,
    pub output: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Tools {
    pub pass_bin: String,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var("P2K_CONFIG").unwrap_or_else(|_| "pass2kdbx.toml".to_string());

        let mut conf = if std::path::Path::new(&config_path).exists() {
            let content =
                std::fs::read_to_string(&config_path).expect("Failed to read pass2kdbx.toml");
            toml::from_str(&content).expect("Invalid TOML in pass2kdbx.toml")
        } else {
            tracing::debug!("no config file at {config_path}, using built-in defaults");
            Config {
                paths: default_paths(),
                tools: default_tools(),
            }
        };

        // Env overrides win over both file and defaults
        if let Ok(dir) = std::env::var("P2K_STORE_DIR") {
            conf.paths.store_dir = dir;
        }
        if let Ok(out) = std::env::var("P2K_OUTPUT") {
            conf.paths.output = out;
        }
        if let Ok(bin) = std::env::var("P2K_PASS_BIN") {
            conf.tools.pass_bin = bin;
        }

        conf
    })
}
