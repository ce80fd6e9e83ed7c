// src/config/mod.rs
//! Configuration system for pass2kdbx
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, Config};

mod app;
mod defaults;
