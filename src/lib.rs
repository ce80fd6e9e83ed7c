// src/lib.rs
//! pass2kdbx — convert a pass password store into a KeePass2 database
//!
//! Features:
//! - Recursive discovery of encrypted store entries
//! - Decryption through the external `pass` tool
//! - Group hierarchy derived from the store directory layout
//! - KDBX4 output via the keepass crate

pub mod config;
pub mod consts;
pub mod kdbx;
pub mod progress;
pub mod store;

pub mod error;

// Re-export everything users need at the crate root
pub use config::load as load_config;
pub use error::{ConvertError, Result};
pub use kdbx::KdbxWriter;
pub use progress::{discard, Progress};
pub use store::{PassEntry, StoreReader};
