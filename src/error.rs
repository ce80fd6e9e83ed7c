// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("store walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("store contains a non-UTF-8 path: {0}")]
    NonUtf8Path(PathBuf),

    #[error("decrypting entry `{name}` failed: {stderr}")]
    PassCommand { name: String, stderr: String },

    #[error("entry `{0}` did not decrypt to UTF-8 text")]
    Utf8Output(String),

    #[error("destination `{0}` already exists")]
    DestinationExists(PathBuf),

    #[error("keepass database error: {0}")]
    KdbxSave(#[from] keepass::error::DatabaseSaveError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
