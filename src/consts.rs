// src/consts.rs
//! Shared constants

/// File extension of encrypted entries inside a password store.
pub const STORE_EXTENSION: &str = "gpg";

/// Lines equal to this marker are skipped when parsing entry bodies.
pub const SKIP_MARKER: &str = "---";

/// Reserved field names with dedicated slots on an entry.
pub const FIELD_URL: &str = "url";
pub const FIELD_USER: &str = "user";
pub const FIELD_NOTES: &str = "notes";
