// src/store/entry.rs
//! In-memory representation of a single decrypted store entry
//!
//! The pass entry format is semi-structured: the first line is the
//! secret, everything after it is optional `key: value` metadata.

use std::collections::BTreeMap;

use crate::consts::{FIELD_NOTES, FIELD_URL, FIELD_USER, SKIP_MARKER};

/// One parsed password-store entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassEntry {
    /// Full store key, e.g. `web/dev/github`.
    pub name: String,
    /// Last segment of the store key.
    pub title: String,
    /// Directory segments above the entry; empty for top-level entries.
    pub groups: Vec<String>,
    /// First line of the decrypted body, taken verbatim.
    pub secret: String,
    pub url: String,
    pub user: String,
    pub notes: String,
    /// Every non-reserved `key: value` pair. Duplicate keys overwrite.
    pub custom: BTreeMap<String, String>,
}

impl PassEntry {
    /// Parse the decrypted body of the entry named `name`.
    pub fn parse(name: &str, text: &str) -> Self {
        let mut segments: Vec<&str> = name.split('/').collect();
        let title = segments.pop().unwrap_or_default().to_owned();
        let groups = segments.into_iter().map(str::to_owned).collect();

        let mut lines = text.lines();
        let secret = lines.next().unwrap_or_default().to_owned();

        let mut entry = PassEntry {
            name: name.to_owned(),
            title,
            groups,
            secret,
            ..Default::default()
        };

        for line in lines {
            let Some((key, value)) = split_field(line) else {
                continue;
            };
            match key {
                FIELD_URL => entry.url = value.to_owned(),
                FIELD_USER => entry.user = value.to_owned(),
                FIELD_NOTES => entry.notes = value.to_owned(),
                _ => {
                    entry.custom.insert(key.to_owned(), value.to_owned());
                }
            }
        }

        entry
    }
}

/// Accept only `key: value` lines; a colon at position zero is not a
/// separator. Both halves are trimmed.
fn split_field(line: &str) -> Option<(&str, &str)> {
    if line.is_empty() || line == SKIP_MARKER {
        return None;
    }
    let colon = line.find(':')?;
    if colon == 0 {
        return None;
    }
    let (key, rest) = line.split_at(colon);
    Some((key.trim(), rest[1..].trim()))
}
