// src/kdbx/writer.rs
//! Build and save the destination KeePass2 database
//!
//! The container format, key derivation and serialization are owned by
//! the keepass crate; this module only maps parsed store entries onto
//! its group/entry tree.

use std::fs::File;
use std::path::{Path, PathBuf};

use keepass::config::DatabaseConfig;
use keepass::db::{Entry, Group, Node, Value};
use keepass::{Database, DatabaseKey};
use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::progress::Progress;
use crate::store::PassEntry;

pub struct KdbxWriter {
    db: Database,
    password: String,
    destination: PathBuf,
    entry_count: usize,
}

impl KdbxWriter {
    /// Prepare a fresh KDBX4 database for `destination`.
    ///
    /// Refuses to target an existing file unless `overwrite` is set;
    /// with it, the old file is replaced on save.
    pub fn create<P: AsRef<Path>>(destination: P, password: &str, overwrite: bool) -> Result<Self> {
        let destination = destination.as_ref().to_path_buf();
        if destination.exists() && !overwrite {
            return Err(ConvertError::DestinationExists(destination));
        }

        let mut db = Database::new(DatabaseConfig::default());
        db.meta.database_name = destination
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_owned);

        Ok(Self {
            db,
            password: password.to_owned(),
            destination,
            entry_count: 0,
        })
    }

    /// Add one store entry, creating any missing groups along its chain.
    pub fn add_entry(&mut self, source: &PassEntry) {
        let group = group_for(&mut self.db.root, &source.groups);

        let mut entry = Entry::new();
        entry
            .fields
            .insert("Title".to_owned(), Value::Unprotected(source.title.clone()));
        entry
            .fields
            .insert("UserName".to_owned(), Value::Unprotected(source.user.clone()));
        entry.fields.insert(
            "Password".to_owned(),
            Value::Protected(source.secret.as_bytes().into()),
        );
        entry
            .fields
            .insert("URL".to_owned(), Value::Unprotected(source.url.clone()));
        entry
            .fields
            .insert("Notes".to_owned(), Value::Unprotected(source.notes.clone()));
        for (key, value) in &source.custom {
            entry
                .fields
                .insert(key.clone(), Value::Unprotected(value.clone()));
        }

        group.children.push(Node::Entry(entry));
        self.entry_count += 1;
    }

    /// Add every entry, reporting `(done, total)` after each one.
    pub fn populate<P: Progress>(&mut self, entries: &[PassEntry], progress: &mut P) {
        let total = entries.len();
        debug!(total, destination = %self.destination.display(), "populating keepass database");
        for (idx, entry) in entries.iter().enumerate() {
            self.add_entry(entry);
            progress.update(idx + 1, total);
        }
    }

    /// Serialize the database to the destination path.
    pub fn save(&self) -> Result<()> {
        let mut file = File::create(&self.destination)?;
        self.db
            .save(&mut file, DatabaseKey::new().with_password(&self.password))?;
        Ok(())
    }

    /// Number of entries written so far (groups excluded).
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// Walk `chain` down from `root`, creating missing groups. Sibling
/// group names are assumed unique, so the first match wins.
fn group_for<'a>(root: &'a mut Group, chain: &[String]) -> &'a mut Group {
    let mut current = root;
    for name in chain {
        let idx = match current
            .children
            .iter()
            .position(|node| matches!(node, Node::Group(group) if group.name == *name))
        {
            Some(idx) => idx,
            None => {
                current.children.push(Node::Group(Group::new(name)));
                current.children.len() - 1
            }
        };
        let parent = current;
        current = match &mut parent.children[idx] {
            Node::Group(group) => group,
            Node::Entry(_) => unreachable!("position matched a group node"),
        };
    }
    current
}
