//! Listing orchestration: validate the path, read its children, build and sort records.
//!
//! Two early exits exist: a missing path is an error, and a directory without
//! children yields [Listing::Empty]. Nothing is rendered here.

use crate::core::fm::read_entries;
use crate::core::record::{EntryRecord, sort_records};
use crate::error::{FieError, Result};

use std::fs;
use std::io;
use std::path::Path;

/// Options that change how records are built.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListOptions {
    /// Append `-> target` to symlink names.
    pub symlink_target: bool,
}

/// Outcome of listing a directory.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Empty,
    Records(Vec<EntryRecord>),
}

impl Listing {
    pub fn records(&self) -> &[EntryRecord] {
        match self {
            Listing::Empty => &[],
            Listing::Records(records) => records,
        }
    }
}

/// Lists the immediate children of `path`, sorted by name.
///
/// # Errors
/// [FieError::PathNotFound] if nothing exists at `path`, and
/// [FieError::EnumerationDenied] if it exists but cannot be read as a directory.
pub fn list_dir(path: &Path, options: &ListOptions) -> Result<Listing> {
    match fs::metadata(path) {
        Ok(_) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(FieError::PathNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(FieError::EnumerationDenied {
                path: path.to_path_buf(),
                source,
            });
        }
    }

    let entries = read_entries(path).map_err(|source| FieError::EnumerationDenied {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} entries from {}", entries.len(), path.display());

    if entries.is_empty() {
        return Ok(Listing::Empty);
    }

    let mut records: Vec<EntryRecord> = entries
        .iter()
        .map(|entry| EntryRecord::from_entry(entry, options.symlink_target))
        .collect();
    sort_records(&mut records);

    Ok(Listing::Records(records))
}
