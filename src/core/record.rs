//! The formatted, ready-to-render row for one directory entry.

use crate::core::fm::{EntryKind, EntryProbe, FileEntry};
use crate::core::formatter::{format_modified, format_permissions, format_size, permission_bits};

use thiserror::Error;

use std::ffi::OsStr;
use std::io;

/// Why a column of a record has no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The column does not apply to this kind of entry (size of a directory).
    #[error("not applicable")]
    NotApplicable,
    /// The metadata could not be read, e.g. the entry vanished or a link dangles.
    #[error("metadata unavailable: {0}")]
    Unavailable(io::ErrorKind),
}

/// A single column value. Errors render as blanks.
pub type Field = Result<String, FieldError>;

/// One row of the listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    kind: EntryKind,
    permissions: String,
    size: Field,
    modified: Field,
    name: Box<OsStr>,
    display_name: String,
}

impl EntryRecord {
    /// Builds the record for `entry`. Never fails: unreadable metadata only blanks
    /// the affected columns.
    ///
    /// With `symlink_target` set, symlinks display as `name -> target`.
    pub fn from_entry(entry: &FileEntry, symlink_target: bool) -> Self {
        let kind = entry.kind();
        let target_md = entry.metadata();

        let mode = target_md
            .ok()
            .or(entry.link_metadata())
            .map(permission_bits)
            .unwrap_or(0);

        let size = match target_md {
            Ok(md) if entry.is_file() => Ok(format_size(md.len())),
            Ok(_) => Err(FieldError::NotApplicable),
            Err(reason) => Err(FieldError::Unavailable(reason)),
        };

        let modified = match target_md {
            Ok(md) if entry.is_file() || entry.is_dir() => md
                .modified()
                .map(format_modified)
                .map_err(|e| FieldError::Unavailable(e.kind())),
            Ok(_) => Err(FieldError::NotApplicable),
            Err(reason) => Err(FieldError::Unavailable(reason)),
        };

        if let Err(FieldError::Unavailable(reason)) = &modified {
            tracing::debug!("no modification time for {:?}: {}", entry.name(), reason);
        }

        let mut display_name = entry.name_str().into_owned();
        if symlink_target
            && kind == EntryKind::Symlink
            && let Some(target) = entry.link_target()
        {
            display_name.push_str(" -> ");
            display_name.push_str(&target.to_string_lossy());
        }

        EntryRecord {
            kind,
            permissions: format_permissions(mode),
            size,
            modified,
            name: entry.name().into(),
            display_name,
        }
    }

    // Accessors

    #[inline]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    #[inline]
    pub fn permissions(&self) -> &str {
        &self.permissions
    }

    #[inline]
    pub fn size(&self) -> &Field {
        &self.size
    }

    #[inline]
    pub fn modified(&self) -> &Field {
        &self.modified
    }

    /// The raw file name, used for sorting.
    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The name as printed, including the `-> target` suffix when enabled.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// Sorts records by file name, comparing raw bytes (so `C` sorts before `a`).
pub fn sort_records(records: &mut [EntryRecord]) {
    records.sort_by(|a, b| a.name.as_encoded_bytes().cmp(b.name.as_encoded_bytes()));
}
