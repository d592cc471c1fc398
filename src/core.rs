//! Core listing logic for fie.
//!
//! This module contains the non-UI pieces of a listing:
//! - [fm]: reading directory entries and classifying them (see [read_entries], [FileEntry], [EntryKind]).
//! - [formatter]: formatting helpers for permissions, sizes, and modification times.
//! - [record]: the [EntryRecord] row built from one entry.
//! - [lister]: validation, enumeration, and sorting (see [list_dir]).
//!
//! Most callers only need [list_dir] and the [Listing] it returns.

pub mod fm;
pub mod formatter;
pub mod lister;
pub mod record;

pub use fm::{EntryKind, EntryProbe, FileEntry, read_entries};
pub use formatter::{format_modified, format_permissions, format_size, permission_bits};
pub use lister::{ListOptions, Listing, list_dir};
pub use record::{EntryRecord, Field, FieldError, sort_records};
