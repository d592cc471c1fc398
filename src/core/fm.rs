//! Directory reading and entry classification for fie.
//!
//! Provides the [FileEntry] struct which holds everything read from the filesystem
//! for one child of the listed directory, and [EntryKind], the single source of truth
//! for which type tag an entry gets.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};

/// The type of an entry as shown in the first column of a listing.
///
/// Anything that is neither a symlink nor a directory (regular files, devices,
/// sockets, fifos) is [EntryKind::Other] and is displayed like a regular file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Symlink,
    Directory,
    Other,
}

impl EntryKind {
    /// Classifies an entry. A symlink always wins, even when it points at a directory,
    /// then directories, then everything else.
    pub fn classify<P: EntryProbe + ?Sized>(probe: &P) -> Self {
        if probe.is_symlink() {
            EntryKind::Symlink
        } else if probe.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::Other
        }
    }

    /// The single character tag printed before the permissions.
    #[inline]
    pub fn tag(self) -> char {
        match self {
            EntryKind::Symlink => 'l',
            EntryKind::Directory => 'd',
            EntryKind::Other => '.',
        }
    }
}

/// Type predicates the classifier needs from a filesystem entry.
///
/// `is_dir` and `is_file` describe what the entry resolves to, so a symlink to a
/// directory answers `true` to both `is_symlink` and `is_dir`.
pub trait EntryProbe {
    fn is_symlink(&self) -> bool;
    fn is_dir(&self) -> bool;
    fn is_file(&self) -> bool;
}

impl EntryProbe for fs::FileType {
    fn is_symlink(&self) -> bool {
        fs::FileType::is_symlink(self)
    }

    fn is_dir(&self) -> bool {
        fs::FileType::is_dir(self)
    }

    fn is_file(&self) -> bool {
        fs::FileType::is_file(self)
    }
}

/// A single child of the listed directory, as read from the filesystem.
///
/// `metadata` follows symlinks and may be an error if the entry vanished or the link
/// dangles. `link_metadata` is the symlink's own metadata and is only kept for links.
/// `file_type` is `None` when even the entry's type could not be read.
#[derive(Debug)]
pub struct FileEntry {
    name: Box<OsStr>,
    file_type: Option<fs::FileType>,
    metadata: io::Result<Metadata>,
    link_metadata: Option<Metadata>,
    link_target: Option<PathBuf>,
}

impl FileEntry {
    pub fn new(
        name: OsString,
        file_type: Option<fs::FileType>,
        metadata: io::Result<Metadata>,
        link_metadata: Option<Metadata>,
        link_target: Option<PathBuf>,
    ) -> Self {
        FileEntry {
            name: name.into_boxed_os_str(),
            file_type,
            metadata,
            link_metadata,
            link_target,
        }
    }

    /// Reads one entry from its path, without consulting a directory iterator.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let link_md = fs::symlink_metadata(path)?;
        let name = path
            .file_name()
            .map(OsStr::to_os_string)
            .unwrap_or_else(|| path.as_os_str().to_os_string());
        Ok(Self::resolve(name, path, link_md.file_type(), Some(link_md)))
    }

    /// An entry whose type could not be read. It still gets a row, shown as
    /// [EntryKind::Other] with blank metadata columns.
    pub fn unreadable(name: OsString, err: io::Error) -> Self {
        FileEntry::new(name, None, Err(err), None, None)
    }

    fn resolve(
        name: OsString,
        path: &Path,
        file_type: fs::FileType,
        own_md: Option<Metadata>,
    ) -> Self {
        if file_type.is_symlink() {
            FileEntry::new(
                name,
                Some(file_type),
                fs::metadata(path),
                own_md,
                fs::read_link(path).ok(),
            )
        } else {
            let metadata = match own_md {
                Some(md) => Ok(md),
                None => fs::symlink_metadata(path),
            };
            FileEntry::new(name, Some(file_type), metadata, None, None)
        }
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    #[inline]
    pub fn name_str(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }

    #[inline]
    pub fn kind(&self) -> EntryKind {
        EntryKind::classify(self)
    }

    /// Metadata of what the entry resolves to.
    #[inline]
    pub fn metadata(&self) -> Result<&Metadata, io::ErrorKind> {
        self.metadata.as_ref().map_err(io::Error::kind)
    }

    /// The symlink's own metadata. `None` for anything that is not a link.
    #[inline]
    pub fn link_metadata(&self) -> Option<&Metadata> {
        self.link_metadata.as_ref()
    }

    #[inline]
    pub fn link_target(&self) -> Option<&Path> {
        self.link_target.as_deref()
    }
}

impl EntryProbe for FileEntry {
    fn is_symlink(&self) -> bool {
        self.file_type.is_some_and(|ft| ft.is_symlink())
    }

    fn is_dir(&self) -> bool {
        match &self.metadata {
            Ok(md) => md.is_dir(),
            Err(_) => self.file_type.is_some_and(|ft| ft.is_dir()),
        }
    }

    fn is_file(&self) -> bool {
        match &self.metadata {
            Ok(md) => md.is_file(),
            Err(_) => self.file_type.is_some_and(|ft| ft.is_file()),
        }
    }
}

/// Reads the immediate children of `path`.
///
/// Failing to open the directory is an error. An entry the iterator cannot yield is
/// skipped with a warning; an entry whose type cannot be read is kept with blank
/// metadata. The directory handle is released when this returns.
/// # Returns
/// A Result containing a vector of FileEntry structs or an std::io::Error
pub fn read_entries(path: &Path) -> io::Result<Vec<FileEntry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::warn!("skipping unreadable entry in {}: {}", path.display(), e);
                continue;
            }
        };

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) => {
                tracing::debug!("no file type for {:?}: {}", entry.file_name(), e);
                entries.push(FileEntry::unreadable(entry.file_name(), e));
                continue;
            }
        };

        let own_md = if ft.is_symlink() {
            entry.metadata().ok()
        } else {
            None
        };
        entries.push(FileEntry::resolve(entry.file_name(), &entry.path(), ft, own_md));
    }
    Ok(entries)
}
