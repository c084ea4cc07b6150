/*!
 * Core types for the lstable listing pipeline
 */

use std::fmt;

use strum::{Display, EnumIter};

/// Kind of filesystem entry, derived from the mode bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Directory
    Directory,
    /// Symbolic link
    Symlink,
    /// Regular file
    Regular,
    /// Device, socket, fifo or anything else
    Other,
}

impl FileKind {
    /// Leading character of the permission string
    pub fn type_char(self) -> char {
        match self {
            Self::Directory => 'd',
            Self::Symlink => 'l',
            Self::Regular | Self::Other => '-',
        }
    }
}

/// Semantic appearance of an entry name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum ColorClass {
    Directory,
    Link,
    BrokenLink,
    Executable,
    Hidden,
    Normal,
    /// Special files; never styled
    Plain,
}

/// Outcome of mapping a numeric owner or group id to a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// The identity database knew the id
    Named(String),
    /// Lookup failed or no database exists; display the id itself
    Numeric(u32),
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Numeric(id) => write!(f, "{}", id),
        }
    }
}

/// Metadata snapshot of one listed entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Name as given on the command line or read from the directory
    pub name: String,
    /// Raw type and permission bits
    pub raw_mode: u32,
    /// Hard link count
    pub link_count: u64,
    /// Owner
    pub owner: Identity,
    /// Group
    pub group: Identity,
    /// Size in bytes
    pub size_bytes: u64,
    /// Modification time in seconds since the epoch
    pub modified_time: i64,
    /// Link target, only for symlinks
    pub symlink_target: Option<String>,
    /// Symlink whose target does not exist
    pub is_broken_link: bool,
}

impl DirectoryEntry {
    /// Entry kind from the mode bits
    pub fn kind(&self) -> FileKind {
        crate::mode::file_kind(self.raw_mode)
    }

    /// `ls -l` style permission string, e.g. `drwxr-xr-x`
    pub fn permissions(&self) -> String {
        crate::mode::permission_string(self.raw_mode)
    }

    /// Color class used when the name is rendered
    pub fn color_class(&self) -> ColorClass {
        crate::mode::classify(self.raw_mode, &self.name, self.is_broken_link)
    }
}
