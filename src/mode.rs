//! Mode bit decoding: entry kind, permission string and color class.
//!
//! Works on raw `st_mode` values so every function here is pure and the
//! same on every platform.

use crate::types::{ColorClass, FileKind};

const S_IFMT: u32 = 0o170_000;
const S_IFDIR: u32 = 0o040_000;
const S_IFLNK: u32 = 0o120_000;
const S_IFREG: u32 = 0o100_000;

/// Owner, group and other execute bits
const ANY_EXEC: u32 = 0o111;

/// Permission bits in display order: owner rwx, group rwx, other rwx
const PERMISSION_BITS: [(u32, char); 9] = [
    (0o400, 'r'),
    (0o200, 'w'),
    (0o100, 'x'),
    (0o040, 'r'),
    (0o020, 'w'),
    (0o010, 'x'),
    (0o004, 'r'),
    (0o002, 'w'),
    (0o001, 'x'),
];

/// Decode the file type from mode bits
pub fn file_kind(mode: u32) -> FileKind {
    match mode & S_IFMT {
        S_IFDIR => FileKind::Directory,
        S_IFLNK => FileKind::Symlink,
        S_IFREG => FileKind::Regular,
        _ => FileKind::Other,
    }
}

/// Type character followed by the nine rwx characters
pub fn permission_string(mode: u32) -> String {
    let mut perms = String::with_capacity(10);
    perms.push(file_kind(mode).type_char());
    for (bit, ch) in PERMISSION_BITS {
        perms.push(if mode & bit != 0 { ch } else { '-' });
    }
    perms
}

/// Pick the color class for an entry.
///
/// Directories win over links, links over regular files. A broken link is
/// always `BrokenLink`. Regular files are `Executable` if any execute bit is
/// set, then `Hidden` for dot-names, else `Normal`.
pub fn classify(mode: u32, name: &str, is_broken_link: bool) -> ColorClass {
    match file_kind(mode) {
        FileKind::Directory => ColorClass::Directory,
        FileKind::Symlink if is_broken_link => ColorClass::BrokenLink,
        FileKind::Symlink => ColorClass::Link,
        FileKind::Regular if mode & ANY_EXEC != 0 => ColorClass::Executable,
        FileKind::Regular if name.starts_with('.') => ColorClass::Hidden,
        FileKind::Regular => ColorClass::Normal,
        FileKind::Other => ColorClass::Plain,
    }
}
