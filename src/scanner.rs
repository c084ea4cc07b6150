/*!
 * Path resolution and metadata extraction
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rayon::prelude::*;

use crate::error::{ListerError, Result};
use crate::identity::IdentityResolver;
use crate::types::DirectoryEntry;

/// A name queued for listing, plus where to stat it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Name shown in the table
    pub name: String,
    /// Path handed to lstat
    pub path: PathBuf,
}

/// Resolves paths into candidates and reads their metadata
pub struct Scanner {
    identities: Box<dyn IdentityResolver>,
}

impl Scanner {
    /// Create a new scanner using `identities` for owner and group names
    pub fn new(identities: Box<dyn IdentityResolver>) -> Self {
        Self { identities }
    }

    /// Expand `path` into the entries to list.
    ///
    /// A directory yields its immediate children, named by their file name.
    /// Anything else yields itself under `display`, even if it does not
    /// exist; that failure surfaces later when the entry is fetched.
    pub fn resolve(&self, path: &Path, display: &str) -> Result<Vec<Candidate>> {
        if !path.is_dir() {
            return Ok(vec![Candidate {
                name: display.to_string(),
                path: path.to_path_buf(),
            }]);
        }

        let read_dir = fs::read_dir(path).map_err(|e| {
            log::debug!("cannot read directory {}: {}", path.display(), e);
            ListerError::entry_not_found(display, e)
        })?;

        let mut candidates = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ListerError::entry_not_found(display, e))?;
            candidates.push(Candidate {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
            });
        }
        Ok(candidates)
    }

    /// Fetch metadata for every candidate, keeping input order
    pub fn scan(&self, candidates: &[Candidate]) -> Vec<Result<DirectoryEntry>> {
        candidates
            .par_iter()
            .map(|candidate| self.fetch(candidate))
            .collect()
    }

    /// Read one entry without following a final symlink
    pub fn fetch(&self, candidate: &Candidate) -> Result<DirectoryEntry> {
        let path = candidate.path.as_path();
        let metadata = fs::symlink_metadata(path).map_err(|e| {
            log::debug!("lstat {} failed: {}", path.display(), e);
            ListerError::entry_not_found(&candidate.name, e)
        })?;

        let (symlink_target, is_broken_link) = if metadata.file_type().is_symlink() {
            let target = fs::read_link(path)
                .map_err(|e| ListerError::entry_not_found(&candidate.name, e))?;
            // exists() follows the link
            (Some(target.to_string_lossy().into_owned()), !path.exists())
        } else {
            (None, false)
        };

        let raw = RawStat::from_metadata(&metadata);

        Ok(DirectoryEntry {
            name: candidate.name.clone(),
            raw_mode: raw.mode,
            link_count: raw.nlink,
            owner: self.identities.user(raw.uid),
            group: self.identities.group(raw.gid),
            size_bytes: metadata.len(),
            modified_time: raw.mtime,
            symlink_target,
            is_broken_link,
        })
    }
}

/// Sort candidates by name, ignoring case
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by_cached_key(|c| c.name.to_lowercase());
}

/// The stat fields not exposed portably by `fs::Metadata`
struct RawStat {
    mode: u32,
    nlink: u64,
    uid: u32,
    gid: u32,
    mtime: i64,
}

impl RawStat {
    #[cfg(unix)]
    fn from_metadata(metadata: &fs::Metadata) -> Self {
        use std::os::unix::fs::MetadataExt;

        Self {
            mode: metadata.mode(),
            nlink: metadata.nlink(),
            uid: metadata.uid(),
            gid: metadata.gid(),
            mtime: metadata.mtime(),
        }
    }

    #[cfg(not(unix))]
    fn from_metadata(metadata: &fs::Metadata) -> Self {
        use std::time::UNIX_EPOCH;

        let file_type = metadata.file_type();
        let kind = if file_type.is_dir() {
            0o040_000
        } else if file_type.is_symlink() {
            0o120_000
        } else if file_type.is_file() {
            0o100_000
        } else {
            0
        };
        let perms = if metadata.permissions().readonly() {
            0o444
        } else {
            0o644
        };
        let mtime = metadata
            .modified()
            .ok()
            .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
            .map_or(0, epoch_secs);

        Self {
            mode: kind | perms,
            nlink: 1,
            uid: 0,
            gid: 0,
            mtime,
        }
    }
}

/// Whole seconds of `elapsed`, saturating at `i64::MAX`
#[cfg_attr(unix, allow(dead_code))]
fn epoch_secs(elapsed: Duration) -> i64 {
    i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX)
}
