/*!
 * lstable - list directory contents as an aligned table
 *
 * Reads per-entry metadata (permissions, link count, owner, group, size,
 * modification time, symlink target), sorts entries by name ignoring case
 * and renders them as a table, optionally colored by entry type.
 */

pub mod config;
pub mod error;
pub mod identity;
pub mod lister;
pub mod mode;
pub mod palette;
pub mod report;
pub mod scanner;
pub mod terminal;
pub mod types;


// Re-export main components for easier access
pub use config::{Args, ColorMode, Config};
pub use error::{ListerError, Result};
pub use identity::{IdentityResolver, NumericIdentities, SystemIdentities};
pub use lister::{ListRequest, ListStatus, Lister};
pub use palette::Palette;
pub use report::{FormattedRow, Renderer};
pub use scanner::Scanner;
pub use terminal::{ColorCapability, TerminalProbe};
pub use types::{ColorClass, DirectoryEntry, FileKind, Identity};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
