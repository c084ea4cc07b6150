/*!
 * The listing pipeline: resolve, fetch, sort, render
 */

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::config::{ColorMode, Config};
use crate::error::Result;
use crate::identity::SystemIdentities;
use crate::palette::Palette;
use crate::report::Renderer;
use crate::scanner::{sort_candidates, Scanner};
use crate::terminal::{ColorCapability, TerminalProbe};

/// What to list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRequest {
    /// The working directory
    CurrentDir,
    /// One path, listed without a header
    Single(PathBuf),
    /// Several paths, each block preceded by a header line
    Many(Vec<PathBuf>),
}

/// Overall outcome of a listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// Every entry was read and rendered
    Success,
    /// At least one entry could not be read
    Failed,
}

impl ListStatus {
    /// Failed if either side failed
    pub fn merge(self, other: ListStatus) -> ListStatus {
        if self == ListStatus::Failed || other == ListStatus::Failed {
            ListStatus::Failed
        } else {
            ListStatus::Success
        }
    }
}

/// Runs listings and writes tables and diagnostics
pub struct Lister {
    scanner: Scanner,
    renderer: Renderer,
}

impl Lister {
    /// Create a lister from its two collaborators
    pub fn new(scanner: Scanner, renderer: Renderer) -> Self {
        Self { scanner, renderer }
    }

    /// Wire up system identities, the color policy and the current time
    pub fn from_config(config: &Config) -> Self {
        let capability: Box<dyn ColorCapability> = match config.color {
            ColorMode::Auto => Box::new(TerminalProbe),
            ColorMode::Always => Box::new(true),
            ColorMode::Never => Box::new(false),
        };
        let renderer = Renderer::new(
            Palette::default(),
            capability.supports_color(),
            Utc::now().timestamp(),
        );
        Self::new(Scanner::new(Box::new(SystemIdentities)), renderer)
    }

    /// Execute `request`, writing tables to `out` and diagnostics to `err`.
    ///
    /// Unreadable entries only change the returned status; an `Err` means
    /// one of the output streams failed.
    pub fn run<O: Write, E: Write>(
        &self,
        request: &ListRequest,
        out: &mut O,
        err: &mut E,
    ) -> Result<ListStatus> {
        match request {
            ListRequest::CurrentDir => self.list_path(Path::new("."), ".", out, err),
            ListRequest::Single(path) => {
                self.list_path(path, &path.to_string_lossy(), out, err)
            }
            ListRequest::Many(paths) => {
                let mut status = ListStatus::Success;
                for path in paths {
                    writeln!(out, "Content of: {}", path.display())?;
                    let block = self.list_path(path, &path.to_string_lossy(), out, err)?;
                    status = status.merge(block);
                }
                Ok(status)
            }
        }
    }

    /// List one path as a single table block
    pub fn list_path<O: Write, E: Write>(
        &self,
        path: &Path,
        display: &str,
        out: &mut O,
        err: &mut E,
    ) -> Result<ListStatus> {
        let mut candidates = match self.scanner.resolve(path, display) {
            Ok(candidates) => candidates,
            Err(e) => {
                writeln!(err, "{}", e)?;
                return Ok(ListStatus::Failed);
            }
        };
        sort_candidates(&mut candidates);

        let mut status = ListStatus::Success;
        let mut entries = Vec::with_capacity(candidates.len());
        for result in self.scanner.scan(&candidates) {
            match result {
                Ok(entry) => entries.push(entry),
                Err(e) => {
                    writeln!(err, "{}", e)?;
                    status = ListStatus::Failed;
                }
            }
        }

        writeln!(out, "{}", self.renderer.render(&entries))?;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ListerError;
    use crate::identity::NumericIdentities;
    use std::io;

    #[test]
    fn test_status_merge() {
        use ListStatus::*;
        assert_eq!(Success.merge(Success), Success);
        assert_eq!(Success.merge(Failed), Failed);
        assert_eq!(Failed.merge(Success), Failed);
    }

    struct ClosedSink;

    impl Write for ClosedSink {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_closed_output_is_an_io_error() {
        let lister = Lister::new(
            Scanner::new(Box::new(NumericIdentities)),
            Renderer::new(Palette::default(), false, 0),
        );
        let request = ListRequest::Many(vec![PathBuf::from("does-not-matter")]);
        let result = lister.run(&request, &mut ClosedSink, &mut Vec::<u8>::new());

        match result {
            Err(ListerError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("expected an IO error, got {:?}", other),
        }
    }

    #[test]
    fn test_exit_codes() {
        let config = Config::default();
        assert_eq!(config.exit_code(ListStatus::Success), 0);
        assert_eq!(config.exit_code(ListStatus::Failed), 84);
    }
}
