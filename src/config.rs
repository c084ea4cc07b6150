/*!
 * Configuration handling for lstable
 */

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_complete::Shell;

use crate::ensure;
use crate::error::Result;
use crate::lister::{ListRequest, ListStatus};

/// When to colorize entry names
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal that supports more than two colors
    #[default]
    Auto,
    /// Always emit escape sequences
    Always,
    /// Never emit escape sequences
    Never,
}

/// Command-line arguments for lstable
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "lstable",
    version = env!("CARGO_PKG_VERSION"),
    about = "List directory contents as an aligned table",
    long_about = "Lists files with permissions, link count, owner, group, size and modification time, rendered as a table and colored by entry type."
)]
pub struct Args {
    /// Files or directories to list (defaults to the current directory)
    pub paths: Vec<String>,

    /// When to color entry names
    #[clap(long, value_enum, default_value_t = ColorMode::default())]
    pub color: ColorMode,

    /// Exit status when every entry was listed
    #[clap(long, default_value = "0")]
    pub success_code: i32,

    /// Exit status when at least one entry could not be read
    #[clap(long, default_value = "84")]
    pub error_code: i32,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Paths as given on the command line
    pub paths: Vec<PathBuf>,

    /// Color policy
    pub color: ColorMode,

    /// Status returned on full success
    pub success_code: i32,

    /// Status returned when any entry failed
    pub error_code: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            color: ColorMode::Auto,
            success_code: 0,
            error_code: 84,
        }
    }
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Self {
        Self {
            paths: args.paths.into_iter().map(PathBuf::from).collect(),
            color: args.color,
            success_code: args.success_code,
            error_code: args.error_code,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.success_code != self.error_code,
            InvalidArgument,
            "success and error codes must differ (both are {})",
            self.success_code
        );
        Ok(())
    }

    /// Shape of the listing the paths ask for.
    ///
    /// Command-line paths are always a list, so even one path gets its
    /// `Content of:` header.
    pub fn request(&self) -> ListRequest {
        if self.paths.is_empty() {
            ListRequest::CurrentDir
        } else {
            ListRequest::Many(self.paths.clone())
        }
    }

    /// Process exit status for `status`
    pub fn exit_code(&self, status: ListStatus) -> i32 {
        match status {
            ListStatus::Success => self.success_code,
            ListStatus::Failed => self.error_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["lstable"]);
        let config = Config::from_args(args);
        assert_eq!(config, Config::default());
        assert_eq!(config.request(), ListRequest::CurrentDir);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_request_shapes() {
        let one = Config::from_args(Args::parse_from(["lstable", "src"]));
        assert_eq!(one.request(), ListRequest::Many(vec![PathBuf::from("src")]));

        let many = Config::from_args(Args::parse_from(["lstable", "a", "b"]));
        assert_eq!(
            many.request(),
            ListRequest::Many(vec![PathBuf::from("a"), PathBuf::from("b")])
        );
    }

    #[test]
    fn test_color_and_codes() {
        let args = Args::parse_from([
            "lstable",
            "--color",
            "never",
            "--success-code",
            "3",
            "--error-code",
            "3",
        ]);
        let config = Config::from_args(args);
        assert_eq!(config.color, ColorMode::Never);
        assert!(config.validate().is_err());
    }
}
