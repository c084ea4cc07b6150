/*!
 * Color capability detection for the output stream
 */

use std::io;

use is_terminal::IsTerminal;
use terminfo::{capability as cap, Database};

/// Answers whether the output sink is an interactive, color-capable terminal
pub trait ColorCapability {
    /// True when names should be wrapped in escape sequences
    fn supports_color(&self) -> bool;
}

/// Fixed answer, for `--color always|never` and tests
impl ColorCapability for bool {
    fn supports_color(&self) -> bool {
        *self
    }
}

/// Probes standard output and the terminfo database
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalProbe;

impl TerminalProbe {
    /// Number of colors the current `$TERM` advertises, if it can be read
    fn max_colors() -> Option<i32> {
        let db = match Database::from_env() {
            Ok(db) => db,
            Err(e) => {
                log::debug!("terminfo unavailable: {}", e);
                return None;
            }
        };
        match db.get::<cap::MaxColors>() {
            Some(cap::MaxColors(n)) => Some(n),
            None => None,
        }
    }
}

impl ColorCapability for TerminalProbe {
    fn supports_color(&self) -> bool {
        if !io::stdout().is_terminal() {
            log::debug!("stdout is not a terminal, color disabled");
            return false;
        }
        let colors = Self::max_colors();
        log::debug!("terminal reports {:?} colors", colors);
        colors.map_or(false, |n| n > 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_capability() {
        assert!(true.supports_color());
        assert!(!false.supports_color());
    }
}
