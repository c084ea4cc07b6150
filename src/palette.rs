//! Escape sequences for each color class.

use crate::types::ColorClass;

/// SGR reset appended after a colored name
pub const RESET: &str = "\x1b[00m";

/// Immutable mapping from color class to its escape sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    directory: &'static str,
    link: &'static str,
    broken_link: &'static str,
    executable: &'static str,
    hidden: &'static str,
    normal: &'static str,
}

impl Palette {
    /// Escape sequence for `class`, `None` when the class is never styled
    pub fn escape(&self, class: ColorClass) -> Option<&'static str> {
        let code = match class {
            ColorClass::Directory => self.directory,
            ColorClass::Link => self.link,
            ColorClass::BrokenLink => self.broken_link,
            ColorClass::Executable => self.executable,
            ColorClass::Hidden => self.hidden,
            ColorClass::Normal => self.normal,
            ColorClass::Plain => return None,
        };
        Some(code)
    }

    /// Wrap `name` in the class escape and a reset
    pub fn paint(&self, class: ColorClass, name: &str) -> String {
        match self.escape(class) {
            Some(code) => format!("{}{}{}", code, name, RESET),
            None => name.to_string(),
        }
    }
}

impl Default for Palette {
    /// Classic `dircolors` look
    fn default() -> Self {
        Self {
            directory: "\x1b[01;36m",
            link: "\x1b[00;35m",
            broken_link: "\x1b[01;05;37;41m",
            executable: "\x1b[01;32m",
            hidden: "\x1b[00;37m",
            normal: "\x1b[01;37m",
        }
    }
}
