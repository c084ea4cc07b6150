/*!
 * Table rendering for lstable
 *
 * Turns metadata snapshots into display rows and lays them out with the
 * tabled library. Rendering depends only on the entries, the frozen
 * clock and the color flag, so the same inputs always give the same bytes.
 */

use chrono::DateTime;
use tabled::{
    settings::{object::Columns, style::HorizontalLine, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::palette::Palette;
use crate::types::DirectoryEntry;

/// Six 30-day months, in seconds
pub const RECENT_WINDOW_SECS: i64 = 6 * 30 * 24 * 60 * 60;

/// Format for entries older than the window or in the future
const YEAR_FORMAT: &str = "%b %e  %Y";
/// Format for recent entries
const CLOCK_FORMAT: &str = "%b %e %R";

/// One table row, every column already formatted
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct FormattedRow {
    #[tabled(rename = "Permissions")]
    pub permissions: String,

    #[tabled(rename = "# Links")]
    pub links: String,

    #[tabled(rename = "Owner")]
    pub owner: String,

    #[tabled(rename = "Group")]
    pub group: String,

    #[tabled(rename = "Size")]
    pub size: String,

    #[tabled(rename = "Last Mod")]
    pub last_modified: String,

    #[tabled(rename = "Name")]
    pub name: String,
}

/// Renders sorted entries into an aligned table
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    colorize: bool,
    now: i64,
}

impl Renderer {
    /// Create a renderer with a frozen `now` (seconds since the epoch)
    pub fn new(palette: Palette, colorize: bool, now: i64) -> Self {
        Self {
            palette,
            colorize,
            now,
        }
    }

    /// Map an entry to its display strings
    pub fn format_row(&self, entry: &DirectoryEntry) -> FormattedRow {
        let mut name = if self.colorize {
            self.palette.paint(entry.color_class(), &entry.name)
        } else {
            entry.name.clone()
        };
        if let Some(target) = &entry.symlink_target {
            name.push_str(" -> ");
            name.push_str(target);
        }

        FormattedRow {
            permissions: entry.permissions(),
            links: format!("{:>4}", entry.link_count),
            owner: entry.owner.to_string(),
            group: entry.group.to_string(),
            size: format!("{:>8}", entry.size_bytes),
            last_modified: self.format_time(entry.modified_time),
            name,
        }
    }

    /// Format a modification time in UTC.
    ///
    /// Times older than [`RECENT_WINDOW_SECS`] or later than now show the
    /// year, everything else shows the time of day.
    pub fn format_time(&self, mtime: i64) -> String {
        let recent = self.now - RECENT_WINDOW_SECS;
        let fmt = if mtime < recent || mtime > self.now {
            YEAR_FORMAT
        } else {
            CLOCK_FORMAT
        };
        match DateTime::from_timestamp(mtime, 0) {
            Some(time) => time.format(fmt).to_string(),
            None => mtime.to_string(),
        }
    }

    /// Render entries, in the given order, as a table string
    pub fn render(&self, entries: &[DirectoryEntry]) -> String {
        let rows: Vec<FormattedRow> = entries.iter().map(|e| self.format_row(e)).collect();

        // Rules only around the header and at the edges
        let style = Style::ascii()
            .remove_horizontal()
            .horizontals([(1, HorizontalLine::inherit(Style::ascii()))]);

        // Links and Size are right aligned, the rest left
        let mut table = Table::new(rows);
        table
            .with(style)
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()))
            .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
            .with(Modify::new(Columns::new(4..5)).with(Alignment::right()));

        table.to_string()
    }
}
