//! Renders a [Listing] as an aligned table.
//!
//! Each row is `tag + permissions`, size, modification time, and name, separated by
//! fixed two-space gaps. The header labels are padded to the same column starts.
//! Names are colored by entry type and the header is underlined; both are skipped
//! when color is off, leaving plain text.

use crate::config::Theme;
use crate::core::formatter::{SIZE_WIDTH, TIME_WIDTH};
use crate::core::{EntryRecord, Listing};

use crossterm::style::{Color, Stylize};

use std::fmt::Display;
use std::io::{self, Write};

/// Printed instead of a table when the directory has no entries.
pub const EMPTY_NOTICE: &str = "Directory is empty.";

const COLUMN_GAP: &str = "  ";
// Type tag plus the nine permission characters
const MODE_WIDTH: usize = 10;

/// Header labels and the width of the column each one sits over, gap included.
const HEADER: [(&str, usize); 4] = [
    ("Permissions", MODE_WIDTH + COLUMN_GAP.len()),
    ("Size", SIZE_WIDTH + COLUMN_GAP.len()),
    ("Last Modified", TIME_WIDTH + COLUMN_GAP.len()),
    ("Name", 0),
];

pub struct Renderer<'a> {
    theme: &'a Theme,
    color: bool,
    header: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(theme: &'a Theme, color: bool) -> Self {
        Self {
            theme,
            color,
            header: true,
        }
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    /// Writes the whole listing: the empty notice, or the header followed by one line
    /// per record.
    pub fn render<W: Write>(&self, out: &mut W, listing: &Listing) -> io::Result<()> {
        match listing {
            Listing::Empty => self.write_notice(out, EMPTY_NOTICE),
            Listing::Records(records) => {
                if self.header {
                    self.write_header(out)?;
                }
                for record in records {
                    self.write_record(out, record)?;
                }
                Ok(())
            }
        }
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for (label, width) in HEADER {
            if self.color {
                write!(out, "{}", label.underlined())?;
            } else {
                out.write_all(label.as_bytes())?;
            }
            let pad = width.saturating_sub(label.len());
            write!(out, "{:pad$}", "", pad = pad)?;
        }
        writeln!(out)
    }

    pub fn write_record<W: Write>(&self, out: &mut W, record: &EntryRecord) -> io::Result<()> {
        let size = record.size().as_deref().unwrap_or("");
        let modified = record.modified().as_deref().unwrap_or("");

        write!(
            out,
            "{}{}{gap}{:<size_w$}{gap}{:<time_w$}{gap}",
            record.kind().tag(),
            record.permissions(),
            size,
            modified,
            gap = COLUMN_GAP,
            size_w = SIZE_WIDTH,
            time_w = TIME_WIDTH,
        )?;
        self.paint(out, record.display_name(), self.theme.entry_color(record.kind()))?;
        writeln!(out)
    }

    pub fn write_notice<W: Write>(&self, out: &mut W, text: &str) -> io::Result<()> {
        self.paint(out, text, self.theme.notice())?;
        writeln!(out)
    }

    pub fn write_error<W: Write, E: Display>(&self, out: &mut W, err: &E) -> io::Result<()> {
        self.paint(out, &err.to_string(), self.theme.error())?;
        writeln!(out)
    }

    fn paint<W: Write>(&self, out: &mut W, text: &str, color: Color) -> io::Result<()> {
        if self.color && color != Color::Reset {
            write!(out, "{}", text.with(color))
        } else {
            out.write_all(text.as_bytes())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FileEntry, ListOptions, list_dir};
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn strip_ansi(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for next in chars.by_ref() {
                    if next.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn render_to_string(renderer: &Renderer, listing: &Listing) -> io::Result<String> {
        let mut buf = Vec::new();
        renderer.render(&mut buf, listing)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    #[test]
    fn header_columns_line_up_with_rows() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        fs::write(dir.path().join("data.bin"), [0u8; 2048])?;
        let listing = list_dir(dir.path(), &ListOptions::default())?;

        let theme = Theme::default();
        let text = render_to_string(&Renderer::new(&theme, false), &listing)?;
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Permissions Size   Last Modified      Name");
        let row = lines[1];
        assert!(row.starts_with(".rw"), "unexpected row: {:?}", row);
        assert_eq!(&row[10..12], "  ");
        assert_eq!(&row[12..17], "2.05K");
        assert_eq!(&row[17..19], "  ");
        assert_eq!(&row[36..38], "  ");
        assert_eq!(&row[38..], "data.bin");
        assert_eq!(lines[0].find("Size"), Some(12));
        assert_eq!(lines[0].find("Last Modified"), Some(19));
        assert_eq!(lines[0].find("Name"), Some(38));
        Ok(())
    }

    #[test]
    fn blank_columns_keep_alignment() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let sub = dir.path().join("sub");
        fs::create_dir(&sub)?;
        let record = EntryRecord::from_entry(&FileEntry::from_path(&sub)?, false);

        let theme = Theme::default();
        let mut buf = Vec::new();
        Renderer::new(&theme, false).write_record(&mut buf, &record)?;
        let row = String::from_utf8(buf)?;

        assert!(row.starts_with('d'));
        assert_eq!(&row[12..19], "       ");
        assert_eq!(&row[38..], "sub\n");
        Ok(())
    }

    #[test]
    fn empty_listing_prints_only_the_notice() -> io::Result<()> {
        let theme = Theme::default();
        let text = render_to_string(&Renderer::new(&theme, false), &Listing::Empty)?;
        assert_eq!(text, "Directory is empty.\n");
        Ok(())
    }

    #[test]
    fn header_can_be_disabled() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("only"))?;
        let listing = list_dir(dir.path(), &ListOptions::default())?;

        let theme = Theme::default();
        let text = render_to_string(&Renderer::new(&theme, false).with_header(false), &listing)?;
        assert_eq!(text.lines().count(), 1);
        assert!(text.trim_end().ends_with("only"));
        Ok(())
    }

    #[test]
    fn color_only_adds_escapes() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        File::create(dir.path().join("a.txt"))?;
        fs::create_dir(dir.path().join("b"))?;
        let listing = list_dir(dir.path(), &ListOptions::default())?;

        let theme = Theme::default();
        let plain = render_to_string(&Renderer::new(&theme, false), &listing)?;
        let colored = render_to_string(&Renderer::new(&theme, true), &listing)?;

        assert!(!plain.contains('\x1b'));
        assert!(colored.contains('\x1b'));
        assert_eq!(strip_ansi(&colored), plain);
        Ok(())
    }

    #[test]
    fn error_line_is_plain_without_color() -> io::Result<()> {
        let theme = Theme::default();
        let mut buf = Vec::new();
        Renderer::new(&theme, false).write_error(&mut buf, &"No such path in filesystem.")?;
        assert_eq!(buf, b"No such path in filesystem.\n");
        Ok(())
    }
}
