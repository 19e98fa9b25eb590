//! Renderer module
//!
//! Renders document entries as a bordered table or a simple tab-separated stream

use crate::core::model::DocumentEntry;
use colored::Colorize;
use std::io::Write;
use unicode_width::UnicodeWidthStr;

/// Header labels of the table columns
pub const TABLE_HEADERS: [&str; 2] = ["File Name", "1st line"];

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Simple,
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub format: OutputFormat,
    /// Style the table header; has no effect on simple output
    pub color: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            color: true,
        }
    }
}

impl RenderConfig {
    /// Create a new render config with color enabled
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: true,
        }
    }

    /// Create a new render config with an explicit color choice
    pub fn with_color(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }
}

/// Renderer for document entries
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render entries to a string
    pub fn render(&self, entries: &[DocumentEntry]) -> String {
        match self.config.format {
            OutputFormat::Table => render_table(entries, self.config.color),
            OutputFormat::Simple => render_simple(entries),
        }
    }

    /// Render to a writer, terminating table output with a newline
    pub fn render_to<W: Write>(
        &self,
        entries: &[DocumentEntry],
        mut writer: W,
    ) -> std::io::Result<()> {
        let output = self.render(entries);
        writer.write_all(output.as_bytes())?;
        if self.config.format == OutputFormat::Table {
            writer.write_all(b"\n")?;
        }
        Ok(())
    }
}

/// Box-drawing characters for one horizontal border line
struct BorderLine {
    left: char,
    middle: char,
    right: char,
}

const TOP: BorderLine = BorderLine {
    left: '┌',
    middle: '┬',
    right: '┐',
};
const HEADER_SEPARATOR: BorderLine = BorderLine {
    left: '├',
    middle: '┼',
    right: '┤',
};
const BOTTOM: BorderLine = BorderLine {
    left: '└',
    middle: '┴',
    right: '┘',
};
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

fn border_line(border: &BorderLine, widths: &[usize]) -> String {
    let mut line = String::new();
    line.push(border.left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            line.push(border.middle);
        }
        line.extend(std::iter::repeat(HORIZONTAL).take(*width));
    }
    line.push(border.right);
    line
}

fn content_line(cells: &[&str], widths: &[usize], bold: bool) -> String {
    let mut line = String::new();
    line.push(VERTICAL);
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push(VERTICAL);
        }
        if bold {
            line.push_str(&cell.bold().to_string());
        } else {
            line.push_str(cell);
        }
        // Pad by display width so wide characters keep the border aligned
        let padding = width.saturating_sub(cell.width());
        line.extend(std::iter::repeat(' ').take(padding));
    }
    line.push(VERTICAL);
    line
}

/// Render entries as a two-column bordered table with a bold header row.
///
/// The result has no trailing newline.
pub fn render_table(entries: &[DocumentEntry], color: bool) -> String {
    let mut widths = TABLE_HEADERS.map(|header| header.width());
    for entry in entries {
        widths[0] = widths[0].max(entry.name().width());
        widths[1] = widths[1].max(entry.first_line().width());
    }

    let mut lines = Vec::with_capacity(entries.len() + 4);
    lines.push(border_line(&TOP, &widths));
    lines.push(content_line(&TABLE_HEADERS, &widths, color));
    lines.push(border_line(&HEADER_SEPARATOR, &widths));
    for entry in entries {
        lines.push(content_line(
            &[entry.name(), entry.first_line()],
            &widths,
            false,
        ));
    }
    lines.push(border_line(&BOTTOM, &widths));

    lines.join("\n")
}

/// Render entries as `"name"<TAB>first line` records, one per line.
///
/// Quotes and tabs inside names or lines are not escaped.
pub fn render_simple(entries: &[DocumentEntry]) -> String {
    let mut output = String::new();
    for entry in entries {
        output.push('"');
        output.push_str(entry.name());
        output.push_str("\"\t");
        output.push_str(entry.first_line());
        output.push('\n');
    }
    output
}
