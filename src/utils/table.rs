//! Table rendering utilities for CLI outputs.
//!
//! Cells may hold several lines and ANSI colour codes; widths are measured on
//! the visible text only. A cell may span several columns, so a row can hold
//! fewer cells than the table has columns.

use regex::Regex;
use std::sync::OnceLock;
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

#[derive(Debug, Clone)]
pub struct TableCell {
    pub text: String,
    pub span: usize,
}

impl TableCell {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            span: 1,
        }
    }

    pub fn spanning(text: impl Into<String>, span: usize) -> Self {
        Self {
            text: text.into(),
            span: span.max(1),
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<TableCell>>,
    separator: char,
}

fn ansi_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("ANSI pattern compiles"))
}

/// Printable width of `s`, ignoring ANSI escape sequences.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(ansi_pattern().replace_all(s, "").as_ref())
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(visible_width(s));
    format!("{s}{}", " ".repeat(fill))
}

impl Table {
    pub fn new(columns: Vec<Column>, separator: char) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            separator,
        }
    }

    pub fn add_row(&mut self, row: Vec<TableCell>) {
        self.rows.push(row);
    }

    /// Width available to a cell starting at `col` and covering `span` columns.
    fn span_width(&self, col: usize, span: usize) -> usize {
        let end = (col + span).min(self.columns.len());
        let widths: usize = self
            .columns
            .get(col..end)
            .map(|cols| cols.iter().map(|c| c.width).sum())
            .unwrap_or(0);
        // joined columns also absorb the " | " between them
        widths + end.saturating_sub(col).saturating_sub(1) * 3
    }

    fn render_row(&self, row: &[TableCell], out: &mut String) {
        // (width, wrapped lines) per cell
        let mut laid_out = Vec::new();
        let mut col = 0;
        for cell in row {
            if col >= self.columns.len() {
                break;
            }
            let width = self.span_width(col, cell.span);
            let lines: Vec<String> = cell
                .text
                .lines()
                .flat_map(|line| {
                    if visible_width(line) <= width {
                        vec![line.to_string()]
                    } else {
                        textwrap::wrap(line, width.max(1))
                            .into_iter()
                            .map(|l| l.into_owned())
                            .collect()
                    }
                })
                .collect();
            laid_out.push((width, lines));
            col += cell.span;
        }

        let height = laid_out.iter().map(|(_, l)| l.len()).max().unwrap_or(1).max(1);

        for line_no in 0..height {
            let parts: Vec<String> = laid_out
                .iter()
                .map(|(width, lines)| {
                    pad(lines.get(line_no).map(String::as_str).unwrap_or(""), *width)
                })
                .collect();
            out.push_str(parts.join(" | ").trim_end());
            out.push('\n');
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        // Header
        let header: Vec<TableCell> = self
            .columns
            .iter()
            .map(|c| TableCell::new(c.header.clone()))
            .collect();
        self.render_row(&header, &mut out);

        let total = self.span_width(0, self.columns.len());
        let rule = self.separator.to_string().repeat(total);

        // Rows
        for row in &self.rows {
            out.push_str(&rule);
            out.push('\n');
            self.render_row(row, &mut out);
        }

        out
    }
}
