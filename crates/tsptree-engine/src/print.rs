use crate::model::TreeModel;
use crate::render::{RenderEvent, TreeLine, partition};
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::Table;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// How [`TreeModel::print`] lays out the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintMode {
    /// One line per single-label entry; multi-label rows are dropped.
    Text,
    /// Multi-label rows in a grid under these headers; single-label entries
    /// still print as lines.
    Table(Vec<String>),
}

/// Border style of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TablePreset {
    #[default]
    Utf8,
    Ascii,
}

impl TablePreset {
    fn preset(self) -> &'static str {
        match self {
            TablePreset::Utf8 => UTF8_FULL,
            TablePreset::Ascii => ASCII_FULL,
        }
    }
}

/// Headers the grid should use for `rows`.
///
/// The descriptor headers are kept when there are as many rows as headers;
/// otherwise the columns are numbered `0..n`, `n` being the widest row.
pub fn resolve_headers(headers: &[String], rows: &[Vec<String>]) -> Vec<String> {
    if rows.len() == headers.len() {
        return headers.to_vec();
    }
    tracing::debug!(
        headers = headers.len(),
        rows = rows.len(),
        "row count does not match descriptors, using positional headers"
    );
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    (0..width).map(|i| i.to_string()).collect()
}

pub fn build_table(headers: Vec<String>, rows: Vec<Vec<String>>, preset: TablePreset) -> Table {
    let mut table = Table::new();
    table.load_preset(preset.preset()).set_header(headers);
    for row in rows {
        table.add_row(row);
    }
    table
}

impl TreeModel {
    /// Table when descriptors were supplied, text otherwise.
    pub fn print_mode(&self) -> PrintMode {
        match self.descriptors() {
            Some(descriptors) => {
                PrintMode::Table(descriptors.iter().map(|d| d.text.clone()).collect())
            }
            None => PrintMode::Text,
        }
    }

    /// Print to stdout in the mode picked by [`TreeModel::print_mode`].
    pub fn print(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.print_to(&mut out)
    }

    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.print_as(out, &self.print_mode(), TablePreset::default())
    }

    /// Print in an explicit mode.
    ///
    /// Lines are written as the walk reaches them. In table mode the collected
    /// rows follow as one grid; nothing is drawn when there are no rows.
    pub fn print_as<W: Write>(
        &self,
        out: &mut W,
        mode: &PrintMode,
        preset: TablePreset,
    ) -> io::Result<()> {
        self.print_with(out, mode, preset, |out, line| writeln!(out, "{line}"))
    }

    /// Like [`TreeModel::print_as`], with `write_line` deciding how each
    /// single-label line is written.
    pub fn print_with<W, F>(
        &self,
        out: &mut W,
        mode: &PrintMode,
        preset: TablePreset,
        mut write_line: F,
    ) -> io::Result<()>
    where
        W: Write,
        F: FnMut(&mut W, &TreeLine) -> io::Result<()>,
    {
        let mut rows = Vec::new();
        for event in self.events() {
            match event {
                RenderEvent::Line(line) => write_line(out, &line)?,
                RenderEvent::Row(row) => rows.push(row),
            }
        }

        // Text mode drops rows.
        if let PrintMode::Table(headers) = mode
            && let Some(table) = self.render_table(headers, rows, preset)
        {
            writeln!(out, "{table}")?;
        }
        Ok(())
    }

    /// Grid for `rows` under `headers`, or `None` if there is nothing to draw.
    pub fn render_table(
        &self,
        headers: &[String],
        rows: Vec<Vec<String>>,
        preset: TablePreset,
    ) -> Option<Table> {
        if rows.is_empty() {
            return None;
        }
        let headers = resolve_headers(headers, &rows);
        Some(build_table(headers, rows, preset))
    }

    /// All rows the tree would contribute to a table, in walk order.
    pub fn rows(&self) -> Vec<Vec<String>> {
        partition(self.events()).1
    }
}
