//! Shaped (display-ready) tables and the column definitions that build them.

use crate::models::ReportKind;

/// Colour family of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Green.
    Success,
    /// Blue.
    Info,
    /// Amber.
    Warning,
    /// Red.
    Danger,
    /// Grey.
    Neutral,
}

impl Tone {
    /// CSS class suffix used by the HTML renderers.
    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Success => "success",
            Tone::Info => "info",
            Tone::Warning => "warning",
            Tone::Danger => "danger",
            Tone::Neutral => "neutral",
        }
    }
}

/// One display cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Display text.
    pub text: String,
    /// Badge tone, for status cells.
    pub tone: Option<Tone>,
}

impl Cell {
    /// A plain text cell.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: None,
        }
    }
}

/// How a table is laid out by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// Key/value pairs: `Métrica | Valor` on a worksheet, cards in HTML.
    Summary,
    /// A header row followed by data rows.
    Grid,
}

/// A display-ready table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedTable {
    /// Stable identifier, e.g. `rendimientoCursos`.
    pub key: &'static str,
    /// Human title; also the worksheet name.
    pub title: &'static str,
    /// Layout.
    pub layout: TableLayout,
    /// Column labels. For summary tables these are `Métrica`, `Valor`.
    pub headers: Vec<&'static str>,
    /// Rows of cells, each as long as `headers`.
    pub rows: Vec<Vec<Cell>>,
}

impl ShapedTable {
    /// Builds a summary table from `(label, value)` pairs.
    pub fn summary(key: &'static str, title: &'static str, pairs: Vec<(&str, String)>) -> Self {
        Self {
            key,
            title,
            layout: TableLayout::Summary,
            headers: vec!["Métrica", "Valor"],
            rows: pairs
                .into_iter()
                .map(|(label, value)| vec![Cell::text(label), Cell::text(value)])
                .collect(),
        }
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the first column carrying a badge, if any.
    pub fn badge_column(&self) -> Option<usize> {
        self.rows
            .iter()
            .find_map(|row| row.iter().position(|cell| cell.tone.is_some()))
    }
}

/// A whole report after shaping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapedReport {
    /// Which report this is.
    pub kind: ReportKind,
    /// Document title.
    pub title: &'static str,
    /// Tables in display order.
    pub tables: Vec<ShapedTable>,
}

/// A column of a grid table over records of type `R`.
pub struct Column<R> {
    /// Column label.
    pub header: &'static str,
    /// Produces the display text.
    pub value: fn(&R) -> String,
    /// Produces a badge tone, for status columns.
    pub badge: Option<fn(&R) -> Option<Tone>>,
}

impl<R> Column<R> {
    /// A plain column.
    pub const fn new(header: &'static str, value: fn(&R) -> String) -> Self {
        Self {
            header,
            value,
            badge: None,
        }
    }

    /// A column rendered as a status badge.
    pub const fn badge(
        header: &'static str,
        value: fn(&R) -> String,
        tone: fn(&R) -> Option<Tone>,
    ) -> Self {
        Self {
            header,
            value,
            badge: Some(tone),
        }
    }
}

/// Applies column definitions to records, preserving record order.
pub fn shape_table<R>(
    key: &'static str,
    title: &'static str,
    columns: &[Column<R>],
    records: &[R],
) -> ShapedTable {
    let rows = records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| Cell {
                    text: (column.value)(record),
                    tone: column.badge.and_then(|tone| tone(record)),
                })
                .collect()
        })
        .collect();

    ShapedTable {
        key,
        title,
        layout: TableLayout::Grid,
        headers: columns.iter().map(|column| column.header).collect(),
        rows,
    }
}
