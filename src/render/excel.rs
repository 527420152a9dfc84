//! Workbook rendering: one worksheet per shaped table.

use rust_xlsxwriter::{Color, Format, FormatPattern, Workbook, Worksheet, XlsxError};

use crate::config::AppConfig;
use crate::error::{ReportError, ReportResult};
use crate::shaping::{ShapedReport, ShapedTable, TableLayout};

fn xlsx_err(e: XlsxError) -> ReportError {
    ReportError::render(format!("xlsx: {e}"))
}

/// Styling applied to every workbook.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkbookStyle {
    /// Header fill colour as `0xRRGGBB`.
    pub brand_rgb: u32,
    /// Width applied to every used column.
    pub column_width: f64,
}

impl WorkbookStyle {
    /// Takes the brand colour and column width from the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            brand_rgb: config.institution().primary_rgb(),
            column_width: config.export().column_width,
        }
    }
}

/// Renders a report to xlsx bytes.
///
/// Summary tables get a title row, a blank row, a bold `Métrica | Valor`
/// header and then one row per metric. Grid tables get a brand-coloured
/// header on the first row and data from the second.
pub fn render_workbook(report: &ShapedReport, style: &WorkbookStyle) -> ReportResult<Vec<u8>> {
    let mut wb = Workbook::new();
    for table in &report.tables {
        let ws = wb.add_worksheet();
        ws.set_name(table.title).map_err(xlsx_err)?;
        let columns = match table.layout {
            TableLayout::Summary => write_summary(ws, report.title, table),
            TableLayout::Grid => write_grid(ws, table, style),
        }
        .map_err(xlsx_err)?;

        for col in 0..columns {
            ws.set_column_width(col, style.column_width).map_err(xlsx_err)?;
        }
    }
    wb.save_to_buffer().map_err(xlsx_err)
}

fn write_summary(ws: &mut Worksheet, title: &str, table: &ShapedTable) -> Result<u16, XlsxError> {
    let title_format = Format::new().set_bold().set_font_size(16);
    let header_format = Format::new().set_bold();

    ws.write_string_with_format(0, 0, title, &title_format)?;
    for (col, header) in table.headers.iter().enumerate() {
        ws.write_string_with_format(2, col as u16, *header, &header_format)?;
    }
    for (i, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            ws.write_string(3 + i as u32, col as u16, &cell.text)?;
        }
    }

    Ok(table.headers.len() as u16)
}

fn write_grid(ws: &mut Worksheet, table: &ShapedTable, style: &WorkbookStyle) -> Result<u16, XlsxError> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(style.brand_rgb))
        .set_pattern(FormatPattern::Solid);

    for (col, header) in table.headers.iter().enumerate() {
        ws.write_string_with_format(0, col as u16, *header, &header_format)?;
    }
    for (i, row) in table.rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            ws.write_string(1 + i as u32, col as u16, &cell.text)?;
        }
    }

    Ok(table.headers.len() as u16)
}
