//! Printable HTML document, the input of the PDF engine.

use chrono::NaiveDateTime;

use crate::config::AppConfig;
use crate::shaping::{Cell, ShapedReport, ShapedTable, TableLayout};

/// Branding and page settings for HTML output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentStyle {
    /// Institution name shown above the title.
    pub institution: String,
    /// Brand colour as `#RRGGBB`.
    pub brand_color: String,
    /// Left logo source; omitted when empty.
    pub logo_left: String,
    /// Right logo source; omitted when empty.
    pub logo_right: String,
    /// Paper format for `@page`.
    pub page_format: String,
    /// Margins in millimetres: top, right, bottom, left.
    pub margins_mm: [u32; 4],
}

impl DocumentStyle {
    /// Takes branding and page settings from the configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let institution = config.institution();
        let pdf = &config.export().pdf;
        Self {
            institution: institution.name.clone(),
            brand_color: institution.primary_color.clone(),
            logo_left: institution.logo_left.clone(),
            logo_right: institution.logo_right.clone(),
            page_format: pdf.page_format.clone(),
            margins_mm: [
                pdf.margin_top_mm,
                pdf.margin_right_mm,
                pdf.margin_bottom_mm,
                pdf.margin_left_mm,
            ],
        }
    }
}

/// Escapes text for HTML element and attribute content.
pub(crate) fn esc<S: AsRef<str>>(s: S) -> String {
    let mut out = String::with_capacity(s.as_ref().len() + 8);
    for ch in s.as_ref().chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// CSS shared by the printable document and the interactive listing.
pub(crate) fn base_css(style: &DocumentStyle) -> String {
    let brand = esc(&style.brand_color);
    format!(
        "body {{ font-family: 'Helvetica Neue', Arial, sans-serif; color: #222; font-size: 11px; margin: 0; }}\n\
         .header {{ display: flex; align-items: center; justify-content: space-between; \
border-bottom: 3px solid {brand}; padding-bottom: 8px; margin-bottom: 16px; }}\n\
         .header img {{ height: 56px; }}\n\
         .header .titles {{ text-align: center; flex: 1; }}\n\
         .header h1 {{ color: {brand}; font-size: 20px; margin: 4px 0; }}\n\
         .header .institution {{ font-weight: bold; font-size: 13px; }}\n\
         .header .generated {{ color: #666; }}\n\
         section {{ margin-bottom: 18px; page-break-inside: avoid; }}\n\
         section h2 {{ color: {brand}; font-size: 14px; border-bottom: 1px solid #ddd; padding-bottom: 4px; }}\n\
         table {{ width: 100%; border-collapse: collapse; }}\n\
         th {{ background: {brand}; color: #fff; text-align: left; padding: 5px 6px; }}\n\
         td {{ padding: 4px 6px; border-bottom: 1px solid #eee; }}\n\
         tbody tr:nth-child(even) {{ background: #f5f7fa; }}\n\
         .cards {{ display: flex; flex-wrap: wrap; gap: 10px; }}\n\
         .card {{ border: 1px solid #ddd; border-left: 4px solid {brand}; border-radius: 4px; padding: 8px 12px; min-width: 150px; }}\n\
         .card .label {{ color: #666; font-size: 10px; }}\n\
         .card .value {{ font-size: 16px; font-weight: bold; }}\n\
         .empty {{ color: #888; font-style: italic; }}\n\
         .badge {{ display: inline-block; padding: 1px 8px; border-radius: 10px; font-size: 10px; color: #fff; }}\n\
         .badge-success {{ background: #2e7d32; }}\n\
         .badge-info {{ background: #1565c0; }}\n\
         .badge-warning {{ background: #ef8f00; }}\n\
         .badge-danger {{ background: #c62828; }}\n\
         .badge-neutral {{ background: #757575; }}\n\
         footer {{ margin-top: 24px; border-top: 1px solid #ddd; padding-top: 6px; color: #666; font-size: 9px; text-align: center; }}\n"
    )
}

/// The branded header: left logo, institution and title with generation
/// date, right logo.
pub(crate) fn header_html(style: &DocumentStyle, title: &str, generated_at: NaiveDateTime) -> String {
    let logo = |src: &str| {
        if src.is_empty() {
            "<span></span>".to_string()
        } else {
            format!("<img src=\"{}\" alt=\"\">", esc(src))
        }
    };
    format!(
        "<div class=\"header\">{}<div class=\"titles\"><div class=\"institution\">{}</div>\
         <h1>{}</h1><div class=\"generated\">Generado el {}</div></div>{}</div>\n",
        logo(&style.logo_left),
        esc(&style.institution),
        esc(title),
        generated_at.format("%d/%m/%Y"),
        logo(&style.logo_right),
    )
}

/// A table cell, as a badge span when it carries a tone.
pub(crate) fn cell_html(cell: &Cell) -> String {
    match cell.tone {
        Some(tone) => format!(
            "<span class=\"badge badge-{}\">{}</span>",
            tone.css_class(),
            esc(&cell.text)
        ),
        None => esc(&cell.text),
    }
}

/// A grid table with header and zebra rows.
pub(crate) fn grid_html(table: &ShapedTable) -> String {
    let mut out = String::from("<table><thead><tr>");
    for header in &table.headers {
        out.push_str(&format!("<th>{}</th>", esc(header)));
    }
    out.push_str("</tr></thead><tbody>\n");
    for row in &table.rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str(&format!("<td>{}</td>", cell_html(cell)));
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</tbody></table>\n");
    out
}

fn section_html(table: &ShapedTable) -> String {
    let mut out = format!(
        "<section id=\"{}\"><h2>{}</h2>\n",
        esc(table.key),
        esc(table.title)
    );
    if table.is_empty() {
        out.push_str("<p class=\"empty\">No hay datos disponibles</p>\n");
    } else {
        match table.layout {
            TableLayout::Summary => {
                out.push_str("<div class=\"cards\">");
                for row in &table.rows {
                    let label = row.first().map(|c| c.text.as_str()).unwrap_or_default();
                    let value = row.get(1).map(|c| c.text.as_str()).unwrap_or_default();
                    out.push_str(&format!(
                        "<div class=\"card\"><div class=\"label\">{}</div><div class=\"value\">{}</div></div>",
                        esc(label),
                        esc(value)
                    ));
                }
                out.push_str("</div>\n");
            }
            TableLayout::Grid => out.push_str(&grid_html(table)),
        }
    }
    out.push_str("</section>\n");
    out
}

/// Renders a report as a printable A4 HTML document.
pub fn render_document(
    report: &ShapedReport,
    style: &DocumentStyle,
    generated_at: NaiveDateTime,
) -> String {
    let [top, right, bottom, left] = style.margins_mm;
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"es\"><head><meta charset=\"utf-8\">");
    out.push_str(&format!("<title>{}</title>\n<style>\n", esc(report.title)));
    out.push_str(&format!(
        "@page {{ size: {}; margin: {top}mm {right}mm {bottom}mm {left}mm; }}\n\
         html {{ -webkit-print-color-adjust: exact; print-color-adjust: exact; }}\n",
        esc(&style.page_format)
    ));
    out.push_str(&base_css(style));
    out.push_str("</style></head><body>\n");

    out.push_str(&header_html(style, report.title, generated_at));
    for table in &report.tables {
        out.push_str(&section_html(table));
    }
    out.push_str(&format!(
        "<footer>{} · Reporte generado el {}</footer>\n",
        esc(&style.institution),
        generated_at.format("%d/%m/%Y %H:%M")
    ));
    out.push_str("</body></html>\n");
    out
}
