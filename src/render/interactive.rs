//! Interactive HTML page for a listado: filter form, client-side search and
//! status badges.

use std::collections::BTreeSet;

use chrono::NaiveDateTime;

use crate::models::{ReportFilters, ReportKind};
use crate::shaping::ShapedReport;

use super::html::{base_css, esc, grid_html, header_html, DocumentStyle};

const PAGE_CSS: &str = "body { margin: 24px; }\n\
     form.filters { display: flex; flex-wrap: wrap; gap: 8px; align-items: flex-end; margin-bottom: 12px; }\n\
     form.filters label { display: flex; flex-direction: column; font-size: 10px; color: #555; }\n\
     .toolbar { display: flex; gap: 8px; margin-bottom: 8px; }\n\
     .toolbar input { flex: 1; padding: 4px; }\n\
     .count { color: #666; margin: 6px 0; }\n";

const PAGE_JS: &str = "(function () {\n\
     var search = document.getElementById('buscar');\n\
     var status = document.getElementById('estado-vista');\n\
     var rows = Array.prototype.slice.call(document.querySelectorAll('tbody tr'));\n\
     var count = document.getElementById('conteo');\n\
     function apply() {\n\
       var term = search.value.toLowerCase();\n\
       var wanted = status ? status.value : '';\n\
       var shown = 0;\n\
       rows.forEach(function (row) {\n\
         var badge = row.querySelector('.badge');\n\
         var okText = row.textContent.toLowerCase().indexOf(term) !== -1;\n\
         var okStatus = !wanted || (badge && badge.textContent === wanted);\n\
         row.style.display = okText && okStatus ? '' : 'none';\n\
         if (okText && okStatus) { shown++; }\n\
       });\n\
       count.textContent = shown + ' registros';\n\
     }\n\
     search.addEventListener('input', apply);\n\
     if (status) { status.addEventListener('change', apply); }\n\
     apply();\n\
   })();\n";

fn label(key: &str) -> &'static str {
    match key {
        "fecha_inicio" => "Desde",
        "fecha_fin" => "Hasta",
        "curso_id" => "Curso (ID)",
        "instructor_id" => "Instructor (ID)",
        "tipo_estudiante" => "Tipo de estudiante",
        "estado" => "Estado",
        "metodo" => "Método",
        _ => "Filtro",
    }
}

fn input_type(key: &str) -> &'static str {
    match key {
        "fecha_inicio" | "fecha_fin" => "date",
        "curso_id" | "instructor_id" => "number",
        _ => "text",
    }
}

fn filter_form(kind: ReportKind, filters: &ReportFilters) -> String {
    let active = filters.active_pairs();
    let mut out = String::from("<form class=\"filters\" method=\"get\">");
    for key in kind.filter_keys() {
        let value = active
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .unwrap_or_default();
        out.push_str(&format!(
            "<label>{}<input type=\"{}\" name=\"{}\" value=\"{}\"></label>",
            esc(label(key)),
            input_type(key),
            esc(key),
            esc(value)
        ));
    }
    out.push_str("<button type=\"submit\">Filtrar</button></form>\n");
    out
}

fn status_select(report: &ShapedReport) -> String {
    let Some(table) = report.tables.first() else {
        return String::new();
    };
    let Some(col) = table.badge_column() else {
        return String::new();
    };
    let statuses: BTreeSet<&str> = table
        .rows
        .iter()
        .filter_map(|row| row.get(col))
        .map(|cell| cell.text.as_str())
        .collect();

    let mut out = String::from("<select id=\"estado-vista\"><option value=\"\">Todos los estados</option>");
    for status in statuses {
        out.push_str(&format!(
            "<option value=\"{0}\">{0}</option>",
            esc(status)
        ));
    }
    out.push_str("</select>");
    out
}

/// Renders a shaped listado as a standalone interactive page.
pub fn render_listing_page(
    report: &ShapedReport,
    filters: &ReportFilters,
    style: &DocumentStyle,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::with_capacity(16 * 1024);
    out.push_str("<!DOCTYPE html>\n<html lang=\"es\"><head><meta charset=\"utf-8\">");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    out.push_str(&format!("<title>{}</title>\n<style>\n", esc(report.title)));
    out.push_str(&base_css(style));
    out.push_str(PAGE_CSS);
    out.push_str("</style></head><body>\n");

    out.push_str(&header_html(style, report.title, generated_at));
    out.push_str(&filter_form(report.kind, filters));
    out.push_str(&format!(
        "<div class=\"toolbar\"><input id=\"buscar\" type=\"search\" placeholder=\"Buscar...\">{}</div>\n",
        status_select(report)
    ));
    out.push_str("<div id=\"conteo\" class=\"count\"></div>\n");

    for table in &report.tables {
        if table.is_empty() {
            out.push_str("<p class=\"empty\">No hay datos disponibles</p>\n");
        } else {
            out.push_str(&grid_html(table));
        }
    }

    out.push_str("<script>\n");
    out.push_str(PAGE_JS);
    out.push_str("</script>\n</body></html>\n");
    out
}
