//! Query → Shape → Render orchestration.
//!
//! Each call is independent: nothing is cached between requests and the
//! same inputs against the same data produce the same output.

use chrono::{Local, NaiveDateTime};

use crate::config::AppConfig;
use crate::error::ReportResult;
use crate::models::{ExportFormat, ReportData, ReportFilters, ReportKind};
use crate::query::ReportSource;
use crate::render::{render_document, render_workbook, DocumentStyle, PdfEngine, WorkbookStyle};
use crate::shaping::{shape_report, ShapedReport};

/// A rendered export ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Format the artifact was rendered in.
    pub format: ExportFormat,
    /// Download name, `reporte-{report}.{ext}`.
    pub filename: String,
    /// MIME type.
    pub content_type: &'static str,
    /// File contents.
    pub bytes: Vec<u8>,
}

/// Runs the queries of one report.
pub async fn fetch_report(
    source: &dyn ReportSource,
    kind: ReportKind,
    filters: &ReportFilters,
) -> ReportResult<ReportData> {
    Ok(match kind {
        ReportKind::Academicos => ReportData::Academic(source.academic(filters).await?),
        ReportKind::Financieros => ReportData::Financial(source.financial(filters).await?),
        ReportKind::Estadisticas => ReportData::Statistics(source.statistics(filters).await?),
        ReportKind::Listado(listado) => ReportData::Listado(source.listado(listado, filters).await?),
    })
}

/// Runs the queries of one report and shapes the result.
pub async fn build_report(
    source: &dyn ReportSource,
    kind: ReportKind,
    filters: &ReportFilters,
) -> ReportResult<ShapedReport> {
    let data = fetch_report(source, kind, filters).await?;
    Ok(shape_report(&data))
}

/// Renders an already shaped report in the requested format.
pub async fn render_export(
    report: &ShapedReport,
    format: ExportFormat,
    pdf: &dyn PdfEngine,
    config: &AppConfig,
    generated_at: NaiveDateTime,
) -> ReportResult<ExportArtifact> {
    let bytes = match format {
        ExportFormat::Excel => render_workbook(report, &WorkbookStyle::from_config(config))?,
        ExportFormat::Pdf => {
            let html = render_document(report, &DocumentStyle::from_config(config), generated_at);
            pdf.render(&html).await?
        }
    };

    Ok(ExportArtifact {
        format,
        filename: format!("reporte-{}.{}", report.kind.slug(), format.extension()),
        content_type: format.content_type(),
        bytes,
    })
}

/// Full pipeline: query, shape and render one report.
pub async fn export_report(
    source: &dyn ReportSource,
    pdf: &dyn PdfEngine,
    config: &AppConfig,
    kind: ReportKind,
    format: ExportFormat,
    filters: &ReportFilters,
) -> ReportResult<ExportArtifact> {
    let report = build_report(source, kind, filters).await?;
    render_export(&report, format, pdf, config, Local::now().naive_local()).await
}
