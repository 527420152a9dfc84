//! Report identities and export formats.

/// The tabular "listado" report variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListadoKind {
    /// Enrolments with student, section and status.
    Inscripciones,
    /// Payments with amount, method and status.
    Pagos,
    /// Issued certificates.
    Certificados,
    /// Attendance totals per enrolment.
    Asistencia,
}

impl ListadoKind {
    /// All listado kinds, in menu order.
    pub const ALL: [ListadoKind; 4] = [
        ListadoKind::Inscripciones,
        ListadoKind::Pagos,
        ListadoKind::Certificados,
        ListadoKind::Asistencia,
    ];

    /// Parses a URL slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// URL slug and JSON key.
    pub fn slug(self) -> &'static str {
        match self {
            ListadoKind::Inscripciones => "inscripciones",
            ListadoKind::Pagos => "pagos",
            ListadoKind::Certificados => "certificados",
            ListadoKind::Asistencia => "asistencia",
        }
    }

    /// Document title.
    pub fn title(self) -> &'static str {
        match self {
            ListadoKind::Inscripciones => "Listado de Inscripciones",
            ListadoKind::Pagos => "Listado de Pagos",
            ListadoKind::Certificados => "Listado de Certificados",
            ListadoKind::Asistencia => "Listado de Asistencia",
        }
    }
}

/// One of the fixed report definitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportKind {
    /// Academic performance (pass threshold 51 on a 0–100 scale).
    Academicos,
    /// System-wide statistics (pass threshold 7 on a 0–10 scale).
    Estadisticas,
    /// Revenue and payments.
    Financieros,
    /// A tabular listing.
    Listado(ListadoKind),
}

impl ReportKind {
    /// Parses the `reportType` path segment of the export endpoint.
    ///
    /// ```
    /// use academy_reports::models::{ListadoKind, ReportKind};
    ///
    /// assert_eq!(ReportKind::from_slug("financieros"), Some(ReportKind::Financieros));
    /// assert_eq!(
    ///     ReportKind::from_slug("pagos"),
    ///     Some(ReportKind::Listado(ListadoKind::Pagos))
    /// );
    /// assert_eq!(ReportKind::from_slug("nominas"), None);
    /// ```
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "academicos" => Some(ReportKind::Academicos),
            "estadisticas" => Some(ReportKind::Estadisticas),
            "financieros" => Some(ReportKind::Financieros),
            other => ListadoKind::from_slug(other).map(ReportKind::Listado),
        }
    }

    /// URL slug, also used in the download filename.
    pub fn slug(self) -> &'static str {
        match self {
            ReportKind::Academicos => "academicos",
            ReportKind::Estadisticas => "estadisticas",
            ReportKind::Financieros => "financieros",
            ReportKind::Listado(kind) => kind.slug(),
        }
    }

    /// Document title.
    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Academicos => "Reporte Académico",
            ReportKind::Estadisticas => "Estadísticas del Sistema",
            ReportKind::Financieros => "Reporte Financiero",
            ReportKind::Listado(kind) => kind.title(),
        }
    }

    /// Query-string filter keys this report understands.
    pub fn filter_keys(self) -> &'static [&'static str] {
        match self {
            ReportKind::Academicos => &["fecha_inicio", "fecha_fin", "curso_id", "instructor_id"],
            ReportKind::Estadisticas => &["fecha_inicio", "fecha_fin", "tipo_estudiante"],
            ReportKind::Financieros => &["fecha_inicio", "fecha_fin", "curso_id", "metodo"],
            ReportKind::Listado(ListadoKind::Inscripciones) => &[
                "fecha_inicio",
                "fecha_fin",
                "curso_id",
                "instructor_id",
                "tipo_estudiante",
                "estado",
            ],
            ReportKind::Listado(ListadoKind::Pagos) => {
                &["fecha_inicio", "fecha_fin", "curso_id", "estado", "metodo"]
            }
            ReportKind::Listado(ListadoKind::Certificados) => {
                &["fecha_inicio", "fecha_fin", "curso_id"]
            }
            ReportKind::Listado(ListadoKind::Asistencia) => {
                &["fecha_inicio", "fecha_fin", "curso_id", "instructor_id"]
            }
        }
    }
}

/// Binary export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// OOXML workbook.
    Excel,
    /// Paginated PDF.
    Pdf,
}

impl ExportFormat {
    /// Parses the `format` query parameter; absent or blank means Excel.
    ///
    /// Returns `None` for any other value.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        match value.map(str::trim) {
            None | Some("") => Some(ExportFormat::Excel),
            Some(raw) if raw.eq_ignore_ascii_case("excel") => Some(ExportFormat::Excel),
            Some(raw) if raw.eq_ignore_ascii_case("pdf") => Some(ExportFormat::Pdf),
            Some(_) => None,
        }
    }

    /// File extension for downloads.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// MIME type of the response body.
    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}
