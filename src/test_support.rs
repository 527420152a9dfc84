//! In-memory collaborators for unit tests.

use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::NaiveDate;
use futures_util::future::BoxFuture;
use rust_decimal::Decimal;

use crate::error::{ReportError, ReportResult};
use crate::models::*;
use crate::query::ReportSource;
use crate::render::PdfEngine;

pub(crate) fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A report source serving fixed data and counting calls.
#[derive(Default)]
pub(crate) struct FixtureSource {
    pub calls: AtomicUsize,
    pub fail: bool,
    pub academic: AcademicData,
    pub financial: FinancialData,
    pub statistics: StatisticsData,
    pub inscripciones: Vec<InscripcionListado>,
    pub last_filters: Mutex<Option<ReportFilters>>,
}

impl FixtureSource {
    /// A source with a small but complete data set.
    pub fn populated() -> Self {
        Self {
            academic: AcademicData {
                resumen: ResumenAcademico {
                    total_cursos: Some(1),
                    total_inscripciones: Some(10),
                    inscripciones_completadas: Some(6),
                    promedio_general: Some(decimal("62.35")),
                    tasa_aprobacion: Some(decimal("60.00")),
                    certificados_emitidos: Some(6),
                },
                rendimiento_cursos: vec![RendimientoCurso {
                    codigo: "PRG-101".to_string(),
                    curso: "Programación Básica".to_string(),
                    categoria: "tecnologia".to_string(),
                    inscritos: Some(10),
                    aprobados: Some(6),
                    reprobados: Some(4),
                    promedio: Some(decimal("62.35")),
                    tasa_aprobacion: Some(decimal("60.00")),
                    rendimiento_evaluaciones: Some(decimal("71.5")),
                }],
                ..Default::default()
            },
            inscripciones: vec![InscripcionListado {
                id: 1,
                estudiante: "Ana Rojas".to_string(),
                email: "ana@example.com".to_string(),
                tipo_estudiante: "interno".to_string(),
                curso: "Programación Básica".to_string(),
                paralelo: None,
                estado: "activo".to_string(),
                calificacion_final: None,
                fecha_inscripcion: NaiveDate::from_ymd_opt(2025, 2, 3),
            }],
            ..Default::default()
        }
    }

    /// A source whose every query fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self, filters: &ReportFilters) -> ReportResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_filters.lock().unwrap() = Some(filters.clone());
        if self.fail {
            return Err(ReportError::Query {
                source: sqlx::Error::PoolTimedOut,
            });
        }
        Ok(())
    }
}

impl ReportSource for FixtureSource {
    fn academic<'a>(&'a self, filters: &'a ReportFilters) -> BoxFuture<'a, ReportResult<AcademicData>> {
        Box::pin(async move {
            self.record(filters)?;
            Ok(self.academic.clone())
        })
    }

    fn financial<'a>(&'a self, filters: &'a ReportFilters) -> BoxFuture<'a, ReportResult<FinancialData>> {
        Box::pin(async move {
            self.record(filters)?;
            Ok(self.financial.clone())
        })
    }

    fn statistics<'a>(
        &'a self,
        filters: &'a ReportFilters,
    ) -> BoxFuture<'a, ReportResult<StatisticsData>> {
        Box::pin(async move {
            self.record(filters)?;
            Ok(self.statistics.clone())
        })
    }

    fn listado<'a>(
        &'a self,
        kind: ListadoKind,
        filters: &'a ReportFilters,
    ) -> BoxFuture<'a, ReportResult<ListadoRows>> {
        Box::pin(async move {
            self.record(filters)?;
            Ok(match kind {
                ListadoKind::Inscripciones => ListadoRows::Inscripciones(self.inscripciones.clone()),
                ListadoKind::Pagos => ListadoRows::Pagos(Vec::new()),
                ListadoKind::Certificados => ListadoRows::Certificados(Vec::new()),
                ListadoKind::Asistencia => ListadoRows::Asistencia(Vec::new()),
            })
        })
    }
}

/// A PDF engine that wraps the HTML it receives.
#[derive(Default)]
pub(crate) struct FakePdf {
    pub fail: bool,
    pub last_html: Mutex<Option<String>>,
}

impl PdfEngine for FakePdf {
    fn render<'a>(&'a self, html: &'a str) -> BoxFuture<'a, ReportResult<Vec<u8>>> {
        Box::pin(async move {
            *self.last_html.lock().unwrap() = Some(html.to_string());
            if self.fail {
                return Err(ReportError::render("browser exited with status 1"));
            }
            let mut bytes = b"%PDF-1.7\n".to_vec();
            bytes.extend_from_slice(html.as_bytes());
            Ok(bytes)
        })
    }
}
