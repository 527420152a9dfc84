//! Rows of the system statistics report.

use rust_decimal::Decimal;
use sqlx::FromRow;

/// System-wide counters. Never filtered.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ResumenEstadisticas {
    /// Registered students.
    pub estudiantes: Option<i64>,
    /// Registered instructors.
    pub instructores: Option<i64>,
    /// Courses flagged active.
    pub cursos_activos: Option<i64>,
    /// Sections running today.
    pub paralelos_activos: Option<i64>,
    /// Enrolments with status `activo`.
    pub inscripciones_activas: Option<i64>,
    /// Certificates issued.
    pub certificados_emitidos: Option<i64>,
    /// Sum of confirmed payments.
    pub ingresos_totales: Option<Decimal>,
}

/// Enrolments grouped by status.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InscripcionesEstado {
    /// Enrolment status (enum value).
    pub estado: String,
    /// Enrolments with the status.
    pub cantidad: Option<i64>,
    /// Share of all enrolments, in percent.
    pub porcentaje: Option<Decimal>,
}

/// A course ranked by enrolments.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct CursoPopular {
    /// Course name.
    pub curso: String,
    /// Course category (enum value).
    pub categoria: String,
    /// Course level (enum value).
    pub nivel: String,
    /// Enrolments.
    pub inscripciones: Option<i64>,
    /// Course price.
    pub costo: Option<Decimal>,
}

/// Enrolments per calendar month.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct InscripcionMensual {
    /// Month as `YYYY-MM`.
    pub mes: String,
    /// Enrolments created in the month.
    pub inscripciones: Option<i64>,
    /// Of which completed.
    pub completadas: Option<i64>,
    /// Of which cancelled.
    pub canceladas: Option<i64>,
}

/// Assessment results per course category.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RendimientoCategoria {
    /// Course category (enum value).
    pub categoria: String,
    /// Graded assessments.
    pub evaluados: Option<i64>,
    /// Assessments at or above the pass mark.
    pub aprobados: Option<i64>,
    /// Mean grade.
    pub promedio: Option<Decimal>,
    /// Approval rate in percent.
    pub tasa_aprobacion: Option<Decimal>,
}

/// Students grouped by type.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EstudiantesTipo {
    /// Student type (enum value).
    pub tipo: String,
    /// Students of the type.
    pub estudiantes: Option<i64>,
    /// Share of all students, in percent.
    pub porcentaje: Option<Decimal>,
}

/// Everything the statistics report queries return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatisticsData {
    /// Unfiltered counters.
    pub resumen: ResumenEstadisticas,
    /// Enrolments by status.
    pub inscripciones_por_estado: Vec<InscripcionesEstado>,
    /// Top ten courses.
    pub cursos_populares: Vec<CursoPopular>,
    /// Enrolments per month.
    pub inscripciones_mensuales: Vec<InscripcionMensual>,
    /// Results per category.
    pub rendimiento_categorias: Vec<RendimientoCategoria>,
    /// Students by type.
    pub estudiantes_por_tipo: Vec<EstudiantesTipo>,
}
