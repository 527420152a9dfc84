//! Rows of the academic performance report.

use rust_decimal::Decimal;
use sqlx::FromRow;

/// Headline figures for the academic report.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ResumenAcademico {
    /// Distinct courses with enrolments in the window.
    pub total_cursos: Option<i64>,
    /// Enrolments in the window.
    pub total_inscripciones: Option<i64>,
    /// Enrolments with status `completado`.
    pub inscripciones_completadas: Option<i64>,
    /// Mean final grade over graded enrolments.
    pub promedio_general: Option<Decimal>,
    /// Share of graded enrolments at or above the pass mark.
    pub tasa_aprobacion: Option<Decimal>,
    /// Certificates issued for enrolments in the window.
    pub certificados_emitidos: Option<i64>,
}

/// Per-course results.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RendimientoCurso {
    /// Course code.
    pub codigo: String,
    /// Course name.
    pub curso: String,
    /// Course category (enum value).
    pub categoria: String,
    /// Enrolments.
    pub inscritos: Option<i64>,
    /// Graded enrolments at or above the pass mark.
    pub aprobados: Option<i64>,
    /// Graded enrolments below the pass mark.
    pub reprobados: Option<i64>,
    /// Mean final grade.
    pub promedio: Option<Decimal>,
    /// Approval rate in percent; `None` when nobody is graded.
    pub tasa_aprobacion: Option<Decimal>,
    /// Mean assessment score normalised to 0–100.
    pub rendimiento_evaluaciones: Option<Decimal>,
}

/// Per-instructor results.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct RendimientoInstructor {
    /// Instructor full name.
    pub instructor: String,
    /// Sections taught.
    pub paralelos: Option<i64>,
    /// Distinct students taught.
    pub estudiantes: Option<i64>,
    /// Mean final grade.
    pub promedio: Option<Decimal>,
    /// Approval rate in percent.
    pub tasa_aprobacion: Option<Decimal>,
}

/// Attendance totals per section.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct AsistenciaParalelo {
    /// Course name.
    pub curso: String,
    /// Section name, when the section has one.
    pub paralelo: Option<String>,
    /// Instructor full name.
    pub instructor: String,
    /// Records marked `presente`.
    pub presentes: Option<i64>,
    /// Records marked `ausente`.
    pub ausentes: Option<i64>,
    /// Records marked `justificado`.
    pub justificados: Option<i64>,
    /// Records marked `tardanza`.
    pub tardanzas: Option<i64>,
    /// Present records over all records, in percent.
    pub porcentaje_asistencia: Option<Decimal>,
}

/// Everything the academic report queries return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AcademicData {
    /// Summary figures.
    pub resumen: ResumenAcademico,
    /// Per-course table.
    pub rendimiento_cursos: Vec<RendimientoCurso>,
    /// Per-instructor table.
    pub rendimiento_instructores: Vec<RendimientoInstructor>,
    /// Per-section attendance table.
    pub asistencia_paralelos: Vec<AsistenciaParalelo>,
}
