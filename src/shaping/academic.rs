//! Shaping for the academic report.

use crate::models::{
    AcademicData, AsistenciaParalelo, RendimientoCurso, RendimientoInstructor, ReportKind,
};

use super::format::{count, enum_label, fixed2, or_na, percentage};
use super::table::{shape_table, Column, ShapedReport, ShapedTable};

/// Shapes academic data into its four tables.
pub fn shape_academic(data: &AcademicData) -> ShapedReport {
    let resumen = &data.resumen;
    let summary = ShapedTable::summary(
        "resumen",
        "Resumen Académico",
        vec![
            ("Total de cursos", count(resumen.total_cursos)),
            ("Total de inscripciones", count(resumen.total_inscripciones)),
            ("Inscripciones completadas", count(resumen.inscripciones_completadas)),
            ("Promedio general", fixed2(resumen.promedio_general)),
            ("Tasa de aprobación general", percentage(resumen.tasa_aprobacion)),
            ("Certificados emitidos", count(resumen.certificados_emitidos)),
        ],
    );

    let cursos = [
        Column::new("Código", |r: &RendimientoCurso| r.codigo.clone()),
        Column::new("Curso", |r: &RendimientoCurso| r.curso.clone()),
        Column::new("Categoría", |r: &RendimientoCurso| enum_label(&r.categoria)),
        Column::new("Inscritos", |r: &RendimientoCurso| count(r.inscritos)),
        Column::new("Aprobados", |r: &RendimientoCurso| count(r.aprobados)),
        Column::new("Reprobados", |r: &RendimientoCurso| count(r.reprobados)),
        Column::new("Promedio", |r: &RendimientoCurso| fixed2(r.promedio)),
        Column::new("Tasa de Aprobación", |r: &RendimientoCurso| percentage(r.tasa_aprobacion)),
        Column::new("Rendimiento en Evaluaciones", |r: &RendimientoCurso| {
            percentage(r.rendimiento_evaluaciones)
        }),
    ];

    let instructores = [
        Column::new("Instructor", |r: &RendimientoInstructor| r.instructor.clone()),
        Column::new("Paralelos", |r: &RendimientoInstructor| count(r.paralelos)),
        Column::new("Estudiantes", |r: &RendimientoInstructor| count(r.estudiantes)),
        Column::new("Promedio", |r: &RendimientoInstructor| fixed2(r.promedio)),
        Column::new("Tasa de Aprobación", |r: &RendimientoInstructor| {
            percentage(r.tasa_aprobacion)
        }),
    ];

    let asistencia = [
        Column::new("Curso", |r: &AsistenciaParalelo| r.curso.clone()),
        Column::new("Paralelo", |r: &AsistenciaParalelo| or_na(r.paralelo.as_deref())),
        Column::new("Instructor", |r: &AsistenciaParalelo| r.instructor.clone()),
        Column::new("Presentes", |r: &AsistenciaParalelo| count(r.presentes)),
        Column::new("Ausentes", |r: &AsistenciaParalelo| count(r.ausentes)),
        Column::new("Justificados", |r: &AsistenciaParalelo| count(r.justificados)),
        Column::new("Tardanzas", |r: &AsistenciaParalelo| count(r.tardanzas)),
        Column::new("% Asistencia", |r: &AsistenciaParalelo| {
            percentage(r.porcentaje_asistencia)
        }),
    ];

    ShapedReport {
        kind: ReportKind::Academicos,
        title: ReportKind::Academicos.title(),
        tables: vec![
            summary,
            shape_table(
                "rendimientoCursos",
                "Rendimiento por Curso",
                &cursos,
                &data.rendimiento_cursos,
            ),
            shape_table(
                "rendimientoInstructores",
                "Rendimiento por Instructor",
                &instructores,
                &data.rendimiento_instructores,
            ),
            shape_table(
                "asistenciaParalelos",
                "Asistencia por Paralelo",
                &asistencia,
                &data.asistencia_paralelos,
            ),
        ],
    }
}
