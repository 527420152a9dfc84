//! Queries for the academic report. Grades are on a 0–100 scale.

use rust_decimal::Decimal;

use crate::models::ReportFilters;

use super::sql::{
    push_filters, push_pass_rate, FilterColumns, Query, ENROLMENT_JOINS, INSTRUCTOR_NAME,
};

/// Minimum final grade that counts as a pass.
pub const PASS_MARK: Decimal = Decimal::from_parts(51, 0, 0, false, 0);

const COLUMNS: FilterColumns = FilterColumns {
    date: Some("i.created_at"),
    default_window: true,
    curso: Some("cu.id"),
    instructor: Some("pa.instructor_id"),
    tipo_estudiante: None,
    estado: None,
    metodo: None,
};

/// Headline figures.
pub fn resumen(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT COUNT(DISTINCT cu.id) AS total_cursos, \
         COUNT(i.id) AS total_inscripciones, \
         COUNT(i.id) FILTER (WHERE i.estado = 'completado') AS inscripciones_completadas, \
         ROUND(AVG(i.calificacion_final), 2) AS promedio_general, ",
    );
    push_pass_rate(&mut qb, "i.calificacion_final", PASS_MARK);
    qb.push(" AS tasa_aprobacion, COUNT(ce.id) AS certificados_emitidos");
    qb.push(ENROLMENT_JOINS);
    qb.push(" LEFT JOIN certificados ce ON ce.inscripcion_id = i.id WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb
}

/// Results per course, best approval rate first.
pub fn rendimiento_cursos(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT cu.codigo, cu.nombre AS curso, cu.categoria, \
         COUNT(i.id) AS inscritos, \
         COUNT(i.id) FILTER (WHERE i.calificacion_final >= ",
    );
    qb.push_bind(PASS_MARK)
        .push(") AS aprobados, COUNT(i.id) FILTER (WHERE i.calificacion_final < ")
        .push_bind(PASS_MARK)
        .push(") AS reprobados, ROUND(AVG(i.calificacion_final), 2) AS promedio, ");
    push_pass_rate(&mut qb, "i.calificacion_final", PASS_MARK);
    qb.push(" AS tasa_aprobacion, ROUND(AVG(ev.rendimiento), 2) AS rendimiento_evaluaciones");
    qb.push(ENROLMENT_JOINS);
    qb.push(
        " LEFT JOIN (SELECT inscripcion_id, \
         AVG(nota * 100.0 / NULLIF(nota_maxima, 0)) AS rendimiento \
         FROM calificaciones GROUP BY inscripcion_id) ev ON ev.inscripcion_id = i.id \
         WHERE TRUE",
    );
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(
        " GROUP BY cu.id, cu.codigo, cu.nombre, cu.categoria \
         ORDER BY tasa_aprobacion DESC NULLS LAST, inscritos DESC",
    );
    qb
}

/// Results per instructor, best average first.
pub fn rendimiento_instructores(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT {INSTRUCTOR_NAME} AS instructor, \
         COUNT(DISTINCT pa.id) AS paralelos, \
         COUNT(DISTINCT i.estudiante_id) AS estudiantes, \
         ROUND(AVG(i.calificacion_final), 2) AS promedio, "
    ));
    push_pass_rate(&mut qb, "i.calificacion_final", PASS_MARK);
    qb.push(" AS tasa_aprobacion");
    qb.push(ENROLMENT_JOINS);
    qb.push(" JOIN instructores ins ON ins.id = pa.instructor_id WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(
        " GROUP BY ins.id, ins.nombre, ins.apellido \
         ORDER BY promedio DESC NULLS LAST",
    );
    qb
}

/// Attendance per section, best attendance first.
pub fn asistencia_paralelos(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT cu.nombre AS curso, pa.nombre AS paralelo, {INSTRUCTOR_NAME} AS instructor, \
         COUNT(a.id) FILTER (WHERE a.estado = 'presente') AS presentes, \
         COUNT(a.id) FILTER (WHERE a.estado = 'ausente') AS ausentes, \
         COUNT(a.id) FILTER (WHERE a.estado = 'justificado') AS justificados, \
         COUNT(a.id) FILTER (WHERE a.estado = 'tardanza') AS tardanzas, \
         ROUND(COUNT(a.id) FILTER (WHERE a.estado = 'presente') * 100.0 \
         / NULLIF(COUNT(a.id), 0), 2) AS porcentaje_asistencia \
         FROM asistencias a \
         JOIN inscripciones i ON i.id = a.inscripcion_id \
         JOIN paralelos pa ON pa.id = i.paralelo_id \
         JOIN cursos cu ON cu.id = pa.curso_id \
         JOIN instructores ins ON ins.id = pa.instructor_id \
         WHERE TRUE"
    ));
    let columns = FilterColumns {
        date: Some("a.fecha"),
        ..COLUMNS
    };
    push_filters(&mut qb, filters, &columns);
    qb.push(
        " GROUP BY pa.id, cu.nombre, pa.nombre, ins.nombre, ins.apellido \
         ORDER BY porcentaje_asistencia DESC NULLS LAST",
    );
    qb
}
