//! Queries for the listados. Only explicit date filters apply.

use crate::models::{ListadoKind, ReportFilters};

use super::sql::{push_filters, FilterColumns, Query, ENROLMENT_JOINS, STUDENT_NAME};

const STUDENT_JOIN: &str = " JOIN estudiantes e ON e.id = i.estudiante_id";

/// Builds the query for one listado.
pub fn listado(kind: ListadoKind, filters: &ReportFilters) -> Query {
    match kind {
        ListadoKind::Inscripciones => inscripciones(filters),
        ListadoKind::Pagos => pagos(filters),
        ListadoKind::Certificados => certificados(filters),
        ListadoKind::Asistencia => asistencia(filters),
    }
}

fn inscripciones(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT i.id, {STUDENT_NAME} AS estudiante, e.email, e.tipo_estudiante, \
         cu.nombre AS curso, pa.nombre AS paralelo, i.estado, i.calificacion_final, \
         i.created_at::date AS fecha_inscripcion"
    ));
    qb.push(ENROLMENT_JOINS).push(STUDENT_JOIN).push(" WHERE TRUE");
    let columns = FilterColumns {
        date: Some("i.created_at"),
        curso: Some("cu.id"),
        instructor: Some("pa.instructor_id"),
        tipo_estudiante: Some("e.tipo_estudiante"),
        estado: Some("i.estado"),
        ..Default::default()
    };
    push_filters(&mut qb, filters, &columns);
    qb.push(" ORDER BY i.created_at DESC, i.id DESC");
    qb
}

fn pagos(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT p.id, {STUDENT_NAME} AS estudiante, cu.nombre AS curso, \
         p.monto, p.metodo, p.estado, p.fecha_pago \
         FROM pagos p JOIN inscripciones i ON i.id = p.inscripcion_id \
         JOIN paralelos pa ON pa.id = i.paralelo_id \
         JOIN cursos cu ON cu.id = pa.curso_id"
    ));
    qb.push(STUDENT_JOIN).push(" WHERE TRUE");
    let columns = FilterColumns {
        date: Some("p.fecha_pago"),
        curso: Some("cu.id"),
        estado: Some("p.estado"),
        metodo: Some("p.metodo"),
        ..Default::default()
    };
    push_filters(&mut qb, filters, &columns);
    qb.push(" ORDER BY p.fecha_pago DESC NULLS LAST, p.id DESC");
    qb
}

fn certificados(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT ce.codigo_verificacion, {STUDENT_NAME} AS estudiante, cu.nombre AS curso, \
         i.calificacion_final, ce.fecha_emision \
         FROM certificados ce JOIN inscripciones i ON i.id = ce.inscripcion_id \
         JOIN paralelos pa ON pa.id = i.paralelo_id \
         JOIN cursos cu ON cu.id = pa.curso_id"
    ));
    qb.push(STUDENT_JOIN).push(" WHERE TRUE");
    let columns = FilterColumns {
        date: Some("ce.fecha_emision"),
        curso: Some("cu.id"),
        ..Default::default()
    };
    push_filters(&mut qb, filters, &columns);
    qb.push(" ORDER BY ce.fecha_emision DESC NULLS LAST");
    qb
}

fn asistencia(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT {STUDENT_NAME} AS estudiante, cu.nombre AS curso, pa.nombre AS paralelo, \
         COUNT(a.id) AS sesiones, \
         COUNT(a.id) FILTER (WHERE a.estado = 'presente') AS presentes, \
         COUNT(a.id) FILTER (WHERE a.estado = 'ausente') AS ausentes, \
         COUNT(a.id) FILTER (WHERE a.estado = 'justificado') AS justificados, \
         COUNT(a.id) FILTER (WHERE a.estado = 'tardanza') AS tardanzas, \
         ROUND(COUNT(a.id) FILTER (WHERE a.estado = 'presente') * 100.0 \
         / NULLIF(COUNT(a.id), 0), 2) AS porcentaje_asistencia \
         FROM asistencias a JOIN inscripciones i ON i.id = a.inscripcion_id \
         JOIN paralelos pa ON pa.id = i.paralelo_id \
         JOIN cursos cu ON cu.id = pa.curso_id"
    ));
    qb.push(STUDENT_JOIN).push(" WHERE TRUE");
    let columns = FilterColumns {
        date: Some("a.fecha"),
        curso: Some("cu.id"),
        instructor: Some("pa.instructor_id"),
        ..Default::default()
    };
    push_filters(&mut qb, filters, &columns);
    qb.push(
        " GROUP BY i.id, e.nombre, e.apellido, cu.nombre, pa.nombre \
         ORDER BY estudiante, curso",
    );
    qb
}
