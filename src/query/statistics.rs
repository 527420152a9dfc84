//! Queries for the system statistics report. Grades are on a 0–10 scale.

use rust_decimal::Decimal;

use crate::models::ReportFilters;

use super::sql::{
    push_filters, push_pass_rate, push_share_of_total, FilterColumns, Query, ENROLMENT_JOINS,
};

/// Minimum assessment grade that counts as a pass.
pub const PASS_MARK: Decimal = Decimal::from_parts(7, 0, 0, false, 0);

const COLUMNS: FilterColumns = FilterColumns {
    date: Some("i.created_at"),
    default_window: true,
    curso: None,
    instructor: None,
    tipo_estudiante: Some("e.tipo_estudiante"),
    estado: None,
    metodo: None,
};

const STUDENT_JOIN: &str = " JOIN estudiantes e ON e.id = i.estudiante_id";

/// System-wide counters. Filters do not apply.
pub fn resumen() -> Query {
    Query::new(
        "SELECT (SELECT COUNT(*) FROM estudiantes) AS estudiantes, \
         (SELECT COUNT(*) FROM instructores) AS instructores, \
         (SELECT COUNT(*) FROM cursos WHERE activo) AS cursos_activos, \
         (SELECT COUNT(*) FROM paralelos \
           WHERE CURRENT_DATE BETWEEN fecha_inicio AND fecha_fin) AS paralelos_activos, \
         (SELECT COUNT(*) FROM inscripciones WHERE estado = 'activo') AS inscripciones_activas, \
         (SELECT COUNT(*) FROM certificados) AS certificados_emitidos, \
         (SELECT SUM(monto) FROM pagos WHERE estado = 'completado') AS ingresos_totales",
    )
}

/// Enrolments by status.
pub fn inscripciones_por_estado(filters: &ReportFilters) -> Query {
    let mut qb = Query::new("SELECT i.estado, COUNT(i.id) AS cantidad, ");
    push_share_of_total(&mut qb, "i.id");
    qb.push(" AS porcentaje FROM inscripciones i")
        .push(STUDENT_JOIN)
        .push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(" GROUP BY i.estado ORDER BY cantidad DESC");
    qb
}

/// The ten courses with most enrolments.
pub fn cursos_populares(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT cu.nombre AS curso, cu.categoria, cu.nivel, \
         COUNT(i.id) AS inscripciones, cu.costo",
    );
    qb.push(ENROLMENT_JOINS).push(STUDENT_JOIN).push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(
        " GROUP BY cu.id, cu.nombre, cu.categoria, cu.nivel, cu.costo \
         ORDER BY inscripciones DESC LIMIT 10",
    );
    qb
}

/// Enrolments per month, oldest first.
pub fn inscripciones_mensuales(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT TO_CHAR(i.created_at, 'YYYY-MM') AS mes, \
         COUNT(i.id) AS inscripciones, \
         COUNT(i.id) FILTER (WHERE i.estado = 'completado') AS completadas, \
         COUNT(i.id) FILTER (WHERE i.estado = 'cancelado') AS canceladas \
         FROM inscripciones i",
    );
    qb.push(STUDENT_JOIN).push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(" GROUP BY mes ORDER BY mes");
    qb
}

/// Assessment results per course category, best approval rate first.
pub fn rendimiento_categorias(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT cu.categoria, COUNT(ca.nota) AS evaluados, \
         COUNT(ca.nota) FILTER (WHERE ca.nota >= ",
    );
    qb.push_bind(PASS_MARK)
        .push(") AS aprobados, ROUND(AVG(ca.nota), 2) AS promedio, ");
    push_pass_rate(&mut qb, "ca.nota", PASS_MARK);
    qb.push(" AS tasa_aprobacion FROM calificaciones ca")
        .push(" JOIN inscripciones i ON i.id = ca.inscripcion_id")
        .push(" JOIN paralelos pa ON pa.id = i.paralelo_id")
        .push(" JOIN cursos cu ON cu.id = pa.curso_id")
        .push(STUDENT_JOIN)
        .push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(" GROUP BY cu.categoria ORDER BY tasa_aprobacion DESC NULLS LAST");
    qb
}

/// Students by type. Only the student-type filter applies.
pub fn estudiantes_por_tipo(filters: &ReportFilters) -> Query {
    let mut qb = Query::new("SELECT e.tipo_estudiante AS tipo, COUNT(e.id) AS estudiantes, ");
    push_share_of_total(&mut qb, "e.id");
    qb.push(" AS porcentaje FROM estudiantes e WHERE TRUE");
    let columns = FilterColumns {
        date: None,
        default_window: false,
        ..COLUMNS
    };
    push_filters(&mut qb, filters, &columns);
    qb.push(" GROUP BY e.tipo_estudiante ORDER BY estudiantes DESC");
    qb
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn filtered() -> ReportFilters {
        ReportFilters {
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 1, 1),
            tipo_estudiante: Some("interno".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_summary_has_no_placeholders() {
        let qb = resumen();
        assert!(!qb.sql().contains('$'));
        assert!(qb.sql().contains("AS ingresos_totales"));
    }

    #[test]
    fn test_popular_courses_limited_to_ten() {
        let sql = cursos_populares(&filtered()).sql().to_string();
        assert!(sql.ends_with("ORDER BY inscripciones DESC LIMIT 10"));
        assert!(sql.contains("AND i.created_at >= $1"));
        assert!(sql.contains("AND e.tipo_estudiante = $2"));
    }

    #[test]
    fn test_category_pass_mark_is_seven() {
        assert_eq!(PASS_MARK, Decimal::from(7));
        let sql = rendimiento_categorias(&ReportFilters::default()).sql().to_string();
        assert!(sql.contains("ca.nota >= $1) AS aprobados"));
        assert!(sql.contains("ca.nota >= $2) * 100.0"));
    }

    #[test]
    fn test_student_types_ignore_dates() {
        let sql = estudiantes_por_tipo(&filtered()).sql().to_string();
        assert!(!sql.contains("created_at"));
        assert!(!sql.contains("NOW()"));
        assert!(sql.contains("AND e.tipo_estudiante = $1"));
    }

    #[test]
    fn test_status_breakdown_default_window() {
        let sql = inscripciones_por_estado(&ReportFilters::default()).sql().to_string();
        assert!(sql.contains("i.created_at >= NOW() - INTERVAL '1 year'"));
        assert!(sql.ends_with("GROUP BY i.estado ORDER BY cantidad DESC"));
    }
}
