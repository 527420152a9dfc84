//! SQL building blocks shared by the report queries.

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

use crate::models::ReportFilters;

/// A query under construction. Owns its bound values.
pub type Query = QueryBuilder<'static, Postgres>;

/// Enrolments joined to their section and course.
pub(crate) const ENROLMENT_JOINS: &str = " FROM inscripciones i \
     JOIN paralelos pa ON pa.id = i.paralelo_id \
     JOIN cursos cu ON cu.id = pa.curso_id";

/// Student full name, never null.
pub(crate) const STUDENT_NAME: &str = "CONCAT_WS(' ', e.nombre, e.apellido)";

/// Instructor full name, never null.
pub(crate) const INSTRUCTOR_NAME: &str = "CONCAT_WS(' ', ins.nombre, ins.apellido)";

/// Which column each filter restricts in a particular query.
///
/// A `None` column means the query ignores that filter.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterColumns {
    /// Column compared against `fecha_inicio` / `fecha_fin`.
    pub date: Option<&'static str>,
    /// Apply the one-year default window when no `fecha_inicio` is given.
    pub default_window: bool,
    /// Course id column.
    pub curso: Option<&'static str>,
    /// Instructor id column.
    pub instructor: Option<&'static str>,
    /// Student type column.
    pub tipo_estudiante: Option<&'static str>,
    /// Status column.
    pub estado: Option<&'static str>,
    /// Payment method column.
    pub metodo: Option<&'static str>,
}

/// Appends ` AND ...` conditions for every active filter. Values are bound,
/// never interpolated. The query must already have an open `WHERE`.
pub fn push_filters(qb: &mut Query, filters: &ReportFilters, columns: &FilterColumns) {
    if let Some(column) = columns.date {
        match filters.fecha_inicio {
            Some(start) => {
                qb.push(format!(" AND {column} >= ")).push_bind(start);
            }
            None if columns.default_window => {
                qb.push(format!(" AND {column} >= NOW() - INTERVAL '1 year'"));
            }
            None => {}
        }
        if let Some(end) = filters.fecha_fin {
            qb.push(format!(" AND {column} < "))
                .push_bind(end)
                .push(" + INTERVAL '1 day'");
        }
    }

    if let (Some(column), Some(id)) = (columns.curso, filters.curso_id) {
        qb.push(format!(" AND {column} = ")).push_bind(id);
    }
    if let (Some(column), Some(id)) = (columns.instructor, filters.instructor_id) {
        qb.push(format!(" AND {column} = ")).push_bind(id);
    }
    if let (Some(column), Some(tipo)) = (columns.tipo_estudiante, &filters.tipo_estudiante) {
        qb.push(format!(" AND {column} = ")).push_bind(tipo.clone());
    }
    if let (Some(column), Some(estado)) = (columns.estado, &filters.estado) {
        qb.push(format!(" AND {column} = ")).push_bind(estado.clone());
    }
    if let (Some(column), Some(metodo)) = (columns.metodo, &filters.metodo) {
        qb.push(format!(" AND {column} = ")).push_bind(metodo.clone());
    }
}

/// Appends `ROUND(passed * 100.0 / NULLIF(graded, 0), 2)` for a grade
/// expression against a bound threshold. Null grades count as neither.
pub fn push_pass_rate(qb: &mut Query, grade: &str, threshold: Decimal) {
    qb.push(format!("ROUND(COUNT({grade}) FILTER (WHERE {grade} >= "))
        .push_bind(threshold)
        .push(format!(") * 100.0 / NULLIF(COUNT({grade}), 0), 2)"));
}

/// Appends `ROUND(count * 100.0 / NULLIF(total over all groups, 0), 2)`.
pub fn push_share_of_total(qb: &mut Query, counted: &str) {
    qb.push(format!(
        "ROUND(COUNT({counted}) * 100.0 / NULLIF(SUM(COUNT({counted})) OVER (), 0), 2)"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn enrolment_columns() -> FilterColumns {
        FilterColumns {
            date: Some("i.created_at"),
            default_window: true,
            curso: Some("cu.id"),
            instructor: Some("pa.instructor_id"),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_window_without_start_date() {
        let mut qb = Query::new("SELECT 1 FROM inscripciones i WHERE TRUE");
        push_filters(&mut qb, &ReportFilters::default(), &enrolment_columns());
        assert!(qb.sql().ends_with("AND i.created_at >= NOW() - INTERVAL '1 year'"));
    }

    #[test]
    fn test_dates_are_bound_and_end_is_inclusive() {
        let filters = ReportFilters {
            fecha_inicio: NaiveDate::from_ymd_opt(2025, 1, 1),
            fecha_fin: NaiveDate::from_ymd_opt(2025, 1, 31),
            ..Default::default()
        };
        let mut qb = Query::new("SELECT 1 FROM inscripciones i WHERE TRUE");
        push_filters(&mut qb, &filters, &enrolment_columns());

        let sql = qb.sql();
        assert!(sql.contains("AND i.created_at >= $1"));
        assert!(sql.contains("AND i.created_at < $2 + INTERVAL '1 day'"));
        assert!(!sql.contains("NOW()"));
        assert!(!sql.contains("2025"));
    }

    #[test]
    fn test_filters_without_column_are_skipped() {
        let filters = ReportFilters {
            curso_id: Some(5),
            metodo: Some("qr".to_string()),
            ..Default::default()
        };
        let mut qb = Query::new("SELECT 1 FROM inscripciones i WHERE TRUE");
        push_filters(&mut qb, &filters, &enrolment_columns());

        let sql = qb.sql();
        assert!(sql.contains("AND cu.id = $1"));
        assert!(!sql.contains("metodo"));
        assert!(!sql.contains("$2"));
    }

    #[test]
    fn test_string_filters_are_not_interpolated() {
        let filters = ReportFilters {
            estado: Some("activo'; DROP TABLE pagos; --".to_string()),
            ..Default::default()
        };
        let columns = FilterColumns {
            estado: Some("i.estado"),
            ..Default::default()
        };
        let mut qb = Query::new("SELECT 1 FROM inscripciones i WHERE TRUE");
        push_filters(&mut qb, &filters, &columns);

        assert!(qb.sql().ends_with("AND i.estado = $1"));
        assert!(!qb.sql().contains("DROP"));
    }

    #[test]
    fn test_pass_rate_binds_threshold() {
        let mut qb = Query::new("SELECT ");
        push_pass_rate(&mut qb, "i.calificacion_final", Decimal::from(51));
        assert_eq!(
            qb.sql(),
            "SELECT ROUND(COUNT(i.calificacion_final) FILTER (WHERE i.calificacion_final >= $1) \
             * 100.0 / NULLIF(COUNT(i.calificacion_final), 0), 2)"
        );
    }
}
