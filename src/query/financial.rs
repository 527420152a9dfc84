//! Queries for the financial report.

use crate::models::ReportFilters;

use super::sql::{push_filters, push_share_of_total, FilterColumns, Query, STUDENT_NAME};

const PAYMENT_JOINS: &str = " FROM pagos p \
     JOIN inscripciones i ON i.id = p.inscripcion_id \
     JOIN paralelos pa ON pa.id = i.paralelo_id \
     JOIN cursos cu ON cu.id = pa.curso_id";

const COLUMNS: FilterColumns = FilterColumns {
    date: Some("p.fecha_pago"),
    default_window: true,
    curso: Some("cu.id"),
    instructor: None,
    tipo_estudiante: None,
    estado: None,
    metodo: Some("p.metodo"),
};

/// Headline payment figures.
pub fn resumen_general(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT SUM(p.monto) FILTER (WHERE p.estado = 'completado') AS ingresos_confirmados, \
         SUM(p.monto) FILTER (WHERE p.estado = 'pendiente') AS ingresos_pendientes, \
         COUNT(p.id) FILTER (WHERE p.estado = 'rechazado') AS pagos_rechazados, \
         SUM(p.monto) FILTER (WHERE p.estado = 'reembolsado') AS monto_reembolsado, \
         COUNT(p.id) AS total_pagos, \
         ROUND(AVG(p.monto), 2) AS pago_promedio",
    );
    qb.push(PAYMENT_JOINS).push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb
}

/// Revenue per course, highest confirmed revenue first.
pub fn ingresos_por_curso(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT cu.codigo, cu.nombre AS curso, \
         COUNT(DISTINCT i.id) AS inscripciones, \
         COUNT(p.id) AS pagos, \
         SUM(p.monto) FILTER (WHERE p.estado = 'completado') AS ingresos_confirmados, \
         SUM(p.monto) FILTER (WHERE p.estado = 'pendiente') AS ingresos_pendientes",
    );
    qb.push(PAYMENT_JOINS).push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(
        " GROUP BY cu.id, cu.codigo, cu.nombre \
         ORDER BY ingresos_confirmados DESC NULLS LAST",
    );
    qb
}

/// Revenue per month, oldest first.
pub fn ingresos_mensuales(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT TO_CHAR(p.fecha_pago, 'YYYY-MM') AS mes, \
         COUNT(p.id) AS pagos, \
         SUM(p.monto) FILTER (WHERE p.estado = 'completado') AS monto_confirmado, \
         SUM(p.monto) FILTER (WHERE p.estado = 'pendiente') AS monto_pendiente",
    );
    qb.push(PAYMENT_JOINS).push(" WHERE p.fecha_pago IS NOT NULL");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(" GROUP BY mes ORDER BY mes");
    qb
}

/// Breakdown by payment method, most used first.
pub fn metodos_pago(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(
        "SELECT p.metodo, COUNT(p.id) AS pagos, SUM(p.monto) AS monto_total, ",
    );
    push_share_of_total(&mut qb, "p.id");
    qb.push(" AS porcentaje");
    qb.push(PAYMENT_JOINS).push(" WHERE TRUE");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(" GROUP BY p.metodo ORDER BY pagos DESC");
    qb
}

/// Outstanding payments, oldest first.
pub fn pagos_pendientes(filters: &ReportFilters) -> Query {
    let mut qb = Query::new(format!(
        "SELECT {STUDENT_NAME} AS estudiante, e.email, cu.nombre AS curso, \
         pa.nombre AS paralelo, p.monto, p.fecha_pago, \
         (CURRENT_DATE - p.fecha_pago) AS dias_pendiente"
    ));
    qb.push(PAYMENT_JOINS)
        .push(" JOIN estudiantes e ON e.id = i.estudiante_id WHERE p.estado = 'pendiente'");
    push_filters(&mut qb, filters, &COLUMNS);
    qb.push(" ORDER BY p.fecha_pago ASC NULLS LAST");
    qb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_filter_is_bound() {
        let filters = ReportFilters {
            metodo: Some("tarjeta".to_string()),
            ..Default::default()
        };
        let sql = resumen_general(&filters).sql().to_string();
        assert!(sql.contains("AND p.metodo = $1"));
        assert!(!sql.contains("tarjeta"));
    }

    #[test]
    fn test_no_coalesce_in_aggregates() {
        for sql in [
            resumen_general(&ReportFilters::default()).sql().to_string(),
            ingresos_por_curso(&ReportFilters::default()).sql().to_string(),
        ] {
            assert!(!sql.contains("COALESCE"));
        }
    }

    #[test]
    fn test_monthly_ordering() {
        let sql = ingresos_mensuales(&ReportFilters::default()).sql().to_string();
        assert!(sql.contains("TO_CHAR(p.fecha_pago, 'YYYY-MM') AS mes"));
        assert!(sql.ends_with("GROUP BY mes ORDER BY mes"));
    }

    #[test]
    fn test_method_share_uses_window_total() {
        let sql = metodos_pago(&ReportFilters::default()).sql().to_string();
        assert!(sql.contains("NULLIF(SUM(COUNT(p.id)) OVER (), 0)"));
    }

    #[test]
    fn test_pending_payments_oldest_first() {
        let sql = pagos_pendientes(&ReportFilters::default()).sql().to_string();
        assert!(sql.contains("WHERE p.estado = 'pendiente'"));
        assert!(sql.ends_with("ORDER BY p.fecha_pago ASC NULLS LAST"));
    }
}
