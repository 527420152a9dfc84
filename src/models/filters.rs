//! Query-string filters shared by every report.

use std::collections::HashMap;

use chrono::NaiveDate;
use tracing::debug;

use super::report_kind::ReportKind;

/// Optional restrictions applied to a report's queries.
///
/// Only the keys a report recognises are ever populated, so a `curso_id`
/// sent to `estadisticas` has no effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    /// Inclusive lower date bound.
    pub fecha_inicio: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub fecha_fin: Option<NaiveDate>,
    /// Restrict to one course.
    pub curso_id: Option<i64>,
    /// Restrict to one instructor's sections.
    pub instructor_id: Option<i64>,
    /// Restrict to one student type.
    pub tipo_estudiante: Option<String>,
    /// Restrict to one enrolment or payment status.
    pub estado: Option<String>,
    /// Restrict to one payment method.
    pub metodo: Option<String>,
}

impl ReportFilters {
    /// Builds filters from raw query parameters for the given report.
    ///
    /// Blank values, `all` and `todos` mean "no filter". Values that fail to
    /// parse are dropped and logged at debug level.
    pub fn from_query(kind: ReportKind, params: &HashMap<String, String>) -> Self {
        let mut filters = ReportFilters::default();

        for key in kind.filter_keys() {
            let Some(raw) = params.get(*key).map(|v| v.trim()) else {
                continue;
            };
            if is_wildcard(raw) {
                continue;
            }

            match *key {
                "fecha_inicio" => filters.fecha_inicio = parse_date(key, raw),
                "fecha_fin" => filters.fecha_fin = parse_date(key, raw),
                "curso_id" => filters.curso_id = parse_id(key, raw),
                "instructor_id" => filters.instructor_id = parse_id(key, raw),
                "tipo_estudiante" => filters.tipo_estudiante = Some(raw.to_string()),
                "estado" => filters.estado = Some(raw.to_string()),
                "metodo" => filters.metodo = Some(raw.to_string()),
                _ => {}
            }
        }

        filters
    }

    /// Returns the active filters as `(key, value)` pairs, for re-filling a
    /// filter form.
    pub fn active_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(date) = self.fecha_inicio {
            pairs.push(("fecha_inicio", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.fecha_fin {
            pairs.push(("fecha_fin", date.format("%Y-%m-%d").to_string()));
        }
        if let Some(id) = self.curso_id {
            pairs.push(("curso_id", id.to_string()));
        }
        if let Some(id) = self.instructor_id {
            pairs.push(("instructor_id", id.to_string()));
        }
        if let Some(tipo) = &self.tipo_estudiante {
            pairs.push(("tipo_estudiante", tipo.clone()));
        }
        if let Some(estado) = &self.estado {
            pairs.push(("estado", estado.clone()));
        }
        if let Some(metodo) = &self.metodo {
            pairs.push(("metodo", metodo.clone()));
        }
        pairs
    }
}

fn is_wildcard(raw: &str) -> bool {
    raw.is_empty() || raw.eq_ignore_ascii_case("all") || raw.eq_ignore_ascii_case("todos")
}

fn parse_date(key: &str, raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(err) => {
            debug!(filter = key, value = raw, error = %err, "Ignoring unparseable date filter");
            None
        }
    }
}

fn parse_id(key: &str, raw: &str) -> Option<i64> {
    match raw.parse::<i64>() {
        Ok(id) => Some(id),
        Err(err) => {
            debug!(filter = key, value = raw, error = %err, "Ignoring unparseable id filter");
            None
        }
    }
}
