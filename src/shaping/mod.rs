//! Shaping: turns typed query results into display-ready tables.
//!
//! Shaping is pure. It applies the per-report column definitions and the
//! coercions in [`format`]; it never fails and never touches I/O.

mod academic;
mod financial;
pub mod format;
mod listado;
mod statistics;
mod table;

pub use academic::shape_academic;
pub use financial::shape_financial;
pub use listado::{enrolment_tone, payment_tone, shape_listado};
pub use statistics::shape_statistics;
pub use table::{shape_table, Cell, Column, ShapedReport, ShapedTable, TableLayout, Tone};

use crate::models::ReportData;

/// Shapes any report's query results.
pub fn shape_report(data: &ReportData) -> ShapedReport {
    match data {
        ReportData::Academic(data) => shape_academic(data),
        ReportData::Financial(data) => shape_financial(data),
        ReportData::Statistics(data) => shape_statistics(data),
        ReportData::Listado(rows) => shape_listado(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListadoKind, ListadoRows, ReportKind, StatisticsData};

    #[test]
    fn test_shape_report_dispatches_by_kind() {
        let shaped = shape_report(&ReportData::Statistics(StatisticsData::default()));
        assert_eq!(shaped.kind, ReportKind::Estadisticas);

        let shaped = shape_report(&ReportData::Listado(ListadoRows::Certificados(Vec::new())));
        assert_eq!(shaped.kind, ReportKind::Listado(ListadoKind::Certificados));
        assert_eq!(shaped.tables.len(), 1);
    }

    #[test]
    fn test_shaping_is_deterministic() {
        let data = ReportData::Statistics(StatisticsData::default());
        assert_eq!(shape_report(&data), shape_report(&data));
    }
}
