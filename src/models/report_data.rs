//! The raw result of querying one report.

use super::academic::AcademicData;
use super::financial::FinancialData;
use super::listado::ListadoRows;
use super::report_kind::ReportKind;
use super::statistics::StatisticsData;

/// Typed query results for any report kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    /// Academic performance tables.
    Academic(AcademicData),
    /// Revenue tables.
    Financial(FinancialData),
    /// System statistics tables.
    Statistics(StatisticsData),
    /// One listado.
    Listado(ListadoRows),
}

impl ReportData {
    /// The report these results belong to.
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Academic(_) => ReportKind::Academicos,
            ReportData::Financial(_) => ReportKind::Financieros,
            ReportData::Statistics(_) => ReportKind::Estadisticas,
            ReportData::Listado(rows) => ReportKind::Listado(rows.kind()),
        }
    }
}
