//! Query layer: one parameterised aggregation query per report table.
//!
//! The [`ReportSource`] trait is the seam between the pipeline and the
//! database. [`PgReportStore`] implements it over a PostgreSQL pool; tests
//! substitute in-memory fixtures.

pub mod academic;
pub mod financial;
pub mod listado;
mod postgres;
pub mod sql;
pub mod statistics;

pub use postgres::PgReportStore;

use futures_util::future::BoxFuture;

use crate::error::ReportResult;
use crate::models::{AcademicData, FinancialData, ListadoKind, ListadoRows, ReportFilters, StatisticsData};

/// Read-only access to the raw report tables.
///
/// Every method runs all of a report's queries and fails as a whole if any
/// single query fails.
pub trait ReportSource: Send + Sync {
    /// Runs the academic report queries.
    fn academic<'a>(&'a self, filters: &'a ReportFilters) -> BoxFuture<'a, ReportResult<AcademicData>>;

    /// Runs the financial report queries.
    fn financial<'a>(&'a self, filters: &'a ReportFilters) -> BoxFuture<'a, ReportResult<FinancialData>>;

    /// Runs the statistics report queries.
    fn statistics<'a>(
        &'a self,
        filters: &'a ReportFilters,
    ) -> BoxFuture<'a, ReportResult<StatisticsData>>;

    /// Runs one listado query.
    fn listado<'a>(
        &'a self,
        kind: ListadoKind,
        filters: &'a ReportFilters,
    ) -> BoxFuture<'a, ReportResult<ListadoRows>>;
}
