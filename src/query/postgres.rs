//! PostgreSQL implementation of [`ReportSource`].

use std::time::Instant;

use futures_util::future::BoxFuture;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};
use tracing::debug;

use crate::error::ReportResult;
use crate::models::{
    AcademicData, FinancialData, ListadoKind, ListadoRows, ReportFilters, StatisticsData,
};

use super::sql::Query;
use super::{academic, financial, listado, statistics, ReportSource};

/// Runs report queries against a connection pool.
///
/// Queries of one report run sequentially on the pool, without a shared
/// transaction, so tables may reflect slightly different moments.
#[derive(Debug, Clone)]
pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    /// Creates a store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_all<T>(&self, table: &'static str, mut qb: Query) -> ReportResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let started = Instant::now();
        let rows = qb.build_query_as::<T>().fetch_all(&self.pool).await?;
        debug!(
            table,
            rows = rows.len(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Query completed"
        );
        Ok(rows)
    }

    async fn fetch_one<T>(&self, table: &'static str, mut qb: Query) -> ReportResult<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let started = Instant::now();
        let row = qb.build_query_as::<T>().fetch_one(&self.pool).await?;
        debug!(
            table,
            duration_ms = started.elapsed().as_millis() as u64,
            "Query completed"
        );
        Ok(row)
    }
}

impl ReportSource for PgReportStore {
    fn academic<'a>(&'a self, filters: &'a ReportFilters) -> BoxFuture<'a, ReportResult<AcademicData>> {
        Box::pin(async move {
            Ok(AcademicData {
                resumen: self.fetch_one("resumen", academic::resumen(filters)).await?,
                rendimiento_cursos: self
                    .fetch_all("rendimientoCursos", academic::rendimiento_cursos(filters))
                    .await?,
                rendimiento_instructores: self
                    .fetch_all(
                        "rendimientoInstructores",
                        academic::rendimiento_instructores(filters),
                    )
                    .await?,
                asistencia_paralelos: self
                    .fetch_all("asistenciaParalelos", academic::asistencia_paralelos(filters))
                    .await?,
            })
        })
    }

    fn financial<'a>(&'a self, filters: &'a ReportFilters) -> BoxFuture<'a, ReportResult<FinancialData>> {
        Box::pin(async move {
            Ok(FinancialData {
                resumen_general: self
                    .fetch_one("resumenGeneral", financial::resumen_general(filters))
                    .await?,
                ingresos_por_curso: self
                    .fetch_all("ingresosPorCurso", financial::ingresos_por_curso(filters))
                    .await?,
                ingresos_mensuales: self
                    .fetch_all("ingresosMensuales", financial::ingresos_mensuales(filters))
                    .await?,
                metodos_pago: self
                    .fetch_all("metodosPago", financial::metodos_pago(filters))
                    .await?,
                pagos_pendientes: self
                    .fetch_all("pagosPendientes", financial::pagos_pendientes(filters))
                    .await?,
            })
        })
    }

    fn statistics<'a>(
        &'a self,
        filters: &'a ReportFilters,
    ) -> BoxFuture<'a, ReportResult<StatisticsData>> {
        Box::pin(async move {
            Ok(StatisticsData {
                resumen: self.fetch_one("resumen", statistics::resumen()).await?,
                inscripciones_por_estado: self
                    .fetch_all(
                        "inscripcionesPorEstado",
                        statistics::inscripciones_por_estado(filters),
                    )
                    .await?,
                cursos_populares: self
                    .fetch_all("cursosPopulares", statistics::cursos_populares(filters))
                    .await?,
                inscripciones_mensuales: self
                    .fetch_all(
                        "inscripcionesMensuales",
                        statistics::inscripciones_mensuales(filters),
                    )
                    .await?,
                rendimiento_categorias: self
                    .fetch_all(
                        "rendimientoCategorias",
                        statistics::rendimiento_categorias(filters),
                    )
                    .await?,
                estudiantes_por_tipo: self
                    .fetch_all("estudiantesPorTipo", statistics::estudiantes_por_tipo(filters))
                    .await?,
            })
        })
    }

    fn listado<'a>(
        &'a self,
        kind: ListadoKind,
        filters: &'a ReportFilters,
    ) -> BoxFuture<'a, ReportResult<ListadoRows>> {
        Box::pin(async move {
            let qb = listado::listado(kind, filters);
            let table = kind.slug();
            Ok(match kind {
                ListadoKind::Inscripciones => ListadoRows::Inscripciones(self.fetch_all(table, qb).await?),
                ListadoKind::Pagos => ListadoRows::Pagos(self.fetch_all(table, qb).await?),
                ListadoKind::Certificados => ListadoRows::Certificados(self.fetch_all(table, qb).await?),
                ListadoKind::Asistencia => ListadoRows::Asistencia(self.fetch_all(table, qb).await?),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn test_store_is_a_report_source() {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect_lazy("postgres://localhost/academia")
            .unwrap();
        let store: std::sync::Arc<dyn ReportSource> = std::sync::Arc::new(PgReportStore::new(pool));
        // Building the future must not touch the database.
        let filters = ReportFilters::default();
        drop(store.statistics(&filters));
    }
}
