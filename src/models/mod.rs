//! Typed records for every report table, plus report identities and filters.
//!
//! Each record's field names are the column aliases of the query that fills
//! it. Aggregates that can be undefined (empty groups, zero denominators) are
//! `Option`; defaults are applied when shaping, never here.

mod academic;
mod filters;
mod financial;
mod listado;
mod report_data;
mod report_kind;
mod statistics;

pub use academic::{
    AcademicData, AsistenciaParalelo, RendimientoCurso, RendimientoInstructor, ResumenAcademico,
};
pub use filters::ReportFilters;
pub use financial::{
    FinancialData, IngresoCurso, IngresoMensual, MetodoPago, PagoPendiente, ResumenFinanciero,
};
pub use listado::{
    AsistenciaListado, CertificadoListado, InscripcionListado, ListadoRows, PagoListado,
};
pub use report_data::ReportData;
pub use report_kind::{ExportFormat, ListadoKind, ReportKind};
pub use statistics::{
    CursoPopular, EstudiantesTipo, InscripcionMensual, InscripcionesEstado, RendimientoCategoria,
    ResumenEstadisticas, StatisticsData,
};
