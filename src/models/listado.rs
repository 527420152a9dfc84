//! Rows of the tabular listados.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

use super::report_kind::ListadoKind;

/// One enrolment.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct InscripcionListado {
    /// Enrolment id.
    pub id: i64,
    /// Student full name.
    pub estudiante: String,
    /// Student email.
    pub email: String,
    /// Student type (enum value).
    pub tipo_estudiante: String,
    /// Course name.
    pub curso: String,
    /// Section name, when the section has one.
    pub paralelo: Option<String>,
    /// Enrolment status (enum value).
    pub estado: String,
    /// Final grade, once graded.
    pub calificacion_final: Option<Decimal>,
    /// Enrolment date.
    pub fecha_inscripcion: Option<NaiveDate>,
}

/// One payment.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct PagoListado {
    /// Payment id.
    pub id: i64,
    /// Student full name.
    pub estudiante: String,
    /// Course name.
    pub curso: String,
    /// Amount.
    pub monto: Option<Decimal>,
    /// Payment method (enum value).
    pub metodo: String,
    /// Payment status (enum value).
    pub estado: String,
    /// Payment date.
    pub fecha_pago: Option<NaiveDate>,
}

/// One issued certificate.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct CertificadoListado {
    /// Public verification code.
    pub codigo_verificacion: String,
    /// Student full name.
    pub estudiante: String,
    /// Course name.
    pub curso: String,
    /// Final grade of the enrolment.
    pub calificacion_final: Option<Decimal>,
    /// Issue date.
    pub fecha_emision: Option<NaiveDate>,
}

/// Attendance totals for one enrolment.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct AsistenciaListado {
    /// Student full name.
    pub estudiante: String,
    /// Course name.
    pub curso: String,
    /// Section name, when the section has one.
    pub paralelo: Option<String>,
    /// Recorded sessions.
    pub sesiones: Option<i64>,
    /// Sessions marked `presente`.
    pub presentes: Option<i64>,
    /// Sessions marked `ausente`.
    pub ausentes: Option<i64>,
    /// Sessions marked `justificado`.
    pub justificados: Option<i64>,
    /// Sessions marked `tardanza`.
    pub tardanzas: Option<i64>,
    /// Present sessions over all sessions, in percent.
    pub porcentaje_asistencia: Option<Decimal>,
}

/// The rows of one listado query.
#[derive(Debug, Clone, PartialEq)]
pub enum ListadoRows {
    /// Enrolments.
    Inscripciones(Vec<InscripcionListado>),
    /// Payments.
    Pagos(Vec<PagoListado>),
    /// Certificates.
    Certificados(Vec<CertificadoListado>),
    /// Attendance totals.
    Asistencia(Vec<AsistenciaListado>),
}

impl ListadoRows {
    /// Which listado these rows belong to.
    pub fn kind(&self) -> ListadoKind {
        match self {
            ListadoRows::Inscripciones(_) => ListadoKind::Inscripciones,
            ListadoRows::Pagos(_) => ListadoKind::Pagos,
            ListadoRows::Certificados(_) => ListadoKind::Certificados,
            ListadoRows::Asistencia(_) => ListadoKind::Asistencia,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        match self {
            ListadoRows::Inscripciones(rows) => rows.len(),
            ListadoRows::Pagos(rows) => rows.len(),
            ListadoRows::Certificados(rows) => rows.len(),
            ListadoRows::Asistencia(rows) => rows.len(),
        }
    }

    /// Renders the raw rows as `{"<kind>": [row, ...]}`.
    pub fn to_json(&self) -> serde_json::Result<Value> {
        let rows = match self {
            ListadoRows::Inscripciones(rows) => serde_json::to_value(rows)?,
            ListadoRows::Pagos(rows) => serde_json::to_value(rows)?,
            ListadoRows::Certificados(rows) => serde_json::to_value(rows)?,
            ListadoRows::Asistencia(rows) => serde_json::to_value(rows)?,
        };

        let mut body = Map::new();
        body.insert(self.kind().slug().to_string(), rows);
        Ok(Value::Object(body))
    }
}
