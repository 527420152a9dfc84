//! Shaping for the listados, including status badges.

use rust_decimal::Decimal;

use crate::models::{
    AsistenciaListado, CertificadoListado, InscripcionListado, ListadoRows, PagoListado,
    ReportKind,
};

use super::format::{count, currency, date, enum_label, fixed2, or_dash, or_na, percentage, CurrencyStyle};
use super::table::{shape_table, Column, ShapedReport, Tone};

/// Badge tone for an enrolment status.
pub fn enrolment_tone(estado: &str) -> Tone {
    match estado {
        "activo" => Tone::Success,
        "completado" => Tone::Info,
        "suspendido" => Tone::Warning,
        "cancelado" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

/// Badge tone for a payment status.
pub fn payment_tone(estado: &str) -> Tone {
    match estado {
        "completado" => Tone::Success,
        "pendiente" => Tone::Warning,
        "rechazado" => Tone::Danger,
        _ => Tone::Neutral,
    }
}

fn grade(value: Option<Decimal>) -> String {
    value.map(|v| fixed2(Some(v))).unwrap_or_else(|| "-".to_string())
}

/// Shapes one listado into a single grid table.
pub fn shape_listado(rows: &ListadoRows) -> ShapedReport {
    let kind = rows.kind();
    let table = match rows {
        ListadoRows::Inscripciones(records) => {
            let columns = [
                Column::new("Estudiante", |r: &InscripcionListado| r.estudiante.clone()),
                Column::new("Email", |r: &InscripcionListado| r.email.clone()),
                Column::new("Tipo", |r: &InscripcionListado| enum_label(&r.tipo_estudiante)),
                Column::new("Curso", |r: &InscripcionListado| r.curso.clone()),
                Column::new("Paralelo", |r: &InscripcionListado| or_na(r.paralelo.as_deref())),
                Column::badge(
                    "Estado",
                    |r: &InscripcionListado| enum_label(&r.estado),
                    |r: &InscripcionListado| Some(enrolment_tone(&r.estado)),
                ),
                Column::new("Calificación", |r: &InscripcionListado| grade(r.calificacion_final)),
                Column::new("Fecha de Inscripción", |r: &InscripcionListado| {
                    date(r.fecha_inscripcion)
                }),
            ];
            shape_table("inscripciones", "Inscripciones", &columns, records)
        }
        ListadoRows::Pagos(records) => {
            let columns = [
                Column::new("Estudiante", |r: &PagoListado| r.estudiante.clone()),
                Column::new("Curso", |r: &PagoListado| r.curso.clone()),
                Column::new("Monto", |r: &PagoListado| currency(r.monto, CurrencyStyle::Bolivianos)),
                Column::new("Método", |r: &PagoListado| enum_label(&r.metodo)),
                Column::badge(
                    "Estado",
                    |r: &PagoListado| enum_label(&r.estado),
                    |r: &PagoListado| Some(payment_tone(&r.estado)),
                ),
                Column::new("Fecha", |r: &PagoListado| date(r.fecha_pago)),
            ];
            shape_table("pagos", "Pagos", &columns, records)
        }
        ListadoRows::Certificados(records) => {
            let columns = [
                Column::new("Código de Verificación", |r: &CertificadoListado| {
                    r.codigo_verificacion.clone()
                }),
                Column::new("Estudiante", |r: &CertificadoListado| r.estudiante.clone()),
                Column::new("Curso", |r: &CertificadoListado| r.curso.clone()),
                Column::new("Calificación Final", |r: &CertificadoListado| {
                    grade(r.calificacion_final)
                }),
                Column::new("Fecha de Emisión", |r: &CertificadoListado| date(r.fecha_emision)),
            ];
            shape_table("certificados", "Certificados", &columns, records)
        }
        ListadoRows::Asistencia(records) => {
            let columns = [
                Column::new("Estudiante", |r: &AsistenciaListado| r.estudiante.clone()),
                Column::new("Curso", |r: &AsistenciaListado| r.curso.clone()),
                Column::new("Paralelo", |r: &AsistenciaListado| or_dash(r.paralelo.as_deref())),
                Column::new("Sesiones", |r: &AsistenciaListado| count(r.sesiones)),
                Column::new("Presentes", |r: &AsistenciaListado| count(r.presentes)),
                Column::new("Ausentes", |r: &AsistenciaListado| count(r.ausentes)),
                Column::new("Justificados", |r: &AsistenciaListado| count(r.justificados)),
                Column::new("Tardanzas", |r: &AsistenciaListado| count(r.tardanzas)),
                Column::new("% Asistencia", |r: &AsistenciaListado| {
                    percentage(r.porcentaje_asistencia)
                }),
            ];
            shape_table("asistencia", "Asistencia", &columns, records)
        }
    };

    ShapedReport {
        kind: ReportKind::Listado(kind),
        title: kind.title(),
        tables: vec![table],
    }
}
