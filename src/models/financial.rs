//! Rows of the financial report.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Headline payment figures.
#[derive(Debug, Clone, Default, PartialEq, FromRow)]
pub struct ResumenFinanciero {
    /// Sum of `completado` payments.
    pub ingresos_confirmados: Option<Decimal>,
    /// Sum of `pendiente` payments.
    pub ingresos_pendientes: Option<Decimal>,
    /// Count of `rechazado` payments.
    pub pagos_rechazados: Option<i64>,
    /// Sum of `reembolsado` payments.
    pub monto_reembolsado: Option<Decimal>,
    /// Count of all payments.
    pub total_pagos: Option<i64>,
    /// Mean payment amount.
    pub pago_promedio: Option<Decimal>,
}

/// Revenue per course.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct IngresoCurso {
    /// Course code.
    pub codigo: String,
    /// Course name.
    pub curso: String,
    /// Distinct enrolments with payments.
    pub inscripciones: Option<i64>,
    /// Payments.
    pub pagos: Option<i64>,
    /// Sum of confirmed payments.
    pub ingresos_confirmados: Option<Decimal>,
    /// Sum of pending payments.
    pub ingresos_pendientes: Option<Decimal>,
}

/// Revenue per calendar month.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct IngresoMensual {
    /// Month as `YYYY-MM`.
    pub mes: String,
    /// Payments in the month.
    pub pagos: Option<i64>,
    /// Sum of confirmed payments.
    pub monto_confirmado: Option<Decimal>,
    /// Sum of pending payments.
    pub monto_pendiente: Option<Decimal>,
}

/// Breakdown by payment method.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct MetodoPago {
    /// Payment method (enum value).
    pub metodo: String,
    /// Payments using the method.
    pub pagos: Option<i64>,
    /// Sum of amounts.
    pub monto_total: Option<Decimal>,
    /// Share of all payments, in percent.
    pub porcentaje: Option<Decimal>,
}

/// An outstanding payment.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PagoPendiente {
    /// Student full name.
    pub estudiante: String,
    /// Student email.
    pub email: String,
    /// Course name.
    pub curso: String,
    /// Section name, when the section has one.
    pub paralelo: Option<String>,
    /// Amount owed.
    pub monto: Option<Decimal>,
    /// Registered payment date.
    pub fecha_pago: Option<NaiveDate>,
    /// Days since the payment date.
    pub dias_pendiente: Option<i32>,
}

/// Everything the financial report queries return.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialData {
    /// Summary figures.
    pub resumen_general: ResumenFinanciero,
    /// Revenue per course.
    pub ingresos_por_curso: Vec<IngresoCurso>,
    /// Revenue per month.
    pub ingresos_mensuales: Vec<IngresoMensual>,
    /// Breakdown by method.
    pub metodos_pago: Vec<MetodoPago>,
    /// Outstanding payments.
    pub pagos_pendientes: Vec<PagoPendiente>,
}
