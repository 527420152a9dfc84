//! Shaping for the financial report. Amounts are shown in dollars at the
//! scale the database stored them with.

use crate::models::{FinancialData, IngresoCurso, IngresoMensual, MetodoPago, PagoPendiente, ReportKind};

use super::format::{count, currency, date, enum_label, or_dash, percentage, CurrencyStyle};
use super::table::{shape_table, Column, ShapedReport, ShapedTable};

fn dollars(value: Option<rust_decimal::Decimal>) -> String {
    currency(value, CurrencyStyle::Dollar)
}

/// Shapes financial data into its five tables.
pub fn shape_financial(data: &FinancialData) -> ShapedReport {
    let resumen = &data.resumen_general;
    let summary = ShapedTable::summary(
        "resumenGeneral",
        "Resumen Financiero",
        vec![
            ("Ingresos confirmados", dollars(resumen.ingresos_confirmados)),
            ("Ingresos pendientes", dollars(resumen.ingresos_pendientes)),
            ("Pagos rechazados", count(resumen.pagos_rechazados)),
            ("Monto reembolsado", dollars(resumen.monto_reembolsado)),
            ("Total de pagos", count(resumen.total_pagos)),
            ("Pago promedio", dollars(resumen.pago_promedio)),
        ],
    );

    let por_curso = [
        Column::new("Código", |r: &IngresoCurso| r.codigo.clone()),
        Column::new("Curso", |r: &IngresoCurso| r.curso.clone()),
        Column::new("Inscripciones", |r: &IngresoCurso| count(r.inscripciones)),
        Column::new("Pagos", |r: &IngresoCurso| count(r.pagos)),
        Column::new("Ingresos Confirmados", |r: &IngresoCurso| dollars(r.ingresos_confirmados)),
        Column::new("Ingresos Pendientes", |r: &IngresoCurso| dollars(r.ingresos_pendientes)),
    ];

    let mensuales = [
        Column::new("Mes", |r: &IngresoMensual| r.mes.clone()),
        Column::new("Pagos", |r: &IngresoMensual| count(r.pagos)),
        Column::new("Monto Confirmado", |r: &IngresoMensual| dollars(r.monto_confirmado)),
        Column::new("Monto Pendiente", |r: &IngresoMensual| dollars(r.monto_pendiente)),
    ];

    let metodos = [
        Column::new("Método", |r: &MetodoPago| enum_label(&r.metodo)),
        Column::new("Pagos", |r: &MetodoPago| count(r.pagos)),
        Column::new("Monto Total", |r: &MetodoPago| dollars(r.monto_total)),
        Column::new("Porcentaje", |r: &MetodoPago| percentage(r.porcentaje)),
    ];

    let pendientes = [
        Column::new("Estudiante", |r: &PagoPendiente| r.estudiante.clone()),
        Column::new("Email", |r: &PagoPendiente| r.email.clone()),
        Column::new("Curso", |r: &PagoPendiente| r.curso.clone()),
        Column::new("Paralelo", |r: &PagoPendiente| or_dash(r.paralelo.as_deref())),
        Column::new("Monto", |r: &PagoPendiente| dollars(r.monto)),
        Column::new("Fecha de Pago", |r: &PagoPendiente| date(r.fecha_pago)),
        Column::new("Días Pendiente", |r: &PagoPendiente| {
            count(r.dias_pendiente.map(i64::from))
        }),
    ];

    ShapedReport {
        kind: ReportKind::Financieros,
        title: ReportKind::Financieros.title(),
        tables: vec![
            summary,
            shape_table("ingresosPorCurso", "Ingresos por Curso", &por_curso, &data.ingresos_por_curso),
            shape_table("ingresosMensuales", "Ingresos Mensuales", &mensuales, &data.ingresos_mensuales),
            shape_table("metodosPago", "Métodos de Pago", &metodos, &data.metodos_pago),
            shape_table("pagosPendientes", "Pagos Pendientes", &pendientes, &data.pagos_pendientes),
        ],
    }
}
