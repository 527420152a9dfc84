//! Shaping for the system statistics report. Amounts are shown in
//! bolivianos with two decimals.

use crate::models::{
    CursoPopular, EstudiantesTipo, InscripcionMensual, InscripcionesEstado, RendimientoCategoria,
    ReportKind, StatisticsData,
};

use super::format::{count, currency, enum_label, fixed2, percentage, CurrencyStyle};
use super::table::{shape_table, Column, ShapedReport, ShapedTable};

/// Shapes statistics data into its six tables.
pub fn shape_statistics(data: &StatisticsData) -> ShapedReport {
    let resumen = &data.resumen;
    let summary = ShapedTable::summary(
        "resumen",
        "Resumen del Sistema",
        vec![
            ("Estudiantes", count(resumen.estudiantes)),
            ("Instructores", count(resumen.instructores)),
            ("Cursos activos", count(resumen.cursos_activos)),
            ("Paralelos activos", count(resumen.paralelos_activos)),
            ("Inscripciones activas", count(resumen.inscripciones_activas)),
            ("Certificados emitidos", count(resumen.certificados_emitidos)),
            (
                "Ingresos totales",
                currency(resumen.ingresos_totales, CurrencyStyle::Bolivianos),
            ),
        ],
    );

    let por_estado = [
        Column::new("Estado", |r: &InscripcionesEstado| enum_label(&r.estado)),
        Column::new("Cantidad", |r: &InscripcionesEstado| count(r.cantidad)),
        Column::new("Porcentaje", |r: &InscripcionesEstado| percentage(r.porcentaje)),
    ];

    let populares = [
        Column::new("Curso", |r: &CursoPopular| r.curso.clone()),
        Column::new("Categoría", |r: &CursoPopular| enum_label(&r.categoria)),
        Column::new("Nivel", |r: &CursoPopular| enum_label(&r.nivel)),
        Column::new("Inscripciones", |r: &CursoPopular| count(r.inscripciones)),
        Column::new("Costo", |r: &CursoPopular| currency(r.costo, CurrencyStyle::Bolivianos)),
    ];

    let mensuales = [
        Column::new("Mes", |r: &InscripcionMensual| r.mes.clone()),
        Column::new("Inscripciones", |r: &InscripcionMensual| count(r.inscripciones)),
        Column::new("Completadas", |r: &InscripcionMensual| count(r.completadas)),
        Column::new("Canceladas", |r: &InscripcionMensual| count(r.canceladas)),
    ];

    let categorias = [
        Column::new("Categoría", |r: &RendimientoCategoria| enum_label(&r.categoria)),
        Column::new("Evaluados", |r: &RendimientoCategoria| count(r.evaluados)),
        Column::new("Aprobados", |r: &RendimientoCategoria| count(r.aprobados)),
        Column::new("Promedio", |r: &RendimientoCategoria| fixed2(r.promedio)),
        Column::new("Tasa de Aprobación", |r: &RendimientoCategoria| {
            percentage(r.tasa_aprobacion)
        }),
    ];

    let por_tipo = [
        Column::new("Tipo", |r: &EstudiantesTipo| enum_label(&r.tipo)),
        Column::new("Estudiantes", |r: &EstudiantesTipo| count(r.estudiantes)),
        Column::new("Porcentaje", |r: &EstudiantesTipo| percentage(r.porcentaje)),
    ];

    ShapedReport {
        kind: ReportKind::Estadisticas,
        title: ReportKind::Estadisticas.title(),
        tables: vec![
            summary,
            shape_table(
                "inscripcionesPorEstado",
                "Inscripciones por Estado",
                &por_estado,
                &data.inscripciones_por_estado,
            ),
            shape_table("cursosPopulares", "Cursos Populares", &populares, &data.cursos_populares),
            shape_table(
                "inscripcionesMensuales",
                "Inscripciones Mensuales",
                &mensuales,
                &data.inscripciones_mensuales,
            ),
            shape_table(
                "rendimientoCategorias",
                "Rendimiento por Categoría",
                &categorias,
                &data.rendimiento_categorias,
            ),
            shape_table(
                "estudiantesPorTipo",
                "Estudiantes por Tipo",
                &por_tipo,
                &data.estudiantes_por_tipo,
            ),
        ],
    }
}
