//! Performance benchmarks for report shaping and rendering.
//!
//! Measures the in-process part of an export (everything after the
//! database returns rows):
//! - Shaping an academic report with many courses
//! - Rendering the shaped report as an Excel workbook
//! - Rendering the PDF source document
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::str::FromStr;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use academy_reports::config::ConfigLoader;
use academy_reports::models::{AcademicData, InscripcionListado, ListadoRows, RendimientoCurso};
use academy_reports::render::{render_document, render_workbook, DocumentStyle, WorkbookStyle};
use academy_reports::shaping::{shape_academic, shape_listado};

/// Academic data with `courses` course rows.
fn academic_data(courses: usize) -> AcademicData {
    let promedio = Decimal::from_str("63.47").unwrap();
    AcademicData {
        rendimiento_cursos: (0..courses)
            .map(|i| RendimientoCurso {
                codigo: format!("CUR-{i:04}"),
                curso: format!("Curso {i}"),
                categoria: "tecnologia".to_string(),
                inscritos: Some(30),
                aprobados: Some(21),
                reprobados: Some(9),
                promedio: Some(promedio),
                tasa_aprobacion: Some(Decimal::from(70)),
                rendimiento_evaluaciones: Some(promedio),
            })
            .collect(),
        ..Default::default()
    }
}

/// An enrolment listing with `rows` rows.
fn inscripciones(rows: usize) -> ListadoRows {
    ListadoRows::Inscripciones(
        (0..rows)
            .map(|i| InscripcionListado {
                id: i as i64,
                estudiante: format!("Estudiante {i}"),
                email: format!("estudiante{i}@example.com"),
                tipo_estudiante: "externo".to_string(),
                curso: "Programación Básica".to_string(),
                paralelo: Some("A".to_string()),
                estado: if i % 3 == 0 { "completado" } else { "activo" }.to_string(),
                calificacion_final: None,
                fecha_inscripcion: NaiveDate::from_ymd_opt(2025, 3, 1),
            })
            .collect(),
    )
}

fn bench_shaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("shaping");
    for courses in [10usize, 100, 1000] {
        let data = academic_data(courses);
        group.throughput(Throughput::Elements(courses as u64));
        group.bench_with_input(BenchmarkId::new("academic", courses), &data, |b, data| {
            b.iter(|| shape_academic(black_box(data)))
        });
    }
    group.finish();
}

fn bench_workbook(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/academia")
        .expect("Failed to load config")
        .into_config();
    let style = WorkbookStyle::from_config(&config);

    let mut group = c.benchmark_group("workbook");
    for rows in [100usize, 1000] {
        let report = shape_listado(&inscripciones(rows));
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::new("inscripciones", rows), &report, |b, report| {
            b.iter(|| render_workbook(black_box(report), &style).unwrap())
        });
    }
    group.finish();
}

fn bench_document(c: &mut Criterion) {
    let config = ConfigLoader::load("./config/academia")
        .expect("Failed to load config")
        .into_config();
    let style = DocumentStyle::from_config(&config);
    let generated_at = NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let report = shape_academic(&academic_data(200));

    c.bench_function("document_academic_200", |b| {
        b.iter(|| render_document(black_box(&report), &style, generated_at))
    });
}

criterion_group!(benches, bench_shaping, bench_workbook, bench_document);
criterion_main!(benches);
