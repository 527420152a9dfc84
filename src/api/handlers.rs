//! HTTP request handlers for the report API.
//!
//! Every handler checks, in order: admin authorisation, the report or
//! listado name, the export format. Only then does it touch the database.

use std::collections::HashMap;
use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::error::{ReportError, ReportResult};
use crate::models::{ExportFormat, ListadoKind, ReportKind};
use crate::pipeline;
use crate::render::{render_listing_page, DocumentStyle};
use crate::shaping::shape_listado;

use super::request::ReportParams;
use super::response::ApiErrorResponse;
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/admin/reportes/:report_type/export", get(export_handler))
        .route("/api/admin/reportes/listado/:kind", get(listado_handler))
        .route("/api/admin/reportes/listado/:kind/vista", get(listado_view_handler))
        .with_state(state)
}

fn authorize(state: &AppState, headers: &HeaderMap) -> ReportResult<()> {
    let outcome = state.auth().verify(headers);
    if outcome.success {
        return Ok(());
    }
    Err(ReportError::Unauthorized {
        status: outcome.rejection_status().as_u16(),
        message: outcome.error.unwrap_or_else(|| "No autorizado".to_string()),
    })
}

fn listado_kind(slug: &str) -> ReportResult<ListadoKind> {
    ListadoKind::from_slug(slug).ok_or_else(|| ReportError::UnknownReport {
        report: slug.to_string(),
    })
}

/// Logs a failed request and turns it into its error response.
fn failure(correlation_id: Uuid, err: ReportError) -> Response {
    if err.is_internal() {
        error!(correlation_id = %correlation_id, error = %err, "Report generation failed");
    } else {
        warn!(correlation_id = %correlation_id, error = %err, "Report request rejected");
    }
    ApiErrorResponse::from(err).into_response()
}

/// Handler for `GET /api/admin/reportes/:report_type/export`.
///
/// Answers with the rendered file as an attachment.
async fn export_handler(
    State(state): State<AppState>,
    Path(report_type): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        report = %report_type,
        "Processing export request"
    );

    let start_time = Instant::now();
    match export(&state, &report_type, ReportParams::new(params), &headers).await {
        Ok(artifact) => {
            info!(
                correlation_id = %correlation_id,
                report = %report_type,
                format = artifact.format.extension(),
                bytes = artifact.bytes.len(),
                duration_ms = start_time.elapsed().as_millis(),
                "Export completed successfully"
            );
            let disposition = format!("attachment; filename=\"{}\"", artifact.filename);
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, artifact.content_type.to_string()),
                    (header::CONTENT_DISPOSITION, disposition),
                ],
                artifact.bytes,
            )
                .into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

async fn export(
    state: &AppState,
    report_type: &str,
    params: ReportParams,
    headers: &HeaderMap,
) -> ReportResult<pipeline::ExportArtifact> {
    authorize(state, headers)?;

    let kind = ReportKind::from_slug(report_type).ok_or_else(|| ReportError::UnknownReport {
        report: report_type.to_string(),
    })?;
    let format = ExportFormat::parse(params.format()).ok_or_else(|| {
        ReportError::UnsupportedFormat {
            format: params.format().unwrap_or_default().to_string(),
        }
    })?;
    let filters = params.filters(kind);

    pipeline::export_report(
        state.source(),
        state.pdf(),
        state.config(),
        kind,
        format,
        &filters,
    )
    .await
}

/// Handler for `GET /api/admin/reportes/listado/:kind`.
///
/// Answers with the raw rows as `{"<kind>": [...]}`.
async fn listado_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, listado = %kind, "Processing listado request");

    let result = async {
        authorize(&state, &headers)?;
        let kind = listado_kind(&kind)?;
        let filters = ReportParams::new(params).filters(ReportKind::Listado(kind));
        let rows = state.source().listado(kind, &filters).await?;
        let count = rows.row_count();
        let body = rows
            .to_json()
            .map_err(|e| ReportError::render(format!("listado serialization: {e}")))?;
        Ok::<_, ReportError>((count, body))
    }
    .await;

    match result {
        Ok((count, body)) => {
            info!(
                correlation_id = %correlation_id,
                listado = %kind,
                rows = count,
                "Listado served"
            );
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => failure(correlation_id, err),
    }
}

/// Handler for `GET /api/admin/reportes/listado/:kind/vista`.
///
/// Answers with the interactive HTML page.
async fn listado_view_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, listado = %kind, "Processing listado page request");

    let result = async {
        authorize(&state, &headers)?;
        let kind = listado_kind(&kind)?;
        let filters = ReportParams::new(params).filters(ReportKind::Listado(kind));
        let rows = state.source().listado(kind, &filters).await?;
        let report = shape_listado(&rows);
        let style = DocumentStyle::from_config(state.config());
        Ok::<_, ReportError>(render_listing_page(
            &report,
            &filters,
            &style,
            Local::now().naive_local(),
        ))
    }
    .await;

    match result {
        Ok(page) => Html(page).into_response(),
        Err(err) => failure(correlation_id, err),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;
    use crate::auth::{AdminAuth, AuthOutcome, TokenAuth};
    use crate::config::ConfigLoader;
    use crate::test_support::{FakePdf, FixtureSource};

    fn app(source: Arc<FixtureSource>) -> Router {
        let config = ConfigLoader::load("./config/academia").unwrap().into_config();
        let auth = TokenAuth::new(config.access());
        create_router(AppState::new(
            source,
            Arc::new(FakePdf::default()),
            Arc::new(auth),
            config,
        ))
    }

    /// Rejects every request with whatever status it was given.
    struct FixedRejection(Option<StatusCode>);

    impl AdminAuth for FixedRejection {
        fn verify(&self, _headers: &HeaderMap) -> AuthOutcome {
            AuthOutcome {
                success: false,
                error: Some("Sesión expirada".to_string()),
                status: self.0,
            }
        }
    }

    fn app_with_auth(source: Arc<FixtureSource>, auth: impl AdminAuth + 'static) -> Router {
        let config = ConfigLoader::load("./config/academia").unwrap().into_config();
        create_router(AppState::new(
            source,
            Arc::new(FakePdf::default()),
            Arc::new(auth),
            config,
        ))
    }

    fn get(uri: &str, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_token_is_401_without_queries() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source.clone())
            .oneshot(get("/api/admin/reportes/academicos/export", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "No autorizado");
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_staff_token_is_403() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source.clone())
            .oneshot(get(
                "/api/admin/reportes/listado/pagos",
                Some("dev-staff-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(response).await["error"], "Acceso denegado");
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_report_is_404() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source.clone())
            .oneshot(get(
                "/api/admin/reportes/nominas/export",
                Some("dev-admin-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["error"], "Reporte no encontrado");
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unsupported_format_is_400() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source.clone())
            .oneshot(get(
                "/api/admin/reportes/academicos/export?format=csv",
                Some("dev-admin-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Formato no soportado");
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_excel_is_default_format() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source.clone())
            .oneshot(get(
                "/api/admin/reportes/academicos/export",
                Some("dev-admin-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"reporte-academicos.xlsx\""
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..2], b"PK");
        assert_eq!(source.call_count(), 1);
    }

    #[tokio::test]
    async fn test_listado_json_is_keyed_by_kind() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source)
            .oneshot(get(
                "/api/admin/reportes/listado/inscripciones?estado=activo",
                Some("dev-admin-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["inscripciones"][0]["estudiante"], "Ana Rojas");
    }

    #[tokio::test]
    async fn test_unknown_listado_is_404() {
        let source = Arc::new(FixtureSource::populated());
        let response = app(source.clone())
            .oneshot(get(
                "/api/admin/reportes/listado/nominas/vista",
                Some("dev-admin-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn test_query_failure_is_generic_500() {
        let source = Arc::new(FixtureSource::failing());
        let response = app(source)
            .oneshot(get(
                "/api/admin/reportes/financieros/export?format=pdf",
                Some("dev-admin-token"),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Error al generar el reporte");
        assert!(!json.to_string().contains("PoolTimedOut"));
    }

    #[tokio::test]
    async fn test_rejection_with_success_status_is_401() {
        for status in [Some(StatusCode::OK), None] {
            let source = Arc::new(FixtureSource::populated());
            let response = app_with_auth(source.clone(), FixedRejection(status))
                .oneshot(get("/api/admin/reportes/academicos/export", Some("dev-admin-token")))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{status:?}");
            assert_eq!(body_json(response).await["error"], "Sesión expirada");
            assert_eq!(source.call_count(), 0);
        }
    }

    #[tokio::test]
    async fn test_rejection_keeps_forbidden_status() {
        let source = Arc::new(FixtureSource::populated());
        let response = app_with_auth(source, FixedRejection(Some(StatusCode::FORBIDDEN)))
            .oneshot(get("/api/admin/reportes/listado/pagos", None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
