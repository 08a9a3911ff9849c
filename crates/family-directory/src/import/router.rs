use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use super::report::template_csv;
use super::service::ListingImporter;
use crate::error::AppError;
use crate::listings::{ListingKind, ListingStore};

/// Body accepted by the admin import endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ImportRequest {
    pub csv: String,
}

/// Shared state for the import routes.
pub struct ImportState<S> {
    pub importer: ListingImporter<S>,
    pub max_payload_bytes: usize,
}

/// Router builder exposing the admin bulk-import endpoints.
pub fn import_router<S>(state: Arc<ImportState<S>>) -> Router
where
    S: ListingStore + 'static,
{
    // JSON string escaping can inflate the CSV text, so the transport limit is
    // looser than the payload check in the handler.
    let body_limit = state.max_payload_bytes.saturating_mul(2);

    Router::new()
        .route(
            "/api/v1/admin/listings/import/:kind",
            post(import_handler::<S>),
        )
        .route(
            "/api/v1/admin/listings/import/:kind/template",
            get(template_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

pub(crate) async fn import_handler<S>(
    State(state): State<Arc<ImportState<S>>>,
    Path(kind): Path<String>,
    Json(request): Json<ImportRequest>,
) -> Response
where
    S: ListingStore + 'static,
{
    let kind = match kind.parse::<ListingKind>() {
        Ok(kind) => kind,
        Err(err) => return AppError::from(err).into_response(),
    };

    if request.csv.len() > state.max_payload_bytes {
        return AppError::PayloadTooLarge {
            limit: state.max_payload_bytes,
        }
        .into_response();
    }

    let result = state.importer.import(kind, &request.csv);
    (StatusCode::OK, Json(result)).into_response()
}

pub(crate) async fn template_handler(Path(kind): Path<String>) -> Response {
    let kind = match kind.parse::<ListingKind>() {
        Ok(kind) => kind,
        Err(err) => return AppError::from(err).into_response(),
    };

    match template_csv(kind) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            body,
        )
            .into_response(),
        Err(err) => AppError::from(err).into_response(),
    }
}
