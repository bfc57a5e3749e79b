use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::catalog::{find_by_id, find_by_name, Location, TAIWAN_LOCATIONS};

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug)]
pub(super) struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

fn api_error(status: StatusCode, msg: impl Into<String>) -> ApiError {
    ApiError(status, msg.into())
}

fn log_request(line: &str, start: Instant) {
    eprintln!(
        "[{}] {} ({:.1}ms)",
        Utc::now().format("%H:%M:%S"),
        line,
        start.elapsed().as_secs_f64() * 1000.0,
    );
}

// ─── GET /api/locations ──────────────────────────────────────────

#[derive(Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub locations: &'static [Location],
}

pub async fn list() -> Json<CatalogResponse> {
    let start = Instant::now();
    let resp = CatalogResponse {
        count: TAIWAN_LOCATIONS.len(),
        locations: TAIWAN_LOCATIONS,
    };
    log_request("GET /api/locations", start);
    Json(resp)
}

// ─── GET /api/locations/{id} ─────────────────────────────────────

pub async fn by_id(Path(id): Path<u32>) -> Result<Json<Location>, ApiError> {
    let start = Instant::now();
    match find_by_id(id) {
        Some(loc) => {
            log_request(&format!("GET /api/locations/{} -> {}", id, loc.name), start);
            Ok(Json(*loc))
        }
        None => {
            log_request(&format!("GET /api/locations/{} -> 404", id), start);
            Err(api_error(
                StatusCode::NOT_FOUND,
                format!("No location with id {}", id),
            ))
        }
    }
}

// ─── GET /api/search ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub async fn search(Query(params): Query<SearchQuery>) -> Result<Json<Location>, ApiError> {
    let start = Instant::now();

    let query = params.q.as_deref().unwrap_or("").trim();
    if query.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "Missing 'q' parameter"));
    }

    match find_by_name(query) {
        Some(loc) => {
            log_request(&format!("GET /api/search?q={} -> {}", query, loc.name), start);
            Ok(Json(*loc))
        }
        None => {
            log_request(&format!("GET /api/search?q={} -> 404", query), start);
            Err(api_error(
                StatusCode::NOT_FOUND,
                format!("No location matches '{}'", query),
            ))
        }
    }
}
