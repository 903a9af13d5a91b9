//! Forwarding of `/api/*` requests to the upstream words API.
//!
//! The console always calls the same-origin `/api` base; this handler relays
//! method, path, query, `content-type` and body to the configured upstream
//! and hands the upstream's status, `content-type` and body back unchanged.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures become `502` with a `{success: false, error}` body, so
//! the console reports them like any other rejected request.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::state::AppState;

/// Envelope returned when the upstream cannot be reached.
#[derive(Debug, Serialize)]
struct UnavailableBody {
    success: bool,
    error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = UnavailableBody { success: false, error: "upstream API unavailable" };
        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Full upstream URL for an incoming request URI.
pub fn upstream_url(upstream: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str());
    format!("{upstream}{path_and_query}")
}

/// `ANY /api/{*path}`: relay to the upstream.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let url = upstream_url(&state.upstream, &uri);
    match relay(&state, method.clone(), &url, &headers, body).await {
        Ok(response) => {
            tracing::debug!(%method, path = uri.path(), status = response.status().as_u16(), "proxied api request");
            response
        }
        Err(e) => {
            tracing::warn!(%method, path = uri.path(), error = %e, "api upstream request failed");
            e.into_response()
        }
    }
}

async fn relay(state: &AppState, method: Method, url: &str, headers: &HeaderMap, body: Bytes) -> Result<Response, ProxyError> {
    let mut request = state.http.request(method, url);
    for name in [CONTENT_TYPE, ACCEPT] {
        if let Some(value) = headers.get(&name) {
            request = request.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        request = request.body(body);
    }

    let upstream = request.send().await?;
    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    let mut response = (status, bytes).into_response();
    match content_type {
        Some(value) => {
            response.headers_mut().insert(CONTENT_TYPE, value);
        }
        None => {
            response.headers_mut().remove(CONTENT_TYPE);
        }
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
