//! HTTP front door: the SPA shell, static assets and the forwarded DCP API

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::SiteConfig;
use crate::upstream::{Upstream, UpstreamResponse};

pub const STATIONS_PATH: &str = "/api/json";
pub const LAST_SCAN_PATH: &str = "/api/last";

/// Router state
#[derive(Clone)]
pub struct AppState {
    pub upstream: Arc<dyn Upstream>,
    pub shell: Arc<str>,
}

/// Build the axum router
pub fn build_router(upstream: Arc<dyn Upstream>, site: &SiteConfig) -> Router {
    let state = AppState {
        upstream,
        shell: render_shell(site).into(),
    };

    Router::new()
        .route(STATIONS_PATH, get(stations_handler))
        .route("/json", get(stations_handler))
        .route(LAST_SCAN_PATH, get(last_scan_handler))
        .route(
            "/api/{mac}",
            get(get_station_handler).post(save_station_handler),
        )
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(site.root.join("pkg")))
        .nest_service("/public", ServeDir::new(site.root.join("public")))
        .fallback(fallback_handler)
        .with_state(state)
}

/// Upstream path for a station, if `mac` is a plain single segment.
///
/// `Path` hands us the decoded segment, so an encoded `/`, `?` or `..` must
/// be refused here or it would address arbitrary upstream URLs.
pub fn station_path(mac: &str) -> Option<String> {
    let plain = !mac.is_empty()
        && !mac.contains("..")
        && mac
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ':' | '-' | '.' | '_'));
    plain.then(|| format!("/api/{}", mac))
}

/// HTML page that boots the wasm frontend; served for every client route
pub fn render_shell(site: &SiteConfig) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="modulepreload" href="/pkg/{bundle}.js">
    <link rel="preload" href="/pkg/{bundle}.wasm" as="fetch" type="application/wasm" crossorigin="">
</head>
<body>
    <script type="module">
        import init from '/pkg/{bundle}.js';
        init({{ module_or_path: '/pkg/{bundle}.wasm' }});
    </script>
</body>
</html>"#,
        title = site.title,
        bundle = site.bundle,
    )
}

fn relay(result: crate::Result<UpstreamResponse>) -> Response {
    match result {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
            let mut response = (status, upstream.body).into_response();
            if let Some(value) = upstream
                .content_type
                .and_then(|ct| HeaderValue::from_str(&ct).ok())
            {
                response.headers_mut().insert(CONTENT_TYPE, value);
            }
            response
        }
        Err(e) => {
            tracing::warn!("{}", e);
            (StatusCode::BAD_GATEWAY, e.to_string()).into_response()
        }
    }
}

async fn stations_handler(State(app): State<AppState>) -> Response {
    relay(app.upstream.get(STATIONS_PATH).await)
}

async fn last_scan_handler(State(app): State<AppState>) -> Response {
    relay(app.upstream.get(LAST_SCAN_PATH).await)
}

fn invalid_station(mac: &str) -> Response {
    tracing::warn!("Rejected station key {:?}", mac);
    (StatusCode::BAD_REQUEST, format!("Invalid station key {:?}", mac)).into_response()
}

async fn get_station_handler(State(app): State<AppState>, Path(mac): Path<String>) -> Response {
    match station_path(&mac) {
        Some(path) => relay(app.upstream.get(&path).await),
        None => invalid_station(&mac),
    }
}

async fn save_station_handler(
    State(app): State<AppState>,
    Path(mac): Path<String>,
    body: String,
) -> Response {
    let Some(path) = station_path(&mac) else {
        return invalid_station(&mac);
    };
    tracing::info!("Saving station {}", mac);
    relay(app.upstream.post_json(&path, body).await)
}

/// Client routes get the shell; unknown API paths and other methods do not
async fn fallback_handler(State(app): State<AppState>, method: Method, uri: Uri) -> Response {
    let path = uri.path();
    if path == "/api" || path.starts_with("/api/") {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    }
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }
    Html(app.shell.to_string()).into_response()
}

async fn health_handler() -> impl IntoResponse {
    "OK"
}
