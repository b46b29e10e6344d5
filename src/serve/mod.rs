//! The HTTP surface of mdpress: the embedded editor page, a few small JSON
//! endpoints, and the two PDF-producing POST routes.

mod certificate;
mod document;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::common::{Config, Context};
use crate::prelude::*;
use crate::render::{self, TemplateKind};

/// Per-request handler state. Cheap to clone; the configuration is shared.
#[derive(Clone)]
pub struct Server {
    pub config: Arc<Config>,
}

/// Bootstraps the Tokio runtime and starts the internal `async` serving code.
pub fn serve(ctx: Context, address: Option<String>, port: Option<u16>) -> Result<()> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .wrap_err("Failed to start the async runtime.")?
        .block_on(run(ctx, address, port))
}

async fn run(ctx: Context, address: Option<String>, port: Option<u16>) -> Result<()> {
    let host = address.unwrap_or_else(|| ctx.config.serve.address.clone());
    let port = port.unwrap_or(ctx.config.serve.port);

    let address: SocketAddr = format!("{host}:{port}")
        .parse()
        .wrap_err_with(|| format!("\"{host}:{port}\" is not a valid listen address."))
        .suggestion("Check the [serve] table of your configuration file and any -a/-p overrides.")?;

    let server = Server {
        config: Arc::new(ctx.config.clone()),
    };

    let app = router(server);

    info!("Listening on http://{address}");

    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await
        .wrap_err("The HTTP server terminated abnormally.")
}

pub fn router(server: Server) -> Router {
    let open_cors = server.config.serve.open_cors;

    let mut app = Router::new()
        .route("/", get(editor))
        .route("/api/health", get(health))
        .route("/api/info", get(info))
        .route("/api/courses", get(courses))
        .route("/api/convert", post(document::convert))
        .route("/api/certificate", post(certificate::generate))
        .layer(TraceLayer::new_for_http())
        .with_state(server);

    if open_cors {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

async fn editor() -> Html<&'static str> {
    Html(include_str!("editor.html"))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn info() -> Json<Value> {
    Json(json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": env!("CARGO_PKG_DESCRIPTION"),
        "features": [
            "Markdown parsing with extensions",
            "Styled PDF output",
            "Tables and code block support",
            "A4 page format",
            "Participation certificate generation",
        ],
    }))
}

async fn courses() -> Json<Value> {
    Json(json!({ "courses": certificate::Course::ALL }))
}

/// Shepherds one render call onto the blocking thread pool.
///
/// The map_err + and_then flattens the join result, so a panicked task and a
/// failed render surface through the same error path.
async fn render_blocking(kind: TemplateKind, ctx: minijinja::Value) -> Result<Vec<u8>> {
    tokio::task::spawn_blocking(move || render::render(kind, ctx))
        .await
        .map_err(Report::from)
        .and_then(std::convert::identity)
}

/// Packages PDF bytes as a download with the suggested filename.
fn attachment(bytes: Vec<u8>, filename: &str) -> Response {
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    )
        .into_response()
}
