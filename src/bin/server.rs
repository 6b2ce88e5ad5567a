//! fpdiff REST API server.
//!
//! Provides HTTP endpoints for float32 sequence comparison via the fpdiff engine.
//!
//! Run with: `cargo run --bin fpdiff-server --features server`
//!
//! Environment variables:
//! - `FPDIFF_PORT` - Port to listen on (default: 8080)
//! - `FPDIFF_HOST` - Host to bind to (default: 0.0.0.0)
//! - `FPDIFF_API_TOKEN` - Bearer token for authentication (optional, if set all requests require it)
//! - `FPDIFF_SERVER_LOG` - tracing filter (default: fpdiff=info,fpdiff_server=info,tower_http=info)

use std::io::Write;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{DefaultBodyLimit, Multipart, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tempfile::NamedTempFile;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use fpdiff::cli::args::Args;
use fpdiff::cli::exit::Outcome;
use fpdiff::orchestrator;
use fpdiff::source::byte_order::ByteOrder;

/// Server configuration from environment.
#[derive(Clone)]
struct Config {
    port: u16,
    host: String,
    api_token: Option<String>,
}

impl Config {
    fn from_env() -> Self {
        Self {
            port: std::env::var("FPDIFF_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            host: std::env::var("FPDIFF_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_token: std::env::var("FPDIFF_API_TOKEN")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fpdiff::logging::init(
        "FPDIFF_SERVER_LOG",
        "fpdiff=info,fpdiff_server=info,tower_http=info",
    );

    let config = Config::from_env();
    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    if config.api_token.is_some() {
        tracing::info!("API token authentication enabled");
    } else {
        tracing::warn!("No FPDIFF_API_TOKEN set - API is unauthenticated");
    }

    let shared_config = Arc::new(config);

    let app = Router::new()
        .route("/health", get(health))
        .route("/compare", post(compare))
        .with_state(shared_config)
        .layer(DefaultBodyLimit::max(512 * 1024 * 1024)) // 512MB max
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("fpdiff-server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

/// Health check endpoint.
async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}

/// Compare two float32 files.
///
/// Accepts multipart form data with:
/// - `first`: The reference file
/// - `second`: The file compared against `first`
/// - `byte_order`: (optional) native/little/big (default native)
///
/// Responds with the plain-text report, or the one-line diagnostic and 422
/// when the comparison is refused.
///
/// Requires `Authorization: Bearer <token>` header if `FPDIFF_API_TOKEN` is set.
async fn compare(
    State(config): State<Arc<Config>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Some(expected_token) = &config.api_token {
        let auth_header = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        let provided_token = auth_header
            .strip_prefix("Bearer ")
            .or_else(|| auth_header.strip_prefix("bearer "))
            .unwrap_or("");

        if provided_token != expected_token {
            return error_response(
                StatusCode::UNAUTHORIZED,
                "Invalid or missing bearer token".to_string(),
            );
        }
    }

    let mut first_file: Option<NamedTempFile> = None;
    let mut second_file: Option<NamedTempFile> = None;
    let mut byte_order = ByteOrder::Native;

    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => return bad_part("multipart body", e),
        };
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "first" | "second" => {
                let data = match field.bytes().await {
                    Ok(data) => data,
                    Err(e) => return bad_part(&name, e),
                };
                let temp = match spool(&data) {
                    Ok(temp) => temp,
                    Err(e) => {
                        return error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            format!("Failed to write temp file: {e}"),
                        );
                    }
                };
                if name == "first" {
                    first_file = Some(temp);
                } else {
                    second_file = Some(temp);
                }
            }
            "byte_order" => {
                let parsed = match field.text().await {
                    Ok(text) => parse_byte_order_part(&text),
                    Err(e) => Err(bad_part(&name, e)),
                };
                match parsed {
                    Ok(order) => byte_order = order,
                    Err(response) => return response,
                }
            }
            _ => {
                // Ignore unknown fields
            }
        }
    }

    let Some(first_temp) = first_file else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required field: 'first' (float32 file)".to_string(),
        );
    };
    let Some(second_temp) = second_file else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Missing required field: 'second' (float32 file)".to_string(),
        );
    };

    let args = Args::new(
        first_temp.path().to_path_buf(),
        second_temp.path().to_path_buf(),
        byte_order,
    );

    match orchestrator::run(&args) {
        Ok(result) => {
            let status = match result.outcome {
                Outcome::Report => StatusCode::OK,
                Outcome::Refusal => StatusCode::UNPROCESSABLE_ENTITY,
            };
            (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                result.output + "\n",
            )
                .into_response()
        }
        Err(e) => error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Comparison failed: {e}"),
        ),
    }
}

/// 400 carrying the underlying error for an unreadable or invalid form part.
fn bad_part(part: &str, error: impl std::fmt::Display) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        format!("Failed to read '{part}': {error}"),
    )
}

fn parse_byte_order_part(text: &str) -> Result<ByteOrder, Response> {
    text.trim()
        .parse::<ByteOrder>()
        .map_err(|e| bad_part("byte_order", e))
}

fn spool(data: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut temp = NamedTempFile::new()?;
    temp.write_all(data)?;
    temp.flush()?;
    Ok(temp)
}
