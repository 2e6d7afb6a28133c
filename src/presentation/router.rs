use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{AdvisorClient, TextExtractor};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, options_handler, submission_handler};
use crate::presentation::state::AppState;

/// Headroom for the non-file form fields on top of the upload limit.
const FORM_FIELDS_ALLOWANCE_BYTES: usize = 1024 * 1024;

pub fn create_router<E, C>(state: AppState<E, C>) -> Router
where
    E: TextExtractor + ?Sized + 'static,
    C: AdvisorClient + ?Sized + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state
        .upload_limit_bytes
        .saturating_add(FORM_FIELDS_ALLOWANCE_BYTES);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/options", get(options_handler))
        .route(
            "/api/v1/submissions",
            post(submission_handler::<E, C>).layer(DefaultBodyLimit::max(body_limit)),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
