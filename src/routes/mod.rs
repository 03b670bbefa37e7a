// src/routes/mod.rs
pub mod chat;

use std::any::Any;

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chat::{chat_handler, method_not_allowed};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing::error;

use crate::{
    config::{CorsOrigin, RouteConfig},
    error::AppError,
    state::SharedState,
};

pub fn create_router(config: &RouteConfig) -> Router<SharedState> {
    let router = Router::new()
        .route(
            &config.chat_path,
            post(chat_handler).fallback(method_not_allowed),
        )
        .route("/health", get(|| async { "OK" }))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http());

    match &config.cors_origin {
        Some(origin) => router.layer(cors_layer(origin)),
        None => router,
    }
}

fn cors_layer(origin: &CorsOrigin) -> CorsLayer {
    let allow_origin = match origin {
        CorsOrigin::Any => AllowOrigin::any(),
        CorsOrigin::Exact(value) => AllowOrigin::exact(value.clone()),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };

    error!(panic = %detail, "request handler panicked");
    AppError::Internal(detail).into_response()
}
