//! Routers de la API
//!
//! `create_router` monta todas las rutas con CORS, trazas y compresión.
//! Las rutas bajo `/api` pasan por la contraseña compartida salvo el login.

pub mod auth_routes;
pub mod export_routes;
pub mod logbook_routes;
pub mod report_routes;
pub mod vehicle_routes;

use axum::{extract::State, middleware, routing::get, Json, Router};
use serde_json::{json, Value};
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

use crate::middleware::{cors::cors_layer, auth::password_gate};
use crate::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let gated = Router::new()
        .nest(
            "/vehicles",
            vehicle_routes::create_vehicle_router().merge(logbook_routes::create_logbook_router()),
        )
        .nest("/export", export_routes::create_export_router())
        .nest("/reports-monthly", report_routes::create_report_router())
        .route_layer(middleware::from_fn_with_state(state.clone(), password_gate));

    let api = gated.merge(auth_routes::create_auth_router());

    Router::new()
        .route("/health", get(health))
        .merge(report_routes::create_legacy_report_router())
        .nest("/api", api)
        .layer(cors_layer(&state.config.cors_origins))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "jazdy-backend",
        "storage": state.logbook.backend_name(),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
