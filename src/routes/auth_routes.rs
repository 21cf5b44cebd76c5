use axum::{extract::State, routing::post, Json, Router};
use tracing::info;

use crate::dto::auth_dto::{LoginRequest, LoginResponse};
use crate::middleware::auth::{password_matches, WRONG_PASSWORD};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Configura la ruta de login (fuera de la contraseña compartida)
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let expected = state.config.app_password.as_deref();
    if !password_matches(expected, Some(request.password.as_str())) {
        return Err(AppError::Unauthorized(WRONG_PASSWORD.to_string()));
    }

    info!("🔑 Login correcto");
    Ok(Json(LoginResponse {
        success: true,
        password_required: expected.is_some(),
    }))
}
