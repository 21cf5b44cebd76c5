//! Middleware de contraseña compartida
//!
//! Si `APP_PASSWORD` está configurada, las rutas `/api/*` (salvo el login)
//! exigen la contraseña en `X-App-Password`, `Authorization: Bearer` o
//! `Authorization: Basic` (se ignora el usuario).

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use tracing::debug;

use crate::state::AppState;
use crate::utils::errors::AppError;

pub const PASSWORD_HEADER: &str = "x-app-password";
pub const WRONG_PASSWORD: &str = "Nesprávne heslo.";

/// Contraseña enviada por el cliente, si la hay
pub fn extract_password(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(PASSWORD_HEADER).and_then(|v| v.to_str().ok()) {
        return Some(value.to_string());
    }

    let authorization = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())?;

    if let Some(token) = authorization.strip_prefix("Bearer ") {
        return Some(token.trim().to_string());
    }

    let encoded = authorization.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let credentials = String::from_utf8(decoded).ok()?;
    credentials
        .split_once(':')
        .map(|(_, password)| password.to_string())
}

/// Sin contraseña configurada todo pasa
pub fn password_matches(expected: Option<&str>, provided: Option<&str>) -> bool {
    match expected {
        None => true,
        Some(expected) => provided == Some(expected),
    }
}

/// Middleware de la contraseña compartida
pub async fn password_gate(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let provided = extract_password(request.headers());
    if !password_matches(state.config.app_password.as_deref(), provided.as_deref()) {
        return Err(AppError::Unauthorized(WRONG_PASSWORD.to_string()));
    }

    debug!("🔓 Acceso permitido a {}", request.uri().path());
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_from_custom_header() {
        let mut headers = HeaderMap::new();
        headers.insert(PASSWORD_HEADER, HeaderValue::from_static("tajne"));
        assert_eq!(extract_password(&headers).as_deref(), Some("tajne"));
    }

    #[test]
    fn test_extract_from_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer tajne"));
        assert_eq!(extract_password(&headers).as_deref(), Some("tajne"));
    }

    #[test]
    fn test_extract_from_basic_ignores_user() {
        let mut headers = HeaderMap::new();
        let encoded = format!("Basic {}", STANDARD.encode("kto:tajne:heslo"));
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(&encoded).unwrap());
        assert_eq!(extract_password(&headers).as_deref(), Some("tajne:heslo"));
    }

    #[test]
    fn test_missing_or_garbage_is_none() {
        assert_eq!(extract_password(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic !!!"));
        assert_eq!(extract_password(&headers), None);
    }

    #[test]
    fn test_password_matches() {
        assert!(password_matches(None, None));
        assert!(password_matches(Some("tajne"), Some("tajne")));
        assert!(!password_matches(Some("tajne"), Some("zle")));
        assert!(!password_matches(Some("tajne"), None));
    }
}
