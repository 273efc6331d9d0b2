//! Authentication route handlers.
//!
//! Registration and login issue an access token in the response body and
//! a refresh token in an HTTP-only cookie. `/auth/refresh` exchanges the
//! cookie for a fresh access token; `/auth/logout` clears the cookie.
//! Refresh tokens are stateless: logout only clears the cookie, there is
//! no server-side revocation.

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use cartwheel_core::Email;

use crate::error::AppError;
use crate::middleware::{REFRESH_COOKIE, RefreshCookie, extract_cookie};
use crate::models::User;
use crate::services::AuthService;
use crate::services::token::REFRESH_TOKEN_TTL_SECS;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response for register and login.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub user: User,
}

/// Response for refresh.
#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub access_token: String,
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body.map_err(|_| AppError::BadRequest("invalid body".to_string()))?;

    let user = AuthService::new(state.pool())
        .register(&req.email, &req.password)
        .await?;

    let (response, cookie) = issue_session(&state, &user)?;

    Ok((
        StatusCode::CREATED,
        [(header::SET_COOKIE, cookie)],
        Json(response),
    )
        .into_response())
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(req) = body.map_err(|_| AppError::BadRequest("invalid body".to_string()))?;

    let user = AuthService::new(state.pool())
        .login(&req.email, &req.password)
        .await?;

    let (response, cookie) = issue_session(&state, &user)?;

    Ok(([(header::SET_COOKIE, cookie)], Json(response)).into_response())
}

/// POST /auth/refresh
///
/// Reads the refresh cookie and returns a new access token. A refresh
/// token without an email claim (issued before the claim existed) falls
/// back to a store lookup by user ID; if that fails the token is treated
/// as invalid.
pub async fn refresh(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>, AppError> {
    let token = extract_cookie(&headers, REFRESH_COOKIE)
        .ok_or_else(|| AppError::Unauthorized("no refresh token".to_string()))?;

    let claims = state
        .tokens()
        .verify(&token)
        .map_err(|_| AppError::Unauthorized("invalid refresh token".to_string()))?;

    let email = match claims.email {
        Some(email) => Email::parse(&email)
            .map_err(|_| AppError::Unauthorized("invalid refresh token".to_string()))?,
        None => AuthService::new(state.pool())
            .email_for(claims.user_id)
            .await?
            .ok_or_else(|| AppError::Unauthorized("invalid refresh token".to_string()))?,
    };

    let access_token = state.tokens().issue_access(claims.user_id, &email)?;

    Ok(Json(RefreshResponse { access_token }))
}

/// POST /auth/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = RefreshCookie::new(state.config().cookie_secure).clear();
    (StatusCode::NO_CONTENT, [(header::SET_COOKIE, cookie)])
}

/// Issue both tokens for a freshly authenticated user.
fn issue_session(state: &AppState, user: &User) -> Result<(AuthResponse, String), AppError> {
    let access_token = state.tokens().issue_access(user.id, &user.email)?;
    let refresh_token = state.tokens().issue_refresh(user.id, &user.email)?;

    let cookie = RefreshCookie::new(state.config().cookie_secure)
        .set(&refresh_token, REFRESH_TOKEN_TTL_SECS);

    Ok((
        AuthResponse {
            access_token,
            user: user.clone(),
        },
        cookie,
    ))
}
