//! Bearer-token authentication extractor.
//!
//! Validates the `Authorization: Bearer <access token>` header before a
//! protected handler runs. Performs no business logic itself.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header, request::Parts},
    response::{IntoResponse, Response},
};

use cartwheel_core::UserId;

use crate::state::AppState;

/// Extractor that requires a valid bearer access token.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     CurrentUser(user_id): CurrentUser,
/// ) -> impl IntoResponse {
///     format!("Hello, user {user_id}!")
/// }
/// ```
pub struct CurrentUser(pub UserId);

/// Rejection for unauthenticated requests.
///
/// Every failure mode (missing header, wrong scheme, invalid/expired
/// token, unexpected signing algorithm) produces the same response, so
/// the cause is not observable from outside.
pub struct AuthRejection;

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, "unauthorized").into_response()
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AuthRejection;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AuthRejection)?;

        let token = header.strip_prefix("Bearer ").ok_or(AuthRejection)?;

        let claims = state.tokens().verify(token).map_err(|_| AuthRejection)?;

        Ok(Self(claims.user_id))
    }
}
