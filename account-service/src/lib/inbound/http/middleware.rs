use axum::extract::Request;
use axum::extract::State;
use axum::http::{self};
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use crate::domain::user::models::Role;
use crate::domain::user::models::UserId;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type carrying the decoded principal for downstream handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub email: String,
    pub role: Role,
}

/// Middleware validating bearer tokens and attaching the principal to
/// request extensions.
///
/// Anything other than an exact `Authorization: Bearer <token>` header
/// counts as no credential present.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(&req)?;

    let claims = state.authenticator.verify_token(token).map_err(|e| {
        tracing::warn!("Token validation failed: {}", e);
        unauthorized("Invalid or expired token")
    })?;

    let user_id = UserId::from_string(&claims.sub).map_err(|e| {
        tracing::warn!("Malformed subject claim: {}", e);
        unauthorized("Invalid token format")
    })?;

    let role = claims.role.parse::<Role>().map_err(|e| {
        tracing::warn!("Malformed role claim: {}", e);
        unauthorized("Invalid token format")
    })?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
        role,
    });

    Ok(next.run(req).await)
}

/// Middleware enforcing a per-route role requirement.
///
/// Layered after `authenticate`; routes without this layer admit any
/// authenticated principal.
pub async fn require_role(
    required: Role,
    req: Request,
    next: Next,
) -> Result<Response, Response> {
    let principal = req
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or_else(|| unauthorized("Missing authentication"))?;

    if principal.role != required {
        tracing::warn!(
            user_id = %principal.user_id,
            role = %principal.role,
            required = %required,
            "Role requirement not met"
        );
        return Err(
            ApiError::Forbidden(format!("Requires role: {}", required)).into_response(),
        );
    }

    Ok(next.run(req).await)
}

fn extract_bearer_token(req: &Request) -> Result<&str, Response> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| unauthorized("Missing Authorization header"))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| unauthorized("Invalid Authorization header"))?;

    // Exact scheme match; "bearer", "Basic", or a bare token all fail
    match auth_str.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() => Ok(token),
        _ => Err(unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>",
        )),
    }
}

// Rejections share the handlers' response envelope so the error surface
// is uniform across middleware and handlers.
fn unauthorized(message: &str) -> Response {
    ApiError::Unauthorized(message.to_string()).into_response()
}
