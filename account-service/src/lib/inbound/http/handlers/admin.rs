use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Admin-only probe route: echoes the decoded principal back to the caller.
pub async fn admin_resource(
    Extension(principal): Extension<AuthenticatedUser>,
) -> Result<ApiSuccess<AdminResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        AdminResponseData {
            message: "Admin access granted".to_string(),
            user: PrincipalData {
                id: principal.user_id.to_string(),
                email: principal.email,
                role: principal.role.as_str().to_string(),
            },
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminResponseData {
    pub message: String,
    pub user: PrincipalData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipalData {
    pub id: String,
    pub email: String,
    pub role: String,
}
