use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::user::models::PasswordResetRequest;
use crate::inbound::http::router::AppState;

pub async fn request_password_reset(
    State(state): State<AppState>,
    Json(body): Json<RequestPasswordResetBody>,
) -> Result<ApiSuccess<RequestPasswordResetResponseData>, ApiError> {
    state
        .user_service
        .request_password_reset(&body.email)
        .await
        .map_err(ApiError::from)
        .map(|ref outcome| ApiSuccess::new(StatusCode::OK, outcome.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RequestPasswordResetBody {
    email: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestPasswordResetResponseData {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl From<&PasswordResetRequest> for RequestPasswordResetResponseData {
    fn from(outcome: &PasswordResetRequest) -> Self {
        Self {
            message: outcome.message.clone(),
            token: outcome.token.clone(),
        }
    }
}
