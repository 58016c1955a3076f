use anyhow::anyhow;
use axum::Json;
use axum::extract::State;
use tracing::instrument;

use super::model::{AuthenticatedUser, LoginRequest, LoginResponse};
use super::service::AuthService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

/// Authenticate a user with email and password
#[utoipa::path(
    post,
    path = "/auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authentication successful, returns a token and user data", body = LoginResponse),
        (status = 400, description = "Invalid payload or authentication failure", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, body))]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(body): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let email = body.email.as_deref().filter(|email| !email.is_empty());
    let password = body.password.as_deref().filter(|pass| !pass.is_empty());

    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::bad_request(anyhow!("Invalid payload"))
            .with_message("Email and password are required."));
    };

    let user = AuthService::sign_in(state.identity.as_ref(), email, password).await?;

    Ok(Json(LoginResponse {
        message: "Authentication successful".to_string(),
        token: user.id_token,
        user: AuthenticatedUser {
            uid: user.uid,
            email: user.email,
        },
    }))
}
