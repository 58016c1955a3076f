use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Both fields are optional at the deserialization layer; the handler
// checks presence itself to produce the API's distinct 400 message.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    #[schema(example = "password123")]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    #[schema(example = "1234567890")]
    pub uid: String,
    #[schema(example = "user@example.com")]
    pub email: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Authentication successful")]
    pub message: String,
    /// Identity-provider-issued ID token (JWT).
    pub token: String,
    pub user: AuthenticatedUser,
}
