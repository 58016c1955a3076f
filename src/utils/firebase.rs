//! Identity delegate over the Firebase Auth REST API.
//!
//! This service never inspects token contents itself: sign-in goes through
//! `accounts:signInWithPassword` and per-request verification through
//! `accounts:lookup`, so every decision about a credential is made by the
//! identity provider. Failures come back as [`IdentityError`] variants so
//! route handlers match on an enumerated reason instead of provider error
//! strings.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::instrument;

use crate::config::firebase::FirebaseConfig;

#[derive(Debug, Error)]
pub enum IdentityError {
    /// The provider rejected the email/password pair.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The provider rejected the token (malformed, expired, or revoked).
    #[error("invalid or expired token")]
    InvalidToken,
    /// The provider could not be reached.
    #[error("identity provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered with an error outside the classified set.
    #[error("identity provider error: {0}")]
    Upstream(String),
}

/// Claims decoded by the provider for a verified token.
#[derive(Debug, Clone)]
pub struct DecodedUser {
    pub uid: String,
    pub email: Option<String>,
}

/// Result of a successful email/password sign-in.
#[derive(Debug, Clone)]
pub struct SignedInUser {
    pub uid: String,
    pub email: String,
    pub id_token: String,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedInUser, IdentityError>;

    async fn verify_id_token(&self, token: &str) -> Result<DecodedUser, IdentityError>;
}

pub struct FirebaseAuth {
    http: reqwest::Client,
    config: FirebaseConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
struct LookupResponse {
    #[serde(default)]
    users: Vec<LookupUser>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupUser {
    local_id: String,
    email: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl FirebaseAuth {
    pub fn new(config: FirebaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn url(&self, method: &str) -> String {
        format!(
            "{}/v1/accounts:{}?key={}",
            self.config.auth_endpoint, method, self.config.api_key
        )
    }

    async fn error_code(response: reqwest::Response) -> Result<String, IdentityError> {
        let body = response.json::<ApiErrorBody>().await?;
        Ok(body.error.message)
    }
}

#[async_trait]
impl IdentityProvider for FirebaseAuth {
    #[instrument(skip(self, password))]
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedInUser, IdentityError> {
        let response = self
            .http
            .post(self.url("signInWithPassword"))
            .json(&json!({
                "email": email,
                "password": password,
                "returnSecureToken": true,
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            let code = Self::error_code(response).await?;
            return Err(classify_sign_in_error(&code));
        }

        let signed_in = response.json::<SignInResponse>().await?;
        Ok(SignedInUser {
            uid: signed_in.local_id,
            email: signed_in.email,
            id_token: signed_in.id_token,
        })
    }

    #[instrument(skip(self, token))]
    async fn verify_id_token(&self, token: &str) -> Result<DecodedUser, IdentityError> {
        let response = self
            .http
            .post(self.url("lookup"))
            .json(&json!({ "idToken": token }))
            .send()
            .await?;

        if !response.status().is_success() {
            let code = Self::error_code(response).await?;
            return Err(classify_lookup_error(&code));
        }

        let lookup = response.json::<LookupResponse>().await?;
        let user = lookup
            .users
            .into_iter()
            .next()
            .ok_or(IdentityError::InvalidToken)?;

        Ok(DecodedUser {
            uid: user.local_id,
            email: user.email,
        })
    }
}

/// Provider error messages sometimes carry context after the code
/// (`"TOO_MANY_ATTEMPTS_TRY_LATER : ..."`); classification only looks at
/// the leading code.
fn leading_code(message: &str) -> &str {
    message
        .split([' ', ':'])
        .next()
        .unwrap_or(message)
}

fn classify_sign_in_error(message: &str) -> IdentityError {
    match leading_code(message) {
        "INVALID_LOGIN_CREDENTIALS" | "EMAIL_NOT_FOUND" | "INVALID_PASSWORD" | "INVALID_EMAIL"
        | "USER_DISABLED" => IdentityError::InvalidCredentials,
        _ => IdentityError::Upstream(message.to_string()),
    }
}

fn classify_lookup_error(message: &str) -> IdentityError {
    match leading_code(message) {
        "INVALID_ID_TOKEN" | "TOKEN_EXPIRED" | "USER_NOT_FOUND" | "USER_DISABLED" => {
            IdentityError::InvalidToken
        }
        _ => IdentityError::Upstream(message.to_string()),
    }
}
