use std::sync::Arc;

use async_trait::async_trait;
use aviobook::config::cors::CorsConfig;
use aviobook::router::init_router;
use aviobook::state::AppState;
use aviobook::utils::firebase::{DecodedUser, IdentityError, IdentityProvider, SignedInUser};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

pub const VALID_TOKEN: &str = "test-id-token";
pub const TEST_UID: &str = "firebase-uid-0001";
pub const TEST_EMAIL: &str = "user@example.com";
pub const TEST_PASSWORD: &str = "password123";

/// Identity-provider double: one known account, one known valid token.
#[derive(Default)]
pub struct StubIdentity {
    /// When set, every sign-in fails with an unclassified provider error.
    pub fail_upstream: bool,
}

#[async_trait]
impl IdentityProvider for StubIdentity {
    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<SignedInUser, IdentityError> {
        if self.fail_upstream {
            return Err(IdentityError::Upstream("INTERNAL_ERROR".to_string()));
        }

        if email == TEST_EMAIL && password == TEST_PASSWORD {
            Ok(SignedInUser {
                uid: TEST_UID.to_string(),
                email: email.to_string(),
                id_token: VALID_TOKEN.to_string(),
            })
        } else {
            Err(IdentityError::InvalidCredentials)
        }
    }

    async fn verify_id_token(&self, token: &str) -> Result<DecodedUser, IdentityError> {
        if token == VALID_TOKEN {
            Ok(DecodedUser {
                uid: TEST_UID.to_string(),
                email: Some(TEST_EMAIL.to_string()),
            })
        } else {
            Err(IdentityError::InvalidToken)
        }
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    setup_test_app_with_identity(pool, StubIdentity::default())
}

pub fn setup_test_app_with_identity(pool: PgPool, identity: StubIdentity) -> Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        identity: Arc::new(identity),
        cors_config: CorsConfig::from_env(),
    };
    init_router(state)
}

/// Sends one request through the router and collects the JSON body
/// (`Null` for empty bodies such as 204 responses).
pub async fn request(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}
