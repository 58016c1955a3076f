//! Per-request authorization gate.
//!
//! Applied as a `route_layer` over every protected route. The token is
//! never inspected locally: one verification call per request goes to the
//! identity provider, and the decoded claims ride the request extensions
//! from there. No retries, no caching of verification results.

use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, header, request::Parts},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::firebase::DecodedUser;

/// The verified identity attached to the request context.
///
/// Handlers behind [`verify_token`] take this as an extractor argument to
/// receive the claims the provider decoded for the current request.
#[derive(Debug, Clone)]
pub struct AuthUser(pub DecodedUser);

impl AuthUser {
    pub fn uid(&self) -> &str {
        &self.0.uid
    }

    pub fn email(&self) -> Option<&str> {
        self.0.email.as_deref()
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(access_denied)
    }
}

/// Middleware that gates a route behind identity-provider token
/// verification.
///
/// - no bearer token: 403 without contacting the provider
/// - token rejected (malformed, expired, revoked, provider unreachable): 401
/// - token verified: claims stored as [`AuthUser`] and the request proceeds
pub async fn verify_token(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(token) = bearer_token(req.headers()) else {
        return Err(access_denied());
    };

    match state.identity.verify_id_token(token).await {
        Ok(user) => {
            req.extensions_mut().insert(AuthUser(user));
            Ok(next.run(req).await)
        }
        Err(err) => {
            debug!(error = %err, "token verification failed");
            Err(AppError::unauthorized(anyhow!("Invalid token"))
                .with_message("The token is invalid or has expired."))
        }
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

fn access_denied() -> AppError {
    AppError::forbidden(anyhow!("Access denied"))
        .with_message("No token provided. You must be logged in.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_extracted() {
        let headers = headers_with_authorization("Bearer abc.def.ghi");
        assert_eq!(bearer_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_header_yields_none() {
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn test_non_bearer_scheme_yields_none() {
        let headers = headers_with_authorization("Basic dXNlcjpwYXNz");
        assert_eq!(bearer_token(&headers), None);
    }

    #[test]
    fn test_bare_token_without_scheme_yields_none() {
        let headers = headers_with_authorization("abc.def.ghi");
        assert_eq!(bearer_token(&headers), None);
    }
}
