use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn invalid_payload(message: String) -> AppError {
    AppError::bad_request(anyhow!("Invalid payload")).with_message(message)
}

/// JSON extractor that turns both deserialization rejections and schema
/// constraint violations into the API's 400 "Invalid payload" body.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return invalid_payload(format!("{} is required", field));
                }

                if error_msg.contains("invalid type") {
                    return invalid_payload("Invalid field type in request".to_string());
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return invalid_payload(
                        "Missing 'Content-Type: application/json' header".to_string(),
                    );
                }

                invalid_payload("Invalid request body".to_string())
            })?;

        value
            .validate()
            .map_err(|errors| invalid_payload(format_errors(&errors)))?;

        Ok(ValidatedJson(value))
    }
}
