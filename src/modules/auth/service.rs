use anyhow::anyhow;
use tracing::instrument;

use crate::utils::errors::AppError;
use crate::utils::firebase::{IdentityError, IdentityProvider, SignedInUser};

pub struct AuthService;

impl AuthService {
    /// Delegates the email/password exchange to the identity provider and
    /// maps its enumerated failures onto the API's error contract.
    #[instrument(skip(identity, password))]
    pub async fn sign_in(
        identity: &dyn IdentityProvider,
        email: &str,
        password: &str,
    ) -> Result<SignedInUser, AppError> {
        match identity.sign_in_with_password(email, password).await {
            Ok(user) => Ok(user),
            Err(IdentityError::InvalidCredentials) => {
                Err(AppError::bad_request(anyhow!("Authentication failed"))
                    .with_message("Invalid payload."))
            }
            Err(err) => Err(AppError::internal(err)),
        }
    }
}
