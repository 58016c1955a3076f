use std::env;

/// Default host of the Firebase Auth REST API.
const DEFAULT_AUTH_ENDPOINT: &str = "https://identitytoolkit.googleapis.com";

/// Identity provider settings, mirroring a standard Firebase web app
/// configuration plus the server-side pieces.
#[derive(Clone, Debug)]
pub struct FirebaseConfig {
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
    /// Path to the service-account credential file for server-side
    /// administration.
    pub service_account_path: String,
    /// Auth REST endpoint; override to point at an emulator.
    pub auth_endpoint: String,
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::var("FIREBASE_API_KEY").expect("FIREBASE_API_KEY must be set"),
            auth_domain: env::var("FIREBASE_AUTH_DOMAIN").unwrap_or_default(),
            project_id: env::var("FIREBASE_PROJECT_ID").unwrap_or_default(),
            storage_bucket: env::var("FIREBASE_STORAGE_BUCKET").unwrap_or_default(),
            messaging_sender_id: env::var("FIREBASE_MESSAGING_SENDER_ID").unwrap_or_default(),
            app_id: env::var("FIREBASE_APP_ID").unwrap_or_default(),
            measurement_id: env::var("FIREBASE_MEASUREMENT_ID").unwrap_or_default(),
            service_account_path: env::var("FIREBASE_SERVICE_ACCOUNT_PATH")
                .unwrap_or_else(|_| "firebase-json/service-account-key.json".to_string()),
            auth_endpoint: env::var("FIREBASE_AUTH_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_AUTH_ENDPOINT.to_string()),
        }
    }
}
