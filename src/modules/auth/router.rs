use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::sign_in;

pub fn init_auth_router() -> Router<AppState> {
    Router::new().route("/", post(sign_in))
}
