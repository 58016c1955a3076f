use crate::config::cors::CorsConfig;
use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::middleware::auth::verify_token;
use crate::modules::auth::router::init_auth_router;
use crate::modules::flights::router::init_flights_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method, header};
use axum::{Router, middleware};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/auth", init_auth_router())
        .nest(
            "/flights",
            init_flights_router()
                .route_layer(middleware::from_fn_with_state(state.clone(), verify_token)),
        )
        .with_state(state.clone())
        .layer(cors_layer(&state.cors_config))
        .layer(middleware::from_fn(logging_middleware))
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]);

    if config.allow_any_origin() {
        return layer.allow_origin(Any);
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    layer.allow_origin(allowed_origins).allow_credentials(true)
}
