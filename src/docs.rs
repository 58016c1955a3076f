use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::auth::model::{AuthenticatedUser, LoginRequest, LoginResponse};
use crate::modules::flights::model::{CreateFlightDto, Flight, Schedule, UpdateFlightDto};
use crate::utils::errors::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::sign_in,
        crate::modules::flights::controller::get_flights,
        crate::modules::flights::controller::create_flight,
        crate::modules::flights::controller::get_flight_by_id,
        crate::modules::flights::controller::update_flight,
        crate::modules::flights::controller::delete_flight,
    ),
    components(
        schemas(
            Flight,
            Schedule,
            CreateFlightDto,
            UpdateFlightDto,
            LoginRequest,
            LoginResponse,
            AuthenticatedUser,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Operations related to user authentication"),
        (name = "Flights", description = "Route API to manage flights")
    ),
    info(
        title = "Aviobook API",
        version = "1.0.0",
        description = "API documentation for managing flights"
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
