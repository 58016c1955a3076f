use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::flights::model::{CreateFlightDto, Flight, UpdateFlightDto};
use crate::modules::flights::service::FlightService;
use crate::state::AppState;
use crate::utils::errors::{AppError, ErrorResponse};
use crate::validator::ValidatedJson;

/// Identifiers are database-assigned UUIDs; a path segment that is not one
/// cannot resolve to a stored flight.
fn parse_flight_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw).map_err(|_| AppError::not_found(anyhow::anyhow!("Flight not found")))
}

#[utoipa::path(
    get,
    path = "/flights",
    responses(
        (status = 200, description = "List of flights", body = Vec<Flight>),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 401, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Flights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_flights(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<Json<Vec<Flight>>, AppError> {
    let flights = FlightService::get_flights(&state.db).await?;

    Ok(Json(flights))
}

#[utoipa::path(
    post,
    path = "/flights",
    request_body = CreateFlightDto,
    responses(
        (status = 201, description = "Flight created successfully", body = Flight),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 401, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Flights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_flight(
    State(state): State<AppState>,
    _user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateFlightDto>,
) -> Result<(StatusCode, Json<Flight>), AppError> {
    let flight = FlightService::create_flight(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(flight)))
}

#[utoipa::path(
    get,
    path = "/flights/{flight_id}",
    params(
        ("flight_id" = String, Path, description = "Flight ID")
    ),
    responses(
        (status = 200, description = "Flight details", body = Flight),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 401, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Flights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_flight_by_id(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(flight_id): Path<String>,
) -> Result<Json<Flight>, AppError> {
    let flight_id = parse_flight_id(&flight_id)?;
    let flight = FlightService::get_flight_by_id(&state.db, flight_id).await?;

    Ok(Json(flight))
}

#[utoipa::path(
    patch,
    path = "/flights/{flight_id}",
    params(
        ("flight_id" = String, Path, description = "Flight ID")
    ),
    request_body = UpdateFlightDto,
    responses(
        (status = 200, description = "Flight updated successfully", body = Flight),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 401, description = "Invalid token", body = ErrorResponse)
    ),
    tag = "Flights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_flight(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(flight_id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateFlightDto>,
) -> Result<Json<Flight>, AppError> {
    let flight_id = parse_flight_id(&flight_id)?;
    let flight = FlightService::update_flight(&state.db, flight_id, dto).await?;

    Ok(Json(flight))
}

#[utoipa::path(
    delete,
    path = "/flights/{flight_id}",
    params(
        ("flight_id" = String, Path, description = "Flight ID")
    ),
    responses(
        (status = 204, description = "Flight deleted successfully"),
        (status = 404, description = "Flight not found", body = ErrorResponse),
        (status = 403, description = "Access denied", body = ErrorResponse),
        (status = 401, description = "Invalid token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Flights",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_flight(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(flight_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let flight_id = parse_flight_id(&flight_id)?;
    FlightService::delete_flight(&state.db, flight_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
