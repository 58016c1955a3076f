use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A stored flight. On the wire the scheduled times stay nested under
/// `schedule`; in storage they are the `schedule_std`/`schedule_sta`
/// columns.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub id: Uuid,
    pub aircraft: String,
    pub flight_number: String,
    #[sqlx(flatten)]
    pub schedule: Schedule,
    pub departure: String,
    pub destination: String,
}

/// Scheduled time of departure (`std`) and arrival (`sta`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Schedule {
    #[sqlx(rename = "schedule_std")]
    pub std: DateTime<Utc>,
    #[sqlx(rename = "schedule_sta")]
    pub sta: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFlightDto {
    #[validate(length(min = 1, max = 10, message = "aircraft must be 1 to 10 characters"))]
    pub aircraft: String,
    #[validate(length(min = 1, max = 10, message = "flightNumber must be 1 to 10 characters"))]
    pub flight_number: String,
    pub schedule: Schedule,
    #[validate(length(equal = 4, message = "departure must be a 4-character airport code"))]
    pub departure: String,
    #[validate(length(equal = 4, message = "destination must be a 4-character airport code"))]
    pub destination: String,
}

/// Partial update: supplied fields replace the stored ones, the rest are
/// preserved. A supplied `schedule` replaces both timestamps together.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFlightDto {
    #[validate(length(min = 1, max = 10, message = "aircraft must be 1 to 10 characters"))]
    pub aircraft: Option<String>,
    #[validate(length(min = 1, max = 10, message = "flightNumber must be 1 to 10 characters"))]
    pub flight_number: Option<String>,
    pub schedule: Option<Schedule>,
    #[validate(length(equal = 4, message = "departure must be a 4-character airport code"))]
    pub departure: Option<String>,
    #[validate(length(equal = 4, message = "destination must be a 4-character airport code"))]
    pub destination: Option<String>,
}
