use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::flights::model::{CreateFlightDto, Flight, UpdateFlightDto};
use crate::utils::errors::AppError;

pub struct FlightService;

impl FlightService {
    #[instrument(skip(db))]
    pub async fn get_flights(db: &PgPool) -> Result<Vec<Flight>, AppError> {
        let flights = sqlx::query_as::<_, Flight>(
            "SELECT id, aircraft, flight_number, schedule_std, schedule_sta, departure, destination FROM flights",
        )
        .fetch_all(db)
        .await?;

        Ok(flights)
    }

    #[instrument(skip(db))]
    pub async fn create_flight(db: &PgPool, dto: CreateFlightDto) -> Result<Flight, AppError> {
        let flight = sqlx::query_as::<_, Flight>(
            r#"INSERT INTO flights (aircraft, flight_number, schedule_std, schedule_sta, departure, destination)
               VALUES ($1, $2, $3, $4, $5, $6)
               RETURNING id, aircraft, flight_number, schedule_std, schedule_sta, departure, destination"#,
        )
        .bind(&dto.aircraft)
        .bind(&dto.flight_number)
        .bind(dto.schedule.std)
        .bind(dto.schedule.sta)
        .bind(&dto.departure)
        .bind(&dto.destination)
        .fetch_one(db)
        .await?;

        Ok(flight)
    }

    #[instrument(skip(db))]
    pub async fn get_flight_by_id(db: &PgPool, flight_id: Uuid) -> Result<Flight, AppError> {
        let flight = sqlx::query_as::<_, Flight>(
            "SELECT id, aircraft, flight_number, schedule_std, schedule_sta, departure, destination FROM flights WHERE id = $1",
        )
        .bind(flight_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Flight not found")))?;

        Ok(flight)
    }

    #[instrument(skip(db))]
    pub async fn update_flight(
        db: &PgPool,
        flight_id: Uuid,
        dto: UpdateFlightDto,
    ) -> Result<Flight, AppError> {
        let existing = sqlx::query_as::<_, Flight>(
            "SELECT id, aircraft, flight_number, schedule_std, schedule_sta, departure, destination FROM flights WHERE id = $1",
        )
        .bind(flight_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Flight not found")))?;

        let aircraft = dto.aircraft.unwrap_or(existing.aircraft);
        let flight_number = dto.flight_number.unwrap_or(existing.flight_number);
        let schedule = dto.schedule.unwrap_or(existing.schedule);
        let departure = dto.departure.unwrap_or(existing.departure);
        let destination = dto.destination.unwrap_or(existing.destination);

        let flight = sqlx::query_as::<_, Flight>(
            r#"UPDATE flights
               SET aircraft = $1, flight_number = $2, schedule_std = $3, schedule_sta = $4, departure = $5, destination = $6
               WHERE id = $7
               RETURNING id, aircraft, flight_number, schedule_std, schedule_sta, departure, destination"#,
        )
        .bind(&aircraft)
        .bind(&flight_number)
        .bind(schedule.std)
        .bind(schedule.sta)
        .bind(&departure)
        .bind(&destination)
        .bind(flight_id)
        .fetch_one(db)
        .await?;

        Ok(flight)
    }

    #[instrument(skip(db))]
    pub async fn delete_flight(db: &PgPool, flight_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM flights WHERE id = $1")
            .bind(flight_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Flight not found")));
        }

        Ok(())
    }
}
