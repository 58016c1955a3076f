use axum::{Router, routing::get};

use crate::state::AppState;

use super::controller::{
    create_flight, delete_flight, get_flight_by_id, get_flights, update_flight,
};

pub fn init_flights_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_flights).post(create_flight))
        .route(
            "/{flight_id}",
            get(get_flight_by_id)
                .patch(update_flight)
                .delete(delete_flight),
        )
}
