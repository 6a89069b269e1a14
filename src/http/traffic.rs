//! Entry and exit camera endpoints.
//!
//! Cameras report each passing vehicle; the service keeps a [`VehicleState`]
//! per license number between the two reports.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::state::{KeyedStateRepository, StateError};
use crate::vehicle::VehicleState;

/// Camera report for a passing vehicle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRegistered {
    pub lane: u32,
    pub license_number: String,
    pub timestamp: NaiveDateTime,
}

/// `POST /entrycam`
pub async fn vehicle_entry(
    State(state): State<AppState>,
    Json(event): Json<VehicleRegistered>,
) -> Response {
    tracing::info!(
        license_number = %event.license_number,
        lane = event.lane,
        "Vehicle entered"
    );

    let vehicle = VehicleState::entered(event.license_number, event.timestamp);
    match state.vehicles.save(vehicle).await {
        Ok(_) => StatusCode::OK.into_response(),
        Err(e) => state_failure(e),
    }
}

/// `POST /exitcam`
pub async fn vehicle_exit(
    State(state): State<AppState>,
    Json(event): Json<VehicleRegistered>,
) -> Response {
    let vehicle = match state.vehicles.get(&event.license_number).await {
        Ok(Some(vehicle)) => vehicle,
        Ok(None) => {
            tracing::warn!(license_number = %event.license_number, "Exit without registered entry");
            return (StatusCode::NOT_FOUND, "No entry registered for vehicle").into_response();
        }
        Err(e) => return state_failure(e),
    };

    tracing::info!(
        license_number = %event.license_number,
        lane = event.lane,
        "Vehicle exited"
    );

    match state.vehicles.save(vehicle.exited(event.timestamp)).await {
        Ok(vehicle) => Json(vehicle).into_response(),
        Err(e) => state_failure(e),
    }
}

fn state_failure(error: StateError) -> Response {
    match error {
        StateError::EmptyKey => (StatusCode::BAD_REQUEST, "License number is required").into_response(),
        error => {
            tracing::error!(error = %error, "State store call failed");
            (StatusCode::BAD_GATEWAY, "State store unavailable").into_response()
        }
    }
}
