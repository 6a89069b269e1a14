//! Vehicle state tracked between the entry and exit cameras.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::propagation::Tracer;
use crate::state::{Keyed, StateStore, TracingStateRepository};

/// State of a vehicle on the monitored road section, keyed by license number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleState {
    pub license_number: String,
    pub entry_timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit_timestamp: Option<NaiveDateTime>,
}

impl VehicleState {
    /// State recorded when a vehicle passes the entry camera.
    pub fn entered(license_number: impl Into<String>, entry_timestamp: NaiveDateTime) -> Self {
        Self {
            license_number: license_number.into(),
            entry_timestamp,
            exit_timestamp: None,
        }
    }

    /// Copy of this state with the exit time set.
    pub fn exited(self, exit_timestamp: NaiveDateTime) -> Self {
        Self {
            exit_timestamp: Some(exit_timestamp),
            ..self
        }
    }
}

impl Keyed for VehicleState {
    fn key(&self) -> &str {
        &self.license_number
    }
}

/// Vehicle state repository as wired by the service.
pub type VehicleStateRepository = TracingStateRepository<VehicleState, StateStore, dyn Tracer>;
