//! Speeding violations delivered over pub/sub.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A speeding violation published by the traffic-control service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeedingViolation {
    pub vehicle_id: String,
    pub road_id: String,
    pub violation_in_kmh: i32,
    pub timestamp: NaiveDateTime,
}

/// CloudEvents 1.0 envelope used by the sidecar for pub/sub delivery.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudEvent<T> {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub source: String,
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub specversion: String,
    #[serde(default)]
    pub datacontenttype: Option<String>,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub pubsubname: Option<String>,
    pub data: T,
}

/// Handles violations received from the `speedingviolations` topic.
pub trait ViolationProcessor: Send + Sync {
    fn process_speeding_violation(&self, violation: &SpeedingViolation);
}

/// Processor that records each violation in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingViolationProcessor;

impl ViolationProcessor for LoggingViolationProcessor {
    fn process_speeding_violation(&self, violation: &SpeedingViolation) {
        tracing::info!(
            vehicle_id = %violation.vehicle_id,
            road_id = %violation.road_id,
            violation_kmh = violation.violation_in_kmh,
            timestamp = %violation.timestamp,
            "Speeding violation received"
        );
    }
}
