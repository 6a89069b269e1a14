//! Fine collection: pub/sub subscription for speeding violations.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::http::server::AppState;
use crate::violation::{CloudEvent, SpeedingViolation};

/// Entry of the sidecar's programmatic subscription list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaprSubscription {
    pub pubsubname: String,
    pub topic: String,
    pub route: String,
}

/// `GET /dapr/subscribe`
pub async fn subscriptions(State(state): State<AppState>) -> Json<Vec<DaprSubscription>> {
    let subscription = &state.subscription;
    Json(vec![DaprSubscription {
        pubsubname: subscription.pubsub_name.clone(),
        topic: subscription.topic.clone(),
        route: subscription.route.clone(),
    }])
}

/// `POST {subscription.route}`: unwrap the CloudEvent and hand it on.
pub async fn collect_fine(
    State(state): State<AppState>,
    Json(event): Json<CloudEvent<SpeedingViolation>>,
) -> StatusCode {
    tracing::debug!(event_id = %event.id, topic = ?event.topic, "Violation event delivered");
    state.violations.process_speeding_violation(&event.data);
    StatusCode::OK
}
