use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tourdesk_manager::{Decline, Outcome};
use tourdesk_shared::{ChangeKind, ScreenKind};
use tracing::{debug, info};
use uuid::Uuid;

use crate::state::AppState;

// ==================== Request Types ====================

/// Nights and city; a missing field declines rather than rejects
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StayRequest {
    #[serde(deserialize_with = "lenient_nights")]
    pub nights: u32,
    pub city: String,
}

/// Reads any JSON value for nights. Anything but a positive whole number
/// becomes 0, which the roster declines as invalid nights.
pub fn lenient_nights<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let nights = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    Ok(nights.and_then(|n| u32::try_from(n).ok()).unwrap_or(0))
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HotelPickRequest {
    pub hotel: String,
    pub room_types: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NamesRequest {
    pub names: Vec<String>,
}

/// `?confirm=true` stands in for the confirmation dialog's Yes
#[derive(Debug, Default, Deserialize)]
pub struct ConfirmQuery {
    #[serde(default)]
    pub confirm: bool,
}

// ==================== Response Types ====================

#[derive(Debug, Serialize)]
pub struct MutationResponse<T> {
    pub applied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Decline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<T>,
}

impl<T> From<Outcome<T>> for MutationResponse<T> {
    fn from(outcome: Outcome<T>) -> Self {
        match outcome {
            Outcome::Applied(record) => Self {
                applied: true,
                reason: None,
                record: Some(record),
            },
            Outcome::Declined(reason) => Self {
                applied: false,
                reason: Some(reason),
                record: None,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub id: Uuid,
    pub expanded: bool,
}

/// Publish an applied change, or log the decline, and shape the reply
pub fn settle<T>(
    state: &AppState,
    screen: ScreenKind,
    record_id: Option<Uuid>,
    change: ChangeKind,
    outcome: Outcome<T>,
) -> Json<MutationResponse<T>> {
    match outcome.decline() {
        None => {
            info!("{:?} on {} {:?}", change, screen.noun(), record_id);
            state.store.notify(screen, record_id, change);
        }
        Some(reason) => debug!("{:?} on {} declined: {}", change, screen.noun(), reason),
    }
    Json(outcome.into())
}

/// Id of the record an applied create produced
pub fn created_id<T, F>(outcome: &Outcome<T>, id_of: F) -> Option<Uuid>
where
    F: FnOnce(&T) -> Uuid,
{
    match outcome {
        Outcome::Applied(record) => Some(id_of(record)),
        Outcome::Declined(_) => None,
    }
}
