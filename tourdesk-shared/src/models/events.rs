use uuid::Uuid;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScreenKind {
    Packages,
    Destinations,
}

impl ScreenKind {
    /// Singular record name used in prompts and log lines
    pub fn noun(&self) -> &'static str {
        match self {
            ScreenKind::Packages => "package",
            ScreenKind::Destinations => "destination",
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    Reordered,
    HotelsAdded,
    HotelRemoved,
    HotelGroupRemoved,
    RoomTypeRemoved,
    ExcursionsAdded,
    ExcursionRemoved,
    TourServicesAdded,
    TourServiceRemoved,
}

/// Published after every applied mutation; declined operations publish nothing
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RosterChangedEvent {
    pub screen: ScreenKind,
    pub record_id: Option<Uuid>,
    pub change: ChangeKind,
    pub timestamp: i64,
}

impl RosterChangedEvent {
    pub fn new(screen: ScreenKind, record_id: Option<Uuid>, change: ChangeKind) -> Self {
        Self {
            screen,
            record_id,
            change,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }
}
