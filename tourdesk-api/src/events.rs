use std::convert::Infallible;

use axum::{
    extract::{Query, State},
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
    Router,
};
use futures_util::stream::{Stream, StreamExt};
use serde::Deserialize;
use tokio_stream::wrappers::BroadcastStream;
use tourdesk_shared::ScreenKind;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EventFilter {
    /// Only forward changes for this screen
    pub screen: Option<ScreenKind>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/admin/events", get(stream_events))
}

/// GET /v1/admin/events
async fn stream_events(
    State(state): State<AppState>,
    Query(filter): Query<EventFilter>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let rx = state.store.events().subscribe();
    let screen = filter.screen;

    let stream = BroadcastStream::new(rx).filter_map(move |result| async move {
        match result {
            Ok(event) if screen.map_or(true, |s| s == event.screen) => Event::default()
                .event("roster_changed")
                .json_data(&event)
                .ok()
                .map(Ok),
            Ok(_) => None,
            // Lagged receivers just skip what they missed
            Err(err) => {
                tracing::warn!("Event stream lagged: {}", err);
                None
            }
        }
    });

    Sse::new(stream).keep_alive(KeepAlive::default())
}
