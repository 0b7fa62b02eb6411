use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tourdesk_catalog::OptionCatalog;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomTypeOptions {
    pub hotel: String,
    /// False when the hotel is not in the catalog and the defaults are offered
    pub known: bool,
    pub room_types: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/catalog", get(get_catalog))
        .route("/v1/admin/catalog/hotels/{name}/room-types", get(get_room_types))
}

/// GET /v1/admin/catalog
async fn get_catalog(State(state): State<AppState>) -> Json<OptionCatalog> {
    Json(state.store.catalog.as_ref().clone())
}

/// GET /v1/admin/catalog/hotels/{name}/room-types
async fn get_room_types(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Json<RoomTypeOptions> {
    let catalog = &state.store.catalog;
    Json(RoomTypeOptions {
        known: catalog.is_hotel(&name),
        room_types: catalog.room_type_options(&name).to_vec(),
        hotel: name,
    })
}
