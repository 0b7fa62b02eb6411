use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;
use tourdesk_manager::{DestinationExpansion, Outcome, TableRow};
use tourdesk_shared::{
    ChangeKind, Destination, DestinationHotel, Excursion, RoomType, ScreenKind, TourService,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::mutation::{
    created_id, lenient_nights, settle, ConfirmQuery, ExpandResponse, HotelPickRequest, MutationResponse, NamesRequest,
    ReorderRequest, StayRequest,
};
use crate::state::AppState;

const SCREEN: ScreenKind = ScreenKind::Destinations;

// ==================== Request Types ====================

/// The create form: stay fields plus the add-on selections it carries
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateDestinationRequest {
    #[serde(deserialize_with = "lenient_nights")]
    pub nights: u32,
    pub city: String,
    pub excursions: Vec<String>,
    pub tour_services: Vec<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/destinations", get(list_destinations).post(create_destination))
        .route("/v1/admin/destinations/reorder", post(reorder_destinations))
        .route(
            "/v1/admin/destinations/{id}",
            get(get_destination).put(update_destination).delete(delete_destination),
        )
        .route("/v1/admin/destinations/{id}/expand", post(toggle_destination_row))
        .route("/v1/admin/destinations/{id}/expansion", get(destination_expansion))
        .route("/v1/admin/destinations/{id}/hotels", post(add_hotel))
        .route("/v1/admin/destinations/{id}/hotels/{hotel_id}", delete(remove_hotel))
        .route(
            "/v1/admin/destinations/{id}/hotels/{hotel_id}/room-types/{room_type_id}",
            delete(remove_room_type),
        )
        .route("/v1/admin/destinations/{id}/excursions", post(add_excursions))
        .route("/v1/admin/destinations/{id}/excursions/{item_id}", delete(remove_excursion))
        .route("/v1/admin/destinations/{id}/tour-services", post(add_tour_services))
        .route("/v1/admin/destinations/{id}/tour-services/{item_id}", delete(remove_tour_service))
}

// ==================== Handlers ====================

/// GET /v1/admin/destinations
async fn list_destinations(State(state): State<AppState>) -> Json<Vec<TableRow>> {
    Json(state.store.destinations.read().await.rows())
}

/// POST /v1/admin/destinations
async fn create_destination(
    State(state): State<AppState>,
    Json(req): Json<CreateDestinationRequest>,
) -> Json<MutationResponse<Destination>> {
    let outcome = state.store.destinations.write().await.roster.create_with_addons(
        req.nights,
        &req.city,
        &req.excursions,
        &req.tour_services,
        Vec::new(),
    );
    let id = created_id(&outcome, |d| d.id);
    settle(&state, SCREEN, id, ChangeKind::Created, outcome)
}

/// GET /v1/admin/destinations/{id}
async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Destination>, AppError> {
    let screen = state.store.destinations.read().await;
    Ok(Json(screen.roster.require(id)?.clone()))
}

/// PUT /v1/admin/destinations/{id}
///
/// Only nights and city are overwritten.
async fn update_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StayRequest>,
) -> Result<Json<MutationResponse<Destination>>, AppError> {
    let outcome = state
        .store
        .destinations
        .write()
        .await
        .roster
        .update(id, req.nights, &req.city)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::Updated, outcome))
}

/// DELETE /v1/admin/destinations/{id}?confirm=true
async fn delete_destination(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<MutationResponse<Destination>>, AppError> {
    let outcome = state.store.destinations.write().await.request_delete(id, &query.confirm)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::Deleted, outcome))
}

/// POST /v1/admin/destinations/reorder
async fn reorder_destinations(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<Vec<TableRow>>, AppError> {
    let rows = {
        let mut screen = state.store.destinations.write().await;
        screen.reorder_rows(req.from, req.to)?;
        screen.rows()
    };
    state.store.notify(SCREEN, None, ChangeKind::Reordered);
    Ok(Json(rows))
}

/// POST /v1/admin/destinations/{id}/expand
async fn toggle_destination_row(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpandResponse>, AppError> {
    let expanded = state.store.destinations.write().await.toggle_row(id)?;
    Ok(Json(ExpandResponse { id, expanded }))
}

/// GET /v1/admin/destinations/{id}/expansion
async fn destination_expansion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DestinationExpansion>, AppError> {
    Ok(Json(state.store.destinations.read().await.expansion(id)?))
}

/// POST /v1/admin/destinations/{id}/hotels
async fn add_hotel(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<HotelPickRequest>,
) -> Result<Json<MutationResponse<DestinationHotel>>, AppError> {
    let outcome = state
        .store
        .destinations
        .write()
        .await
        .roster
        .add_hotel(id, &req.hotel, &req.room_types)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::HotelsAdded, outcome))
}

/// DELETE /v1/admin/destinations/{id}/hotels/{hotel_id}
async fn remove_hotel(
    State(state): State<AppState>,
    Path((id, hotel_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MutationResponse<DestinationHotel>>, AppError> {
    let removed = state.store.destinations.write().await.roster.remove_hotel(id, hotel_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::HotelRemoved, Outcome::Applied(removed)))
}

/// DELETE /v1/admin/destinations/{id}/hotels/{hotel_id}/room-types/{room_type_id}
async fn remove_room_type(
    State(state): State<AppState>,
    Path((id, hotel_id, room_type_id)): Path<(Uuid, Uuid, Uuid)>,
) -> Result<Json<MutationResponse<RoomType>>, AppError> {
    let removed = state
        .store
        .destinations
        .write()
        .await
        .roster
        .remove_room_type(id, hotel_id, room_type_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::RoomTypeRemoved, Outcome::Applied(removed)))
}

/// POST /v1/admin/destinations/{id}/excursions
async fn add_excursions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NamesRequest>,
) -> Result<Json<MutationResponse<Vec<Excursion>>>, AppError> {
    let outcome = state.store.destinations.write().await.roster.add_excursions(id, &req.names)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::ExcursionsAdded, outcome))
}

/// DELETE /v1/admin/destinations/{id}/excursions/{item_id}
async fn remove_excursion(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MutationResponse<Excursion>>, AppError> {
    let removed = state.store.destinations.write().await.roster.remove_excursion(id, item_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::ExcursionRemoved, Outcome::Applied(removed)))
}

/// POST /v1/admin/destinations/{id}/tour-services
async fn add_tour_services(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NamesRequest>,
) -> Result<Json<MutationResponse<Vec<TourService>>>, AppError> {
    let outcome = state
        .store
        .destinations
        .write()
        .await
        .roster
        .add_tour_services(id, &req.names)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::TourServicesAdded, outcome))
}

/// DELETE /v1/admin/destinations/{id}/tour-services/{item_id}
async fn remove_tour_service(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MutationResponse<TourService>>, AppError> {
    let removed = state
        .store
        .destinations
        .write()
        .await
        .roster
        .remove_tour_service(id, item_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::TourServiceRemoved, Outcome::Applied(removed)))
}
