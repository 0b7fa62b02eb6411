use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use tourdesk_manager::{Outcome, PackageExpansion, TableRow};
use tourdesk_shared::{ChangeKind, Excursion, Package, PackageHotel, ScreenKind, TourService};
use uuid::Uuid;

use crate::error::AppError;
use crate::mutation::{
    created_id, settle, ConfirmQuery, ExpandResponse, HotelPickRequest, MutationResponse, NamesRequest,
    ReorderRequest, StayRequest,
};
use crate::state::AppState;

const SCREEN: ScreenKind = ScreenKind::Packages;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/admin/packages", get(list_packages).post(create_package))
        .route("/v1/admin/packages/reorder", post(reorder_packages))
        .route(
            "/v1/admin/packages/{id}",
            get(get_package).put(update_package).delete(delete_package),
        )
        .route("/v1/admin/packages/{id}/expand", post(toggle_package_row))
        .route("/v1/admin/packages/{id}/expansion", get(package_expansion))
        .route("/v1/admin/packages/{id}/hotels", post(add_hotels))
        .route("/v1/admin/packages/{id}/hotels/{entry_id}", delete(remove_hotel))
        .route("/v1/admin/packages/{id}/hotel-groups/{hotel}", delete(remove_hotel_group))
        .route("/v1/admin/packages/{id}/excursions", post(add_excursions))
        .route("/v1/admin/packages/{id}/excursions/{item_id}", delete(remove_excursion))
        .route("/v1/admin/packages/{id}/tour-services", post(add_tour_services))
        .route("/v1/admin/packages/{id}/tour-services/{item_id}", delete(remove_tour_service))
}

// ==================== Handlers ====================

/// GET /v1/admin/packages
async fn list_packages(State(state): State<AppState>) -> Json<Vec<TableRow>> {
    Json(state.store.packages.read().await.rows())
}

/// POST /v1/admin/packages
async fn create_package(
    State(state): State<AppState>,
    Json(req): Json<StayRequest>,
) -> Json<MutationResponse<Package>> {
    let outcome = state.store.packages.write().await.roster.create(req.nights, &req.city);
    let id = created_id(&outcome, |p| p.id);
    settle(&state, SCREEN, id, ChangeKind::Created, outcome)
}

/// GET /v1/admin/packages/{id}
async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Package>, AppError> {
    let screen = state.store.packages.read().await;
    Ok(Json(screen.roster.require(id)?.clone()))
}

/// PUT /v1/admin/packages/{id}
async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<StayRequest>,
) -> Result<Json<MutationResponse<Package>>, AppError> {
    let outcome = state.store.packages.write().await.roster.update(id, req.nights, &req.city)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::Updated, outcome))
}

/// DELETE /v1/admin/packages/{id}?confirm=true
async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<MutationResponse<Package>>, AppError> {
    let outcome = state.store.packages.write().await.request_delete(id, &query.confirm)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::Deleted, outcome))
}

/// POST /v1/admin/packages/reorder
async fn reorder_packages(
    State(state): State<AppState>,
    Json(req): Json<ReorderRequest>,
) -> Result<Json<Vec<TableRow>>, AppError> {
    let rows = {
        let mut screen = state.store.packages.write().await;
        screen.reorder_rows(req.from, req.to)?;
        screen.rows()
    };
    state.store.notify(SCREEN, None, ChangeKind::Reordered);
    Ok(Json(rows))
}

/// POST /v1/admin/packages/{id}/expand
async fn toggle_package_row(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ExpandResponse>, AppError> {
    let expanded = state.store.packages.write().await.toggle_row(id)?;
    Ok(Json(ExpandResponse { id, expanded }))
}

/// GET /v1/admin/packages/{id}/expansion
async fn package_expansion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PackageExpansion>, AppError> {
    Ok(Json(state.store.packages.read().await.expansion(id)?))
}

/// POST /v1/admin/packages/{id}/hotels
async fn add_hotels(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<HotelPickRequest>,
) -> Result<Json<MutationResponse<Vec<PackageHotel>>>, AppError> {
    let outcome = state
        .store
        .packages
        .write()
        .await
        .roster
        .add_hotels(id, &req.hotel, &req.room_types)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::HotelsAdded, outcome))
}

/// DELETE /v1/admin/packages/{id}/hotels/{entry_id}
async fn remove_hotel(
    State(state): State<AppState>,
    Path((id, entry_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MutationResponse<PackageHotel>>, AppError> {
    let removed = state.store.packages.write().await.roster.remove_hotel(id, entry_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::HotelRemoved, Outcome::Applied(removed)))
}

/// DELETE /v1/admin/packages/{id}/hotel-groups/{hotel}?confirm=true
async fn remove_hotel_group(
    State(state): State<AppState>,
    Path((id, hotel)): Path<(Uuid, String)>,
    Query(query): Query<ConfirmQuery>,
) -> Result<Json<MutationResponse<Vec<PackageHotel>>>, AppError> {
    let outcome = state
        .store
        .packages
        .write()
        .await
        .roster
        .remove_hotel_group(id, &hotel, &query.confirm)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::HotelGroupRemoved, outcome))
}

/// POST /v1/admin/packages/{id}/excursions
async fn add_excursions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NamesRequest>,
) -> Result<Json<MutationResponse<Vec<Excursion>>>, AppError> {
    let outcome = state.store.packages.write().await.roster.add_excursions(id, &req.names)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::ExcursionsAdded, outcome))
}

/// DELETE /v1/admin/packages/{id}/excursions/{item_id}
async fn remove_excursion(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MutationResponse<Excursion>>, AppError> {
    let removed = state.store.packages.write().await.roster.remove_excursion(id, item_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::ExcursionRemoved, Outcome::Applied(removed)))
}

/// POST /v1/admin/packages/{id}/tour-services
async fn add_tour_services(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NamesRequest>,
) -> Result<Json<MutationResponse<Vec<TourService>>>, AppError> {
    let outcome = state.store.packages.write().await.roster.add_tour_services(id, &req.names)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::TourServicesAdded, outcome))
}

/// DELETE /v1/admin/packages/{id}/tour-services/{item_id}
async fn remove_tour_service(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<MutationResponse<TourService>>, AppError> {
    let removed = state.store.packages.write().await.roster.remove_tour_service(id, item_id)?;
    Ok(settle(&state, SCREEN, Some(id), ChangeKind::TourServiceRemoved, Outcome::Applied(removed)))
}
