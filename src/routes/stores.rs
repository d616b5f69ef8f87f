use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::constants::{ERR_INVALID_STORE_ID, MSG_STORE_DELETED};
use crate::db;
use crate::error::{AppError, Result};
use crate::listing::{fetch_listing, ListStoresParams, ListingQuery, StoreListing};
use crate::models::{NewStore, ReviewStats, Store, StoreDetail};
use crate::routes::{parse_id, AppJson, AppQuery, DeleteRequest, MessageResponse};
use crate::AppState;

/// Search and page through stores
///
/// GET /stores?q&area&category&sort&page&limit
pub async fn list_stores(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListStoresParams>,
) -> Result<Json<StoreListing>> {
    let query = ListingQuery::try_from(params)?;
    let listing = fetch_listing(&state.pool, &query).await?;

    tracing::debug!(
        "Listed {} of {} stores (page {}, sort {:?})",
        listing.stores.len(),
        listing.pagination.total,
        query.page,
        query.sort
    );

    Ok(Json(listing))
}

/// Register a new store
///
/// POST /stores
pub async fn create_store(
    State(state): State<AppState>,
    AppJson(payload): AppJson<NewStore>,
) -> Result<(StatusCode, Json<Store>)> {
    let draft = payload.into_draft()?;
    let store = db::stores::insert_store(&state.pool, &draft).await?;

    tracing::info!("Store {} created: {}", store.id, store.name);

    Ok((StatusCode::CREATED, Json(store)))
}

/// Store with its reviews and aggregates
///
/// GET /stores/{id}
pub async fn get_store(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<StoreDetail>> {
    let id = parse_id(&raw_id, ERR_INVALID_STORE_ID)?;

    let store = db::stores::find_store(&state.pool, id)
        .await?
        .ok_or(AppError::StoreNotFound)?;
    let reviews = db::reviews::reviews_for_store(&state.pool, id).await?;
    let stats = ReviewStats::compute(reviews.iter().map(|r| (r.rating, r.created_at)));

    Ok(Json(StoreDetail {
        store,
        reviews,
        stats,
    }))
}

/// Delete a store and, through the cascade, all of its reviews
///
/// DELETE /stores/{id} with `{"editPassword": ...}`
pub async fn delete_store(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(payload): AppJson<DeleteRequest>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&raw_id, ERR_INVALID_STORE_ID)?;
    let password = payload.password()?;

    let store = db::stores::find_store(&state.pool, id)
        .await?
        .ok_or(AppError::StoreNotFound)?;

    if !store.password_matches(password) {
        tracing::warn!("Rejected delete of store {}: password mismatch", id);
        return Err(AppError::InvalidPassword);
    }

    if !db::stores::delete_store(&state.pool, id).await? {
        // Removed concurrently between lookup and delete
        return Err(AppError::StoreNotFound);
    }

    tracing::info!("Store {} deleted", id);

    Ok(Json(MessageResponse {
        message: MSG_STORE_DELETED.to_string(),
    }))
}
