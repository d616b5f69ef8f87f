use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::constants::{ERR_INVALID_REVIEW_ID, ERR_INVALID_STORE_ID, MSG_REVIEW_DELETED};
use crate::db;
use crate::error::{AppError, Result};
use crate::models::{NewReview, Review};
use crate::routes::{parse_id, AppJson, DeleteRequest, MessageResponse};
use crate::AppState;

/// Post a review for an existing store
///
/// POST /stores/{id}/reviews
///
/// The body is parsed only after the store lookup, so an unknown store is
/// reported as 404 even when the body is malformed or the review invalid.
pub async fn create_review(
    State(state): State<AppState>,
    Path(raw_store_id): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<Review>)> {
    let store_id = parse_id(&raw_store_id, ERR_INVALID_STORE_ID)?;

    if db::stores::find_store(&state.pool, store_id).await?.is_none() {
        return Err(AppError::StoreNotFound);
    }

    let Json(payload) = Json::<NewReview>::from_bytes(&body)?;
    let draft = payload.into_draft()?;
    let review = db::reviews::insert_review(&state.pool, store_id, &draft).await?;

    tracing::info!(
        "Review {} created for store {} (rating {})",
        review.id,
        store_id,
        review.rating
    );

    Ok((StatusCode::CREATED, Json(review)))
}

/// Delete a single review
///
/// DELETE /reviews/{id} with `{"editPassword": ...}`
pub async fn delete_review(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    AppJson(payload): AppJson<DeleteRequest>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&raw_id, ERR_INVALID_REVIEW_ID)?;
    let password = payload.password()?;

    let review = db::reviews::find_review(&state.pool, id)
        .await?
        .ok_or(AppError::ReviewNotFound)?;

    if !review.password_matches(password) {
        tracing::warn!("Rejected delete of review {}: password mismatch", id);
        return Err(AppError::InvalidPassword);
    }

    if !db::reviews::delete_review(&state.pool, id).await? {
        return Err(AppError::ReviewNotFound);
    }

    tracing::info!("Review {} deleted from store {}", id, review.store_id);

    Ok(Json(MessageResponse {
        message: MSG_REVIEW_DELETED.to_string(),
    }))
}
