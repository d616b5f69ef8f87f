//! Review queries.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::{RatingSample, Review, ReviewDraft};

/// Insert a review for `store_id` and return the stored row
///
/// Stepped to completion like `insert_store`, so the row is committed on return.
pub async fn insert_review(pool: &SqlitePool, store_id: i64, draft: &ReviewDraft) -> Result<Review> {
    let review = sqlx::query_as::<_, Review>(
        r#"
        INSERT INTO reviews (
            store_id, rating, nickname, title, body, visit_date, edit_password, created_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(store_id)
    .bind(draft.rating)
    .bind(&draft.nickname)
    .bind(&draft.title)
    .bind(&draft.body)
    .bind(&draft.visit_date)
    .bind(&draft.edit_password)
    .bind(Utc::now())
    .fetch_all(pool)
    .await?
    .pop()
    .ok_or(sqlx::Error::RowNotFound)?;

    Ok(review)
}

pub async fn find_review(pool: &SqlitePool, id: i64) -> Result<Option<Review>> {
    let review = sqlx::query_as::<_, Review>("SELECT * FROM reviews WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(review)
}

/// All reviews of a store, newest first
pub async fn reviews_for_store(pool: &SqlitePool, store_id: i64) -> Result<Vec<Review>> {
    let reviews = sqlx::query_as::<_, Review>(
        "SELECT * FROM reviews WHERE store_id = ? ORDER BY created_at DESC, id DESC",
    )
    .bind(store_id)
    .fetch_all(pool)
    .await?;

    Ok(reviews)
}

/// Rating and creation time of every review belonging to `store_ids`
pub async fn rating_samples(pool: &SqlitePool, store_ids: &[i64]) -> Result<Vec<RatingSample>> {
    if store_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut builder =
        QueryBuilder::<Sqlite>::new("SELECT store_id, rating, created_at FROM reviews WHERE store_id IN (");
    let mut separated = builder.separated(", ");
    for id in store_ids {
        separated.push_bind(*id);
    }
    separated.push_unseparated(")");

    let samples = builder
        .build_query_as::<RatingSample>()
        .fetch_all(pool)
        .await?;

    Ok(samples)
}

pub async fn delete_review(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM reviews WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
