//! Store queries.

use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::{Store, StoreDraft};

/// Optional listing filters, all combined with AND
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoreFilter {
    /// Substring of the store name
    pub name_contains: Option<String>,
    /// Exact area
    pub area: Option<String>,
    /// Exact category
    pub category: Option<String>,
}

/// Escape LIKE wildcards so the needle matches literally
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_keyword(builder: &mut QueryBuilder<'_, Sqlite>, first: &mut bool) {
    builder.push(if *first { " WHERE " } else { " AND " });
    *first = false;
}

/// Append the WHERE clause for `filter` to `builder`
fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &StoreFilter) {
    let mut first = true;

    if let Some(needle) = &filter.name_contains {
        push_keyword(builder, &mut first);
        builder
            .push("name LIKE ")
            .push_bind(like_pattern(needle))
            .push(" ESCAPE '\\'");
    }
    if let Some(area) = &filter.area {
        push_keyword(builder, &mut first);
        builder.push("area = ").push_bind(area.clone());
    }
    if let Some(category) = &filter.category {
        push_keyword(builder, &mut first);
        builder.push("category = ").push_bind(category.clone());
    }
}

/// Insert a store and return the stored row
///
/// The statement is stepped to completion before returning so the row is
/// committed and visible to other pooled connections.
pub async fn insert_store(pool: &SqlitePool, draft: &StoreDraft) -> Result<Store> {
    let now = Utc::now();

    let store = sqlx::query_as::<_, Store>(
        r#"
        INSERT INTO stores (
            name, address, area, category, phone, business_hours,
            budget_range, description, edit_password, created_at, updated_at
        )
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        RETURNING *
        "#,
    )
    .bind(&draft.name)
    .bind(&draft.address)
    .bind(&draft.area)
    .bind(&draft.category)
    .bind(&draft.phone)
    .bind(&draft.business_hours)
    .bind(&draft.budget_range)
    .bind(&draft.description)
    .bind(&draft.edit_password)
    .bind(now)
    .bind(now)
    .fetch_all(pool)
    .await?
    .pop()
    .ok_or(sqlx::Error::RowNotFound)?;

    Ok(store)
}

pub async fn find_store(pool: &SqlitePool, id: i64) -> Result<Option<Store>> {
    let store = sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(store)
}

/// One page of matching stores, newest first
pub async fn list_stores(
    pool: &SqlitePool,
    filter: &StoreFilter,
    limit: u32,
    offset: u64,
) -> Result<Vec<Store>> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM stores");
    push_filter(&mut builder, filter);
    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(i64::from(limit))
        .push(" OFFSET ")
        .push_bind(i64::try_from(offset).unwrap_or(i64::MAX));

    let stores = builder.build_query_as::<Store>().fetch_all(pool).await?;

    Ok(stores)
}

/// Number of stores matching `filter`, ignoring pagination
pub async fn count_stores(pool: &SqlitePool, filter: &StoreFilter) -> Result<i64> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM stores");
    push_filter(&mut builder, filter);

    let total = builder.build_query_scalar::<i64>().fetch_one(pool).await?;

    Ok(total)
}

/// Delete a store; its reviews go with it through the foreign key cascade
pub async fn delete_store(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM stores WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ラーメン"), "%ラーメン%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b\\c"), "%a\\_b\\\\c%");
    }

    #[test]
    fn test_push_filter_without_conditions() {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM stores");
        push_filter(&mut builder, &StoreFilter::default());
        assert_eq!(builder.sql(), "SELECT * FROM stores");
    }

    #[test]
    fn test_push_filter_joins_conditions() {
        let filter = StoreFilter {
            name_contains: Some("寿司".to_string()),
            area: Some("東京".to_string()),
            category: Some("寿司".to_string()),
        };
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM stores");
        push_filter(&mut builder, &filter);
        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM stores WHERE name LIKE ? ESCAPE '\\' AND area = ? AND category = ?"
        );
    }

    #[test]
    fn test_push_filter_single_exact_match() {
        let filter = StoreFilter {
            category: Some("カフェ".to_string()),
            ..Default::default()
        };
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT * FROM stores");
        push_filter(&mut builder, &filter);
        assert_eq!(builder.sql(), "SELECT * FROM stores WHERE category = ?");
    }
}
