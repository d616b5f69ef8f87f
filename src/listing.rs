//! Store listing and search.
//!
//! The page is cut at the persistence layer in creation order. Sorting by
//! rating or review count happens afterwards and only reorders the rows of
//! that page; results are not ranked across pages.

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::HashMap;

use crate::constants::{
    DEFAULT_PAGE, DEFAULT_PAGE_LIMIT, ERR_INVALID_LIMIT, ERR_INVALID_PAGE,
};
use crate::db::{self, StoreFilter};
use crate::error::{AppError, Result};
use crate::models::{ReviewStats, StoreSummary};
use crate::validation::non_empty;

/// Listing order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StoreSort {
    /// Newest store first
    #[default]
    Latest,
    /// Highest average rating first, within the page
    Rating,
    /// Most reviews first, within the page
    Reviews,
}

impl StoreSort {
    /// Map a `sort` query value; anything unrecognised lists newest first
    pub fn from_param(value: &str) -> Self {
        match value {
            "rating" => StoreSort::Rating,
            "reviews" => StoreSort::Reviews,
            _ => StoreSort::Latest,
        }
    }
}

/// Raw query string of `GET /stores`
///
/// Numbers are taken as strings so that bad values produce the listing's
/// own validation messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListStoresParams {
    pub q: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Validated listing request
#[derive(Debug, Clone, PartialEq)]
pub struct ListingQuery {
    pub filter: StoreFilter,
    pub sort: StoreSort,
    pub page: u32,
    pub limit: u32,
}

impl ListingQuery {
    fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl TryFrom<ListStoresParams> for ListingQuery {
    type Error = AppError;

    fn try_from(params: ListStoresParams) -> Result<Self> {
        let page = match non_empty(params.page) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_PAGE.to_string()))?,
            None => DEFAULT_PAGE,
        };

        let limit = match non_empty(params.limit) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|l| *l >= 1)
                .ok_or_else(|| AppError::InvalidInput(ERR_INVALID_LIMIT.to_string()))?,
            None => DEFAULT_PAGE_LIMIT,
        };

        let sort = params
            .sort
            .as_deref()
            .map(StoreSort::from_param)
            .unwrap_or_default();

        Ok(ListingQuery {
            filter: StoreFilter {
                name_contains: non_empty(params.q),
                area: non_empty(params.area),
                category: non_empty(params.category),
            },
            sort,
            page,
            limit,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: i64,
    pub total_pages: i64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: i64) -> Self {
        let limit_i64 = i64::from(limit.max(1));
        Self {
            page,
            limit,
            total,
            total_pages: (total + limit_i64 - 1) / limit_i64,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreListing {
    pub stores: Vec<StoreSummary>,
    pub pagination: Pagination,
}

/// Stable descending reorder of an already-cut page
pub fn sort_page(stores: &mut [StoreSummary], sort: StoreSort) {
    match sort {
        StoreSort::Latest => {}
        StoreSort::Rating => stores.sort_by(|a, b| {
            b.stats
                .average_rating
                .total_cmp(&a.stats.average_rating)
        }),
        StoreSort::Reviews => {
            stores.sort_by(|a, b| b.stats.review_count.cmp(&a.stats.review_count))
        }
    }
}

/// Run a listing request against the database
pub async fn fetch_listing(pool: &SqlitePool, query: &ListingQuery) -> Result<StoreListing> {
    let stores = db::stores::list_stores(pool, &query.filter, query.limit, query.offset()).await?;

    let ids: Vec<i64> = stores.iter().map(|s| s.id).collect();
    let mut samples_by_store: HashMap<i64, Vec<(i64, chrono::DateTime<chrono::Utc>)>> =
        HashMap::new();
    for sample in db::reviews::rating_samples(pool, &ids).await? {
        samples_by_store
            .entry(sample.store_id)
            .or_default()
            .push((sample.rating, sample.created_at));
    }

    let mut summaries: Vec<StoreSummary> = stores
        .into_iter()
        .map(|store| {
            let stats = samples_by_store
                .remove(&store.id)
                .map(ReviewStats::compute)
                .unwrap_or_default();
            StoreSummary { store, stats }
        })
        .collect();

    sort_page(&mut summaries, query.sort);

    let total = db::stores::count_stores(pool, &query.filter).await?;

    Ok(StoreListing {
        stores: summaries,
        pagination: Pagination::new(query.page, query.limit, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Store;
    use chrono::Utc;

    fn params(pairs: &[(&str, &str)]) -> ListStoresParams {
        let mut p = ListStoresParams::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "q" => p.q = value,
                "area" => p.area = value,
                "category" => p.category = value,
                "sort" => p.sort = value,
                "page" => p.page = value,
                "limit" => p.limit = value,
                _ => unreachable!(),
            }
        }
        p
    }

    fn summary(id: i64, average_rating: f64, review_count: usize) -> StoreSummary {
        let now = Utc::now();
        StoreSummary {
            store: Store {
                id,
                name: format!("store-{}", id),
                address: None,
                area: None,
                category: None,
                phone: None,
                business_hours: None,
                budget_range: None,
                description: None,
                edit_password: None,
                created_at: now,
                updated_at: now,
            },
            stats: ReviewStats {
                average_rating,
                review_count,
                latest_review_date: None,
            },
        }
    }

    #[test]
    fn test_defaults() {
        let query = ListingQuery::try_from(ListStoresParams::default()).unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort, StoreSort::Latest);
        assert_eq!(query.filter, StoreFilter::default());
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query = ListingQuery::try_from(params(&[
            ("q", ""),
            ("area", ""),
            ("category", ""),
            ("sort", ""),
            ("page", ""),
        ]))
        .unwrap();
        assert_eq!(query.filter, StoreFilter::default());
        assert_eq!(query.sort, StoreSort::Latest);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_filters_and_paging() {
        let query = ListingQuery::try_from(params(&[
            ("q", "ラーメン"),
            ("area", "東京"),
            ("sort", "reviews"),
            ("page", "3"),
            ("limit", "10"),
        ]))
        .unwrap();
        assert_eq!(query.filter.name_contains.as_deref(), Some("ラーメン"));
        assert_eq!(query.filter.area.as_deref(), Some("東京"));
        assert!(query.filter.category.is_none());
        assert_eq!(query.sort, StoreSort::Reviews);
        assert_eq!(query.offset(), 20);
    }

    #[test]
    fn test_rejects_bad_paging() {
        for pairs in [
            [("page", "0")],
            [("page", "-1")],
            [("page", "abc")],
            [("limit", "0")],
            [("limit", "-5")],
            [("limit", "2.5")],
        ] {
            assert!(
                ListingQuery::try_from(params(&pairs)).is_err(),
                "{:?} should be rejected",
                pairs
            );
        }
    }

    #[test]
    fn test_unknown_sort_falls_back_to_latest() {
        let query = ListingQuery::try_from(params(&[("sort", "name")])).unwrap();
        assert_eq!(query.sort, StoreSort::Latest);
        assert_eq!(StoreSort::from_param("rating"), StoreSort::Rating);
        assert_eq!(StoreSort::from_param("latest"), StoreSort::Latest);
        assert_eq!(StoreSort::from_param("RATING"), StoreSort::Latest);
    }

    #[test]
    fn test_large_limit_is_accepted() {
        let query = ListingQuery::try_from(params(&[("limit", "200")])).unwrap();
        assert_eq!(query.limit, 200);
        assert_eq!(query.offset(), 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Pagination::new(1, 20, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 20, 1).total_pages, 1);
        assert_eq!(Pagination::new(1, 20, 20).total_pages, 1);
        assert_eq!(Pagination::new(1, 20, 21).total_pages, 2);
        assert_eq!(Pagination::new(2, 3, 7).total_pages, 3);
    }

    #[test]
    fn test_sort_page_by_rating_is_stable() {
        let mut page = vec![summary(1, 3.0, 1), summary(2, 4.5, 2), summary(3, 3.0, 5)];
        sort_page(&mut page, StoreSort::Rating);
        let ids: Vec<i64> = page.iter().map(|s| s.store.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_page_by_reviews() {
        let mut page = vec![summary(1, 5.0, 1), summary(2, 1.0, 7), summary(3, 0.0, 0)];
        sort_page(&mut page, StoreSort::Reviews);
        let ids: Vec<i64> = page.iter().map(|s| s.store.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn test_sort_page_latest_keeps_order() {
        let mut page = vec![summary(3, 1.0, 1), summary(2, 5.0, 9)];
        sort_page(&mut page, StoreSort::Latest);
        let ids: Vec<i64> = page.iter().map(|s| s.store.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
