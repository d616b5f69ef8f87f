use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ERR_RATING_OUT_OF_RANGE, ERR_REVIEW_BODY_REQUIRED};
use crate::error::{AppError, Result};
use crate::validation::{non_empty, parse_rating, validate_review_body};

/// Review row as persisted
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: i64,
    pub store_id: i64,
    pub rating: i64,
    pub nickname: Option<String>,
    pub title: Option<String>,
    pub body: String,
    pub visit_date: Option<String>,
    #[serde(skip_serializing)]
    pub edit_password: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Exact match against the stored edit password
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.edit_password.as_deref() == Some(candidate)
    }
}

/// Fields accepted when posting a review
///
/// `rating` is kept as a JSON number so that out-of-range and fractional
/// values reach validation instead of failing deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
    pub rating: Option<f64>,
    pub nickname: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub visit_date: Option<String>,
    pub edit_password: Option<String>,
}

/// Validated review ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDraft {
    pub rating: i64,
    pub nickname: Option<String>,
    pub title: Option<String>,
    pub body: String,
    pub visit_date: Option<String>,
    pub edit_password: Option<String>,
}

impl NewReview {
    /// Validate rating then body, and collapse empty optional fields to `None`
    pub fn into_draft(self) -> Result<ReviewDraft> {
        let rating = self
            .rating
            .ok_or_else(|| AppError::InvalidInput(ERR_RATING_OUT_OF_RANGE.to_string()))?;
        let rating = parse_rating(rating)?;

        let body = self
            .body
            .ok_or_else(|| AppError::InvalidInput(ERR_REVIEW_BODY_REQUIRED.to_string()))?;
        validate_review_body(&body)?;

        Ok(ReviewDraft {
            rating,
            nickname: non_empty(self.nickname),
            title: non_empty(self.title),
            body,
            visit_date: non_empty(self.visit_date),
            edit_password: non_empty(self.edit_password),
        })
    }
}

/// Projection used for listing aggregates
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct RatingSample {
    pub store_id: i64,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
}
