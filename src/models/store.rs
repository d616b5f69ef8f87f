use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Review, ReviewStats};
use crate::constants::ERR_STORE_NAME_REQUIRED;
use crate::error::{AppError, Result};
use crate::validation::{non_empty, validate_store_name};

/// Store row as persisted
///
/// `edit_password` never leaves the server: it is skipped on serialization.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub business_hours: Option<String>,
    pub budget_range: Option<String>,
    pub description: Option<String>,
    #[serde(skip_serializing)]
    pub edit_password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Store {
    /// Exact match against the stored edit password
    ///
    /// A store created without a password can never be deleted.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.edit_password.as_deref() == Some(candidate)
    }
}

/// Fields accepted when creating a store
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStore {
    pub name: Option<String>,
    pub address: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub business_hours: Option<String>,
    pub budget_range: Option<String>,
    pub description: Option<String>,
    pub edit_password: Option<String>,
}

/// Validated store ready for insertion
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDraft {
    pub name: String,
    pub address: Option<String>,
    pub area: Option<String>,
    pub category: Option<String>,
    pub phone: Option<String>,
    pub business_hours: Option<String>,
    pub budget_range: Option<String>,
    pub description: Option<String>,
    pub edit_password: Option<String>,
}

impl NewStore {
    /// Validate the name and collapse empty optional fields to `None`
    pub fn into_draft(self) -> Result<StoreDraft> {
        let name = self
            .name
            .ok_or_else(|| AppError::InvalidInput(ERR_STORE_NAME_REQUIRED.to_string()))?;
        validate_store_name(&name)?;

        Ok(StoreDraft {
            name,
            address: non_empty(self.address),
            area: non_empty(self.area),
            category: non_empty(self.category),
            phone: non_empty(self.phone),
            business_hours: non_empty(self.business_hours),
            budget_range: non_empty(self.budget_range),
            description: non_empty(self.description),
            edit_password: non_empty(self.edit_password),
        })
    }
}

/// Listing entry: the store plus its aggregates
#[derive(Debug, Clone, Serialize)]
pub struct StoreSummary {
    #[serde(flatten)]
    pub store: Store,
    #[serde(flatten)]
    pub stats: ReviewStats,
}

/// Detail view: the store, its reviews newest-first, and its aggregates
#[derive(Debug, Clone, Serialize)]
pub struct StoreDetail {
    #[serde(flatten)]
    pub store: Store,
    pub reviews: Vec<Review>,
    #[serde(flatten)]
    pub stats: ReviewStats,
}
