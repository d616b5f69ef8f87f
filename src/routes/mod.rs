pub mod extract;
pub mod health;
pub mod reviews;
pub mod stores;

pub use extract::{AppJson, AppQuery};
pub use health::health_check;
pub use reviews::{create_review, delete_review};
pub use stores::{create_store, delete_store, get_store, list_stores};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Body of the password-gated delete endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    pub edit_password: Option<String>,
}

impl DeleteRequest {
    /// The supplied password, rejecting a missing or empty one
    pub fn password(&self) -> Result<&str> {
        match self.edit_password.as_deref() {
            Some(p) if !p.is_empty() => Ok(p),
            _ => Err(AppError::PasswordRequired),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Parse a path identifier; anything but an integer is a bad request
pub fn parse_id(raw: &str, message: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::InvalidInput(message.to_string()))
}
