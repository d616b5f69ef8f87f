//! Input validation for stores and reviews.
//!
//! Every check is a pure function returning the user-facing message as an
//! `AppError::InvalidInput` on failure.

use crate::constants::{
    ERR_RATING_NOT_INTEGER, ERR_RATING_OUT_OF_RANGE, ERR_REVIEW_BODY_REQUIRED,
    ERR_REVIEW_BODY_TOO_LONG, ERR_STORE_NAME_REQUIRED, ERR_STORE_NAME_TOO_LONG, MAX_RATING,
    MAX_REVIEW_BODY_LEN, MAX_STORE_NAME_LEN, MIN_RATING,
};
use crate::error::{AppError, Result};

/// Whitespace as stripped by the browser's `String.prototype.trim`
///
/// Includes the byte order mark and excludes NEL (U+0085).
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_form_whitespace)
}

/// Length as the form that submitted it measures it: UTF-16 code units,
/// so characters outside the BMP count twice
fn form_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Store name must be non-blank and at most 100 UTF-16 code units
pub fn validate_store_name(name: &str) -> Result<()> {
    if is_blank(name) {
        return Err(AppError::InvalidInput(ERR_STORE_NAME_REQUIRED.to_string()));
    }
    if form_len(name) > MAX_STORE_NAME_LEN {
        return Err(AppError::InvalidInput(ERR_STORE_NAME_TOO_LONG.to_string()));
    }
    Ok(())
}

/// Review body must be non-blank and at most 1000 UTF-16 code units
pub fn validate_review_body(body: &str) -> Result<()> {
    if is_blank(body) {
        return Err(AppError::InvalidInput(ERR_REVIEW_BODY_REQUIRED.to_string()));
    }
    if form_len(body) > MAX_REVIEW_BODY_LEN {
        return Err(AppError::InvalidInput(ERR_REVIEW_BODY_TOO_LONG.to_string()));
    }
    Ok(())
}

/// Range check only; see [`parse_rating`] for the integer requirement
pub fn validate_rating(rating: f64) -> Result<()> {
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(AppError::InvalidInput(ERR_RATING_OUT_OF_RANGE.to_string()));
    }
    Ok(())
}

/// Validate a rating and narrow it to the stored integer form
pub fn parse_rating(rating: f64) -> Result<i64> {
    validate_rating(rating)?;
    if rating.fract() != 0.0 {
        return Err(AppError::InvalidInput(ERR_RATING_NOT_INTEGER.to_string()));
    }
    Ok(rating as i64)
}

/// Treat empty strings like absent values
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
