use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::shared::validation::{check_length, ValidationError};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_TAG_CHARS: usize = 50;

/// Catalog entry shown on the public site.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub year_type: String,
    pub price: Decimal,
    pub features: Option<String>,
    pub is_popular: bool,
    pub created_at: DateTime<Utc>,
}

/// Splits on commas, drops blanks and re-joins as `"A, B"`. `None` when nothing is left.
pub fn normalize_features(raw: &str) -> Option<String> {
    let items: Vec<&str> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        None
    } else {
        Some(items.join(", "))
    }
}

/// `category` and `year_type` are lowercase keys such as `aiml` or `major`.
pub fn catalog_tag(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let tag = raw.trim().to_lowercase();
    if tag.is_empty() {
        return Err(ValidationError::invalid(field, "must not be blank"));
    }
    check_length(field, &tag, MAX_TAG_CHARS)?;
    Ok(tag)
}

pub fn project_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::invalid("title", "must not be blank"));
    }
    check_length("title", title, MAX_TITLE_CHARS)?;
    Ok(title.to_string())
}
