use chrono::{DateTime, Utc};
use serde::Serialize;

pub const MIN_RATING: i16 = 1;
pub const MAX_RATING: i16 = 5;

/// Widths of the `reviews` VARCHAR columns.
pub mod limits {
    pub const STUDENT_NAME: usize = 150;
    pub const COLLEGE_NAME: usize = 200;
    pub const YEAR_OF_STUDY: usize = 50;
    pub const PROJECT_NAME: usize = 200;
    /// `experience` is TEXT; this only keeps a single review sane.
    pub const EXPERIENCE: usize = 5000;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Review {
    pub id: i64,
    pub student_name: String,
    pub college_name: String,
    pub year_of_study: String,
    pub project_name: String,
    pub rating: i16,
    pub experience: String,
    pub pricing_review: Option<String>,
    pub is_approved: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Rating must be between {MIN_RATING} and {MAX_RATING}, got {0}")]
pub struct RatingOutOfRange(pub i64);

/// Star rating, `1..=5`.
pub fn check_rating(value: i64) -> Result<i16, RatingOutOfRange> {
    i16::try_from(value)
        .ok()
        .filter(|r| (MIN_RATING..=MAX_RATING).contains(r))
        .ok_or(RatingOutOfRange(value))
}
