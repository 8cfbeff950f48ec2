use async_trait::async_trait;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::modules::review::application::{
    domain::entities::{check_rating, limits, Review},
    ports::outgoing::NewReview,
};
use crate::shared::api::coerce::FlexibleInt;
use crate::shared::validation::{optional_text, RequiredFields, ValidationError};

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ReviewSubmission {
    pub student_name: Option<String>,
    pub college_name: Option<String>,
    pub year_of_study: Option<String>,
    pub project_name: Option<String>,
    /// Integer or numeric string.
    #[schema(value_type = Option<i64>)]
    pub rating: Option<FlexibleInt>,
    pub experience: Option<String>,
    pub pricing_review: Option<String>,
}

/// Validated review fields, shared by the public form and admin entry.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReviewCommand {
    student_name: String,
    college_name: String,
    year_of_study: String,
    project_name: String,
    rating: i16,
    experience: String,
    pricing_review: Option<String>,
}

impl SubmitReviewCommand {
    pub fn new(submission: ReviewSubmission) -> Result<Self, ValidationError> {
        let mut required = RequiredFields::new();
        let student_name =
            required.text("student_name", submission.student_name, limits::STUDENT_NAME);
        let college_name =
            required.text("college_name", submission.college_name, limits::COLLEGE_NAME);
        let year_of_study =
            required.text("year_of_study", submission.year_of_study, limits::YEAR_OF_STUDY);
        let project_name =
            required.text("project_name", submission.project_name, limits::PROJECT_NAME);
        let raw_rating = required.value("rating", submission.rating.map(Some));
        let experience = required.text("experience", submission.experience, limits::EXPERIENCE);
        required.finish()?;

        let rating = match raw_rating {
            Some(raw) => check_rating(raw.parse("rating")?)
                .map_err(|e| ValidationError::invalid("rating", e.to_string()))?,
            None => return Err(ValidationError::MissingFields(vec!["rating"])),
        };

        Ok(Self {
            student_name,
            college_name,
            year_of_study,
            project_name,
            rating,
            experience,
            pricing_review: optional_text(submission.pricing_review),
        })
    }

    pub fn rating(&self) -> i16 {
        self.rating
    }

    pub fn into_new_review(self, is_approved: bool) -> NewReview {
        NewReview {
            student_name: self.student_name,
            college_name: self.college_name,
            year_of_study: self.year_of_study,
            project_name: self.project_name,
            rating: self.rating,
            experience: self.experience,
            pricing_review: self.pricing_review,
            is_approved,
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitReviewError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SubmitReviewUseCase: Send + Sync {
    /// Stored unapproved.
    async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(rating: serde_json::Value) -> ReviewSubmission {
        serde_json::from_value(json!({
            "student_name": "Asha",
            "college_name": "NIT",
            "year_of_study": "Final year",
            "project_name": "Chatbot",
            "rating": rating,
            "experience": "Delivered early",
        }))
        .unwrap()
    }

    #[test]
    fn accepts_integer_or_numeric_string_rating() {
        assert_eq!(SubmitReviewCommand::new(submission(json!(5))).unwrap().rating(), 5);
        assert_eq!(SubmitReviewCommand::new(submission(json!("4"))).unwrap().rating(), 4);
    }

    #[test]
    fn rating_outside_one_to_five_is_rejected() {
        for bad in [json!(6), json!(0), json!("9")] {
            let err = SubmitReviewCommand::new(submission(bad.clone())).unwrap_err();
            assert!(
                matches!(err, ValidationError::InvalidField { field: "rating", .. }),
                "{bad}"
            );
        }
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        let err = SubmitReviewCommand::new(submission(json!("great"))).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidField { field: "rating", .. }));
    }

    #[test]
    fn missing_rating_is_listed_with_other_fields() {
        let err = SubmitReviewCommand::new(ReviewSubmission {
            student_name: Some("Asha".into()),
            ..Default::default()
        })
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::MissingFields(vec![
                "college_name",
                "year_of_study",
                "project_name",
                "rating",
                "experience"
            ])
        );
    }

    #[test]
    fn overlong_year_of_study_is_rejected() {
        let mut form = submission(json!(5));
        form.year_of_study = Some("y".repeat(51));

        let err = SubmitReviewCommand::new(form).unwrap_err();

        assert_eq!(
            err,
            ValidationError::invalid("year_of_study", "must be at most 50 characters")
        );
    }

    #[test]
    fn overlong_student_name_is_rejected() {
        let mut form = submission(json!(4));
        form.student_name = Some("s".repeat(151));

        let err = SubmitReviewCommand::new(form).unwrap_err();

        assert!(matches!(err, ValidationError::InvalidField { field: "student_name", .. }));
    }

    #[test]
    fn approval_flag_is_chosen_by_caller() {
        let cmd = SubmitReviewCommand::new(submission(json!(3))).unwrap();
        assert!(!cmd.clone().into_new_review(false).is_approved);
        assert!(cmd.into_new_review(true).is_approved);
    }
}
