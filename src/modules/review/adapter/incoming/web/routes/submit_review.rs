use actix_web::{post, web, Responder};
use tracing::error;

use crate::modules::review::application::ports::incoming::use_cases::{
    ReviewSubmission, SubmitReviewCommand,
};
use crate::shared::api::{response::Created, ApiResponse};
use crate::AppState;

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = "Reviews",
    request_body = ReviewSubmission,
    responses(
        (status = 201, description = "Review stored, pending approval", body = Created),
        (status = 400, description = "Missing fields or rating outside 1-5")
    )
)]
#[post("/api/reviews")]
pub async fn submit_review_handler(
    data: web::Data<AppState>,
    payload: web::Json<ReviewSubmission>,
) -> impl Responder {
    let command = match SubmitReviewCommand::new(payload.into_inner()) {
        Ok(cmd) => cmd,
        Err(err) => return ApiResponse::validation_error(&err.to_string()),
    };

    match data.review.submit.execute(command).await {
        Ok(review) => ApiResponse::created(Created::new(
            review.id,
            "Review submitted successfully. It will be visible after approval.",
        )),
        Err(e) => {
            error!("Review submission failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::modules::review::application::{
        domain::entities::Review,
        ports::incoming::use_cases::{SubmitReviewError, SubmitReviewUseCase},
    };
    use crate::tests::support::{app_state_builder::TestAppStateBuilder, fixtures::review_from};

    #[derive(Clone, Default)]
    struct RecordingSubmit {
        ratings: Arc<Mutex<Vec<i16>>>,
    }

    #[async_trait]
    impl SubmitReviewUseCase for RecordingSubmit {
        async fn execute(&self, command: SubmitReviewCommand) -> Result<Review, SubmitReviewError> {
            self.ratings.lock().unwrap().push(command.rating());
            Ok(review_from(31, command.into_new_review(false)))
        }
    }

    async fn post(uc: RecordingSubmit, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_submit_review(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(crate::shared::api::custom_json_config())
                .service(submit_review_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/reviews")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    fn body(rating: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "student_name": "Asha",
            "college_name": "NIT Trichy",
            "year_of_study": "Final year",
            "project_name": "Face attendance",
            "rating": rating,
            "experience": "Explained every module",
        })
    }

    #[actix_web::test]
    async fn string_rating_is_accepted() {
        let uc = RecordingSubmit::default();
        let ratings = uc.ratings.clone();

        let (status, json) = post(uc, body(serde_json::json!("5"))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["data"]["id"], 31);
        assert_eq!(*ratings.lock().unwrap(), vec![5]);
    }

    #[actix_web::test]
    async fn out_of_range_rating_is_validation_error() {
        let uc = RecordingSubmit::default();
        let ratings = uc.ratings.clone();

        let (status, json) = post(uc, body(serde_json::json!(7))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert!(ratings.lock().unwrap().is_empty());
    }
}
