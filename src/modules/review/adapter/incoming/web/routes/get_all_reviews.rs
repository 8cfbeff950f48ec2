use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/reviews/all",
    tag = "Reviews",
    responses(
        (status = 200, description = "Every review including unapproved, newest first"),
        (status = 401, description = "No token provided")
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/reviews/all")]
pub async fn get_all_reviews_handler(
    _admin: AdminUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.review.get_all.execute().await {
        Ok(reviews) => ApiResponse::success(reviews),
        Err(e) => {
            error!("Listing all reviews failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::review::application::{
        domain::entities::Review,
        ports::incoming::use_cases::{GetAllReviewsUseCase, GetReviewsError},
    };
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{admin_token, bearer, token_provider_data},
        fixtures::review,
    };

    #[derive(Clone)]
    struct MockGetAll {
        result: Result<Vec<Review>, GetReviewsError>,
    }

    #[async_trait]
    impl GetAllReviewsUseCase for MockGetAll {
        async fn execute(&self) -> Result<Vec<Review>, GetReviewsError> {
            self.result.clone()
        }
    }

    async fn call(uc: MockGetAll, req: test::TestRequest) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_get_all_reviews(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(token_provider_data())
                .service(get_all_reviews_handler),
        )
        .await;

        let resp = test::call_service(&app, req.uri("/api/reviews/all").to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn admin_sees_pending_reviews() {
        let (status, json) = call(
            MockGetAll {
                result: Ok(vec![review(2, false), review(1, true)]),
            },
            test::TestRequest::get().insert_header(bearer(&admin_token())),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"][0]["is_approved"], false);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn anonymous_request_is_401() {
        let (status, _) = call(MockGetAll { result: Ok(vec![]) }, test::TestRequest::get()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn query_failure_is_500() {
        let (status, _) = call(
            MockGetAll {
                result: Err(GetReviewsError::QueryFailed("down".into())),
            },
            test::TestRequest::get().insert_header(bearer(&admin_token())),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
