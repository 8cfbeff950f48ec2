use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::ToSchema;

use crate::modules::auth::application::ports::incoming::use_cases::{
    LoginAdminCommand, LoginAdminCommandError, LoginAdminError, LoginAdminResult,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginAdminRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Auth",
    request_body = LoginAdminRequest,
    responses(
        (status = 200, description = "Token issued", body = LoginAdminResult),
        (status = 400, description = "Username or password missing"),
        (status = 401, description = "Invalid credentials")
    )
)]
#[post("/api/admin/login")]
pub async fn login_admin_handler(
    data: web::Data<AppState>,
    payload: web::Json<LoginAdminRequest>,
) -> impl Responder {
    let LoginAdminRequest { username, password } = payload.into_inner();

    let command = match LoginAdminCommand::new(username, password) {
        Ok(cmd) => cmd,
        Err(err) => return map_command_error(err),
    };

    match data.auth.login.execute(command).await {
        Ok(result) => ApiResponse::success(result),
        Err(LoginAdminError::InvalidCredentials) => {
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid credentials")
        }
        Err(e) => {
            error!("Admin login failed: {}", e);
            ApiResponse::internal_error()
        }
    }
}

fn map_command_error(err: LoginAdminCommandError) -> HttpResponse {
    ApiResponse::validation_error(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[derive(Clone)]
    struct MockLoginAdminUseCase {
        result: Result<LoginAdminResult, LoginAdminError>,
    }

    #[async_trait]
    impl LoginAdminUseCase for MockLoginAdminUseCase {
        async fn execute(
            &self,
            _command: LoginAdminCommand,
        ) -> Result<LoginAdminResult, LoginAdminError> {
            self.result.clone()
        }
    }

    fn issued() -> LoginAdminResult {
        LoginAdminResult {
            token: "jwt".into(),
            token_type: "Bearer".into(),
            expires_in: 86_400,
            username: "admin".into(),
        }
    }

    async fn post_login(
        uc: MockLoginAdminUseCase,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_login_admin(uc).build();
        let app = test::init_service(App::new().app_data(state).service(login_admin_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn login_success_returns_token() {
        let (status, json) = post_login(
            MockLoginAdminUseCase { result: Ok(issued()) },
            serde_json::json!({ "username": "admin", "password": "pw" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["token"], "jwt");
        assert_eq!(json["data"]["expires_in"], 86_400);
    }

    #[actix_web::test]
    async fn login_invalid_credentials_is_401() {
        let (status, json) = post_login(
            MockLoginAdminUseCase {
                result: Err(LoginAdminError::InvalidCredentials),
            },
            serde_json::json!({ "username": "admin", "password": "nope" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Invalid credentials");
        assert_eq!(json["code"], "INVALID_CREDENTIALS");
    }

    #[actix_web::test]
    async fn login_missing_password_is_400() {
        let (status, json) = post_login(
            MockLoginAdminUseCase { result: Ok(issued()) },
            serde_json::json!({ "username": "admin" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn login_internal_failure_is_500() {
        let (status, json) = post_login(
            MockLoginAdminUseCase {
                result: Err(LoginAdminError::TokenGenerationFailed("x".into())),
            },
            serde_json::json!({ "username": "admin", "password": "pw" }),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn issued_token_passes_verify() {
        use std::sync::Arc;

        use crate::modules::auth::{
            adapter::{
                incoming::web::routes::verify_admin_handler,
                outgoing::security::argon2_hasher::Argon2Hasher,
            },
            application::{
                domain::entities::AdminCredentials,
                ports::outgoing::{password_hasher::PasswordHasher, token_provider::TokenProvider},
                services::LoginAdminService,
            },
        };
        use crate::tests::support::auth_helper::{bearer, test_token_service};

        let hasher = Argon2Hasher::with_params(1024, 1, 1).unwrap();
        let password_hash = hasher.hash_password("s3cret-pass").await.unwrap();
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());
        let service = LoginAdminService::new(
            AdminCredentials {
                username: "admin".into(),
                password_hash,
            },
            Arc::new(hasher),
            Arc::clone(&provider),
        );

        let state = TestAppStateBuilder::default().with_login_admin(service).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(provider))
                .service(login_admin_handler)
                .service(verify_admin_handler),
        )
        .await;

        let login = test::TestRequest::post()
            .uri("/api/admin/login")
            .set_json(serde_json::json!({ "username": "admin", "password": "s3cret-pass" }))
            .to_request();
        let resp = test::call_service(&app, login).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        let token = json["data"]["token"].as_str().unwrap().to_string();
        assert_eq!(json["data"]["token_type"], "Bearer");

        let verify = test::TestRequest::get()
            .uri("/api/admin/verify")
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, verify).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["username"], "admin");
        assert_eq!(json["data"]["role"], "admin");
    }
}
