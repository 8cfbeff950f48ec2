use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::{
    future::{ready, Ready},
    sync::Arc,
};

use crate::modules::auth::application::{
    domain::entities::{AdminIdentity, Role},
    ports::outgoing::token_provider::TokenProvider,
};
use crate::shared::api::ApiResponse;

/// Caller holding a valid admin token. Rejection happens before the handler body runs.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AdminIdentity);

impl AdminUser {
    pub fn username(&self) -> &str {
        &self.0.username
    }
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminUser {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let Some(token_provider) = req.app_data::<web::Data<Arc<dyn TokenProvider + Send + Sync>>>()
        else {
            tracing::error!("TokenProvider missing from app data");
            return ready(Err(create_api_error(ApiResponse::internal_error())));
        };

        let Some(token) = extract_token_from_header(req) else {
            return ready(Err(create_api_error(ApiResponse::unauthorized(
                "MISSING_TOKEN",
                "Access denied. No token provided.",
            ))));
        };

        let claims = match token_provider.verify_token(&token) {
            Ok(claims) => claims,
            Err(_) => {
                return ready(Err(create_api_error(ApiResponse::forbidden(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))));
            }
        };

        match Role::parse(&claims.role) {
            Some(Role::Admin) => ready(Ok(AdminUser(AdminIdentity::admin(claims.sub)))),
            None => {
                tracing::warn!("Token for '{}' carries role '{}'", claims.sub, claims.role);
                ready(Err(create_api_error(ApiResponse::forbidden(
                    "INVALID_TOKEN",
                    "Invalid or expired token",
                ))))
            }
        }
    }
}

fn extract_token_from_header(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|s| s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{get, http::StatusCode, test, App, Responder};

    use crate::modules::auth::application::ports::outgoing::token_provider::{
        TokenClaims, TokenError,
    };
    use crate::tests::support::auth_helper::{admin_token, bearer, token_provider_data};

    #[get("/protected")]
    async fn protected(admin: AdminUser) -> impl Responder {
        ApiResponse::success(admin.username().to_string())
    }

    struct EditorTokens;

    impl TokenProvider for EditorTokens {
        fn generate_access_token(&self, _identity: &AdminIdentity) -> Result<String, TokenError> {
            unimplemented!("Not used in extractor tests")
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            Ok(TokenClaims {
                sub: "someone".into(),
                role: "editor".into(),
                exp: 9_999_999_999,
                iat: 0,
                nbf: 0,
                iss: "devspark-test".into(),
            })
        }

        fn access_token_ttl(&self) -> i64 {
            0
        }
    }

    async fn call(req: test::TestRequest) -> (StatusCode, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(token_provider_data())
                .service(protected),
        )
        .await;
        let resp = test::call_service(&app, req.uri("/protected").to_request()).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn valid_token_reaches_handler() {
        let (status, json) = call(test::TestRequest::get().insert_header(bearer(&admin_token()))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"], "admin");
    }

    #[actix_web::test]
    async fn missing_header_is_401() {
        let (status, json) = call(test::TestRequest::get()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(json["code"], "MISSING_TOKEN");
        assert_eq!(json["error"], "Access denied. No token provided.");
    }

    #[actix_web::test]
    async fn empty_bearer_is_401() {
        let (status, _) =
            call(test::TestRequest::get().insert_header(("Authorization", "Bearer   "))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn garbage_token_is_403() {
        let (status, json) =
            call(test::TestRequest::get().insert_header(bearer("not-a-jwt"))).await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json["code"], "INVALID_TOKEN");
        assert_eq!(json["error"], "Invalid or expired token");
    }

    #[actix_web::test]
    async fn non_admin_role_is_403() {
        let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(EditorTokens);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(provider))
                .service(protected),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/protected")
            .insert_header(bearer("whatever"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}
