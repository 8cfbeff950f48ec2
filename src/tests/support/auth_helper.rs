use std::sync::Arc;

use actix_web::web;

use crate::modules::auth::{
    adapter::outgoing::jwt::{JwtConfig, JwtTokenService},
    application::{
        domain::entities::AdminIdentity, ports::outgoing::token_provider::TokenProvider,
    },
};

pub fn test_token_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "devspark-test".to_string(),
        access_token_expiry: 3600,
    })
}

pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_token_service());
    web::Data::new(provider)
}

pub fn admin_token() -> String {
    test_token_service()
        .generate_access_token(&AdminIdentity::admin("admin"))
        .expect("test token")
}

pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {token}"))
}
