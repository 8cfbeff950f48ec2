use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

use crate::modules::auth::application::{
    domain::entities::{AdminCredentials, AdminIdentity},
    ports::{
        incoming::use_cases::{
            LoginAdminCommand, LoginAdminError, LoginAdminResult, LoginAdminUseCase,
        },
        outgoing::{password_hasher::PasswordHasher, token_provider::TokenProvider},
    },
};

#[derive(Clone)]
pub struct LoginAdminService {
    credentials: AdminCredentials,
    password_hasher: Arc<dyn PasswordHasher>,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl LoginAdminService {
    pub fn new(
        credentials: AdminCredentials,
        password_hasher: Arc<dyn PasswordHasher>,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            credentials,
            password_hasher,
            token_provider,
        }
    }
}

#[async_trait]
impl LoginAdminUseCase for LoginAdminService {
    async fn execute(
        &self,
        command: LoginAdminCommand,
    ) -> Result<LoginAdminResult, LoginAdminError> {
        let username_matches = command.username() == self.credentials.username;

        // Hash is verified even for an unknown username so both paths cost the same
        let password_matches = self
            .password_hasher
            .verify_password(command.password(), &self.credentials.password_hash)
            .await
            .map_err(|e| LoginAdminError::PasswordVerificationFailed(e.to_string()))?;

        if !(username_matches && password_matches) {
            warn!("Rejected admin login for username '{}'", command.username());
            return Err(LoginAdminError::InvalidCredentials);
        }

        let identity = AdminIdentity::admin(self.credentials.username.clone());
        let token = self
            .token_provider
            .generate_access_token(&identity)
            .map_err(|e| LoginAdminError::TokenGenerationFailed(e.to_string()))?;

        info!("Admin '{}' logged in", identity.username);

        Ok(LoginAdminResult {
            token,
            token_type: "Bearer".to_string(),
            expires_in: self.token_provider.access_token_ttl(),
            username: identity.username,
        })
    }
}
