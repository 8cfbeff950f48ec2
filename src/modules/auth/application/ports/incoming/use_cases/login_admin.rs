use async_trait::async_trait;
use serde::Serialize;

//
// ──────────────────────────────────────────────────────────
// Login Command
// ──────────────────────────────────────────────────────────
//

#[derive(Clone)]
pub struct LoginAdminCommand {
    username: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginAdminCommandError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl LoginAdminCommand {
    pub fn new(username: String, password: String) -> Result<Self, LoginAdminCommandError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(LoginAdminCommandError::EmptyUsername);
        }

        // Passwords are compared verbatim, only emptiness is checked
        if password.is_empty() {
            return Err(LoginAdminCommandError::EmptyPassword);
        }

        Ok(Self {
            username: username.to_string(),
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl std::fmt::Debug for LoginAdminCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginAdminCommand")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

//
// ──────────────────────────────────────────────────────────
// Result & Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct LoginAdminResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub username: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait LoginAdminUseCase: Send + Sync {
    async fn execute(&self, command: LoginAdminCommand)
        -> Result<LoginAdminResult, LoginAdminError>;
}
