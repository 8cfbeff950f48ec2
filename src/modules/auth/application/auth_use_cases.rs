use std::sync::Arc;

use crate::modules::auth::application::ports::incoming::use_cases::LoginAdminUseCase;

#[derive(Clone)]
pub struct AuthUseCases {
    pub login: Arc<dyn LoginAdminUseCase + Send + Sync>,
}
