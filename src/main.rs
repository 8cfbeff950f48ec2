mod api;
mod config;
mod health;
mod modules;
mod shared;

#[cfg(test)]
mod tests;

use crate::api::openapi::ApiDoc;
use crate::config::{AllowedOrigins, AppConfig};
use crate::modules::asset::{
    adapter::outgoing::{AssetRepositoryPostgres, StaticAssetDir},
    application::{
        asset_use_cases::AssetUseCases,
        services::{GetAssetService, PutAssetService},
    },
};
use crate::modules::auth::{
    adapter::outgoing::{
        jwt::{JwtConfig, JwtTokenService},
        security::argon2_hasher::Argon2Hasher,
    },
    application::{
        auth_use_cases::AuthUseCases,
        ports::outgoing::{password_hasher::PasswordHasher, token_provider::TokenProvider},
        services::LoginAdminService,
    },
};
use crate::modules::lead::{
    adapter::outgoing::{LeadQueryPostgres, LeadRepositoryPostgres},
    application::{
        lead_use_cases::LeadUseCases,
        services::{DeleteLeadService, GetLeadsService, SubmitLeadService, UpdateLeadStatusService},
    },
};
use crate::modules::payment::{
    adapter::outgoing::{PaymentQueryPostgres, PaymentRepositoryPostgres},
    application::{
        payment_use_cases::PaymentUseCases,
        services::{
            DeletePaymentService, GetPaymentsService, SubmitPaymentService,
            UpdatePaymentStatusService,
        },
    },
};
use crate::modules::project::{
    adapter::outgoing::{ProjectQueryPostgres, ProjectRepositoryPostgres},
    application::{
        project_use_cases::ProjectUseCases,
        services::{
            CreateProjectService, DeleteProjectService, GetProjectsService,
            GetSingleProjectService, UpdateProjectService,
        },
    },
};
use crate::modules::review::{
    adapter::outgoing::{ReviewQueryPostgres, ReviewRepositoryPostgres},
    application::{
        review_use_cases::ReviewUseCases,
        services::{
            CreateAdminReviewService, DeleteReviewService, GetAllReviewsService,
            GetApprovedReviewsService, SetReviewApprovalService, SubmitReviewService,
        },
    },
};
use crate::modules::stats::{
    adapter::outgoing::StatsQueryPostgres,
    application::{services::GetStatsService, stats_use_cases::StatsUseCases},
};
use crate::shared::api::{custom_json_config, custom_path_config};

use actix_cors::Cors;
use actix_web::{http::header, web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub lead: LeadUseCases,
    pub payment: PaymentUseCases,
    pub review: ReviewUseCases,
    pub project: ProjectUseCases,
    pub stats: StatsUseCases,
    pub asset: AssetUseCases,
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Jwt(#[from] modules::auth::adapter::outgoing::jwt::JwtConfigError),

    #[error("database: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("password hashing: {0}")]
    Hash(String),

    #[error("usage: devspark_backend hash-password <password>")]
    Usage,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(not(tarpaulin_include))]
fn build_state(
    db: &Arc<DatabaseConnection>,
    config: &AppConfig,
    hasher: Argon2Hasher,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let lead_repo = LeadRepositoryPostgres::new(Arc::clone(db));
    let lead_query = LeadQueryPostgres::new(Arc::clone(db));
    let payment_repo = PaymentRepositoryPostgres::new(Arc::clone(db));
    let payment_query = PaymentQueryPostgres::new(Arc::clone(db));
    let review_repo = ReviewRepositoryPostgres::new(Arc::clone(db));
    let review_query = ReviewQueryPostgres::new(Arc::clone(db));
    let project_repo = ProjectRepositoryPostgres::new(Arc::clone(db));
    let project_query = ProjectQueryPostgres::new(Arc::clone(db));
    let asset_repo = AssetRepositoryPostgres::new(Arc::clone(db));

    AppState {
        auth: AuthUseCases {
            login: Arc::new(LoginAdminService::new(
                config.admin.clone(),
                Arc::new(hasher),
                token_provider,
            )),
        },
        lead: LeadUseCases {
            submit: Arc::new(SubmitLeadService::new(lead_repo.clone())),
            get_list: Arc::new(GetLeadsService::new(lead_query)),
            update_status: Arc::new(UpdateLeadStatusService::new(lead_repo.clone())),
            delete: Arc::new(DeleteLeadService::new(lead_repo)),
        },
        payment: PaymentUseCases {
            submit: Arc::new(SubmitPaymentService::new(payment_repo.clone())),
            get_list: Arc::new(GetPaymentsService::new(payment_query)),
            update_status: Arc::new(UpdatePaymentStatusService::new(payment_repo.clone())),
            delete: Arc::new(DeletePaymentService::new(payment_repo)),
        },
        review: ReviewUseCases {
            submit: Arc::new(SubmitReviewService::new(review_repo.clone())),
            get_approved: Arc::new(GetApprovedReviewsService::new(review_query.clone())),
            get_all: Arc::new(GetAllReviewsService::new(review_query)),
            set_approval: Arc::new(SetReviewApprovalService::new(review_repo.clone())),
            create_admin: Arc::new(CreateAdminReviewService::new(review_repo.clone())),
            delete: Arc::new(DeleteReviewService::new(review_repo)),
        },
        project: ProjectUseCases {
            get_list: Arc::new(GetProjectsService::new(project_query.clone())),
            get_single: Arc::new(GetSingleProjectService::new(project_query)),
            create: Arc::new(CreateProjectService::new(project_repo.clone())),
            update: Arc::new(UpdateProjectService::new(project_repo.clone())),
            delete: Arc::new(DeleteProjectService::new(project_repo)),
        },
        stats: StatsUseCases {
            get: Arc::new(GetStatsService::new(StatsQueryPostgres::new(Arc::clone(db)))),
        },
        asset: AssetUseCases {
            get: Arc::new(GetAssetService::new(
                asset_repo.clone(),
                StaticAssetDir::new(&config.static_assets_dir),
            )),
            put: Arc::new(PutAssetService::new(asset_repo)),
        },
    }
}

#[cfg(not(tarpaulin_include))]
fn cors(origins: &AllowedOrigins) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    match origins {
        AllowedOrigins::Any => cors.allow_any_origin(),
        AllowedOrigins::List(list) => list
            .iter()
            .fold(cors, |cors, origin| cors.allowed_origin(origin)),
    }
}

/// `hash-password <pw>` prints an argon2 PHC string for `ADMIN_PASSWORD_HASH`.
#[cfg(not(tarpaulin_include))]
async fn hash_password(password: Option<String>) -> Result<(), StartupError> {
    let password = password.filter(|p| !p.is_empty()).ok_or(StartupError::Usage)?;
    let hasher = Argon2Hasher::from_env().map_err(|e| StartupError::Hash(e.to_string()))?;
    let hash = hasher
        .hash_password(&password)
        .await
        .map_err(|e| StartupError::Hash(e.to_string()))?;

    println!("{hash}");
    Ok(())
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> Result<(), StartupError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let mut args = std::env::args().skip(1);
    if let Some(cmd) = args.next() {
        return match cmd.as_str() {
            "hash-password" => hash_password(args.next()).await,
            _ => Err(StartupError::Usage),
        };
    }

    info!("Starting application ({env})...");

    let config = AppConfig::from_env()?;
    let jwt_config = JwtConfig::from_env()?;
    let hasher = Argon2Hasher::from_env().map_err(|e| StartupError::Hash(e.to_string()))?;

    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(config.database.connect_timeout)
        .acquire_timeout(config.database.connect_timeout)
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let db = Arc::new(Database::connect(opt).await?);

    if config.database.run_migrations {
        info!("Applying pending migrations");
        Migrator::up(db.as_ref(), None).await?;
    }

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(jwt_config));
    let state = build_state(&db, &config, hasher, Arc::clone(&token_provider));

    let openapi = ApiDoc::openapi();
    let origins = config.cors_origins.clone();
    let db_for_server = Arc::clone(&db);
    let bind = config.bind_address();
    info!("Listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        App::new()
            .wrap(cors(&origins))
            .app_data(custom_json_config())
            .app_data(custom_path_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(bind)?
    .run()
    .await?;

    info!("Server stopped, closing database pool");
    // Clones share one pool; closing any of them closes it.
    db.close_by_ref().await?;
    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::asset::adapter::incoming::web::routes as asset;
    use crate::modules::auth::adapter::incoming::web::routes as auth;
    use crate::modules::lead::adapter::incoming::web::routes as lead;
    use crate::modules::payment::adapter::incoming::web::routes as payment;
    use crate::modules::project::adapter::incoming::web::routes as project;
    use crate::modules::review::adapter::incoming::web::routes as review;
    use crate::modules::stats::adapter::incoming::web::routes as stats;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(auth::login_admin_handler);
    cfg.service(auth::verify_admin_handler);
    // Leads
    cfg.service(lead::submit_lead_handler);
    cfg.service(lead::get_leads_handler);
    cfg.service(lead::update_lead_status_handler);
    cfg.service(lead::delete_lead_handler);
    // Payments
    cfg.service(payment::submit_payment_handler);
    cfg.service(payment::get_payments_handler);
    cfg.service(payment::update_payment_status_handler);
    cfg.service(payment::delete_payment_handler);
    // Reviews: literal segments before `{id}`
    cfg.service(review::get_all_reviews_handler);
    cfg.service(review::create_admin_review_handler);
    cfg.service(review::submit_review_handler);
    cfg.service(review::get_approved_reviews_handler);
    cfg.service(review::set_review_approval_handler);
    cfg.service(review::delete_review_handler);
    // Projects
    cfg.service(project::get_projects_handler);
    cfg.service(project::get_single_project_handler);
    cfg.service(project::create_project_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    // Dashboard
    cfg.service(stats::get_stats_handler);
    // Assets
    cfg.service(asset::get_asset_handler);
    cfg.service(asset::put_asset_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
        std::process::exit(1);
    }
}
