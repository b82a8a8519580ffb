//! API server entry point.
//!
//! Startup errors go through `anyhow`; once the server is up,
//! request-level failures use `kernel::error::AppError`.

use auth::{AuthConfig, AuthMiddlewareState, InMemorySessionStore, PgUserRepository};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use listings::PgListingRepository;
use platform::mail::Mailer;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod info;
mod rates;

use rates::HttpRateProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,listings=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // An unreachable database is fatal: nothing works without it.
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("../../database/migrations").run(&pool).await?;
    tracing::info!("Migrations completed");

    let auth_config = Arc::new(load_auth_config()?);

    let users = Arc::new(PgUserRepository::new(pool.clone()));
    let sessions = Arc::new(InMemorySessionStore::new());
    let listings_repo = Arc::new(PgListingRepository::new(pool.clone()));
    let mailer = Arc::new(Mailer::from_env());
    let rate_provider = Arc::new(HttpRateProvider::new(
        env::var("OXR_APP_ID").unwrap_or_default(),
    )?);

    let auth_middleware = AuthMiddlewareState {
        sessions: sessions.clone(),
        config: auth_config.clone(),
    };

    let rates_router = Router::new()
        .route(
            "/exchange-rates",
            get(rates::exchange_rates::<HttpRateProvider>),
        )
        .with_state(rate_provider);

    let app = Router::new()
        .route("/", get(info::index))
        .route("/register", get(info::register_page))
        .route("/login", get(info::login_page))
        .route("/location", get(info::location))
        .route("/cars", get(catalog::cars))
        .route("/car-info", get(catalog::car_info))
        .merge(rates_router)
        .merge(auth::presentation::router::auth_router_generic(
            users,
            sessions,
            mailer,
            auth_config,
        ))
        .merge(listings::dashboard_router(
            listings_repo.clone(),
            auth_middleware.clone(),
        ))
        .merge(listings::admin_router(listings_repo, auth_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer());

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Debug builds get a throwaway random secret; production requires
/// `SESSION_SECRET` (base64, 32 bytes) and optionally
/// `PASSWORD_PEPPER` from the environment.
fn load_auth_config() -> anyhow::Result<AuthConfig> {
    if cfg!(debug_assertions) {
        return Ok(AuthConfig::development());
    }

    let secret_b64 = env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
    let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
    let secret: [u8; 32] = secret_bytes
        .as_slice()
        .try_into()
        .map_err(|_| anyhow::anyhow!("SESSION_SECRET must decode to exactly 32 bytes"))?;

    let password_pepper = env::var("PASSWORD_PEPPER").ok().map(String::into_bytes);

    Ok(AuthConfig {
        session_secret: secret,
        password_pepper,
        ..AuthConfig::default()
    })
}

/// Browser clients live on a different origin, so credentialed CORS
/// is required for the session cookie to flow.
fn cors_layer() -> CorsLayer {
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true)
}
