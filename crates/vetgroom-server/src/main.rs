//! Vet Groomers HTTP Server
//!
//! Serves the page view models for the Vet Groomers Brisbane site and
//! forwards contact form leads to the lead-capture endpoint.

use axum::{
    Router,
    http::{HeaderValue, Uri},
    response::Json,
    routing::get,
};
use serde_json::{Value, json};
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use vetgroom::{BlogStore, Catalog, ImageLibrary, LeadClient, Site};

mod config;
mod error;
mod models;
mod routes;

use config::ServerConfig;
use error::{ApiError, Result};

/// Main application state
#[derive(Clone)]
pub struct AppState {
    pub site: Arc<Site>,
    pub leads: Arc<LeadClient>,
    pub config: ServerConfig,
}

impl AppState {
    /// Load site content and build the lead client for `config`
    pub fn from_config(config: ServerConfig) -> vetgroom::Result<Self> {
        let catalog = match &config.content_dir {
            Some(dir) => Catalog::from_dir(dir)?,
            None => Catalog::builtin()?,
        };
        // Slugs containing the combined separator would make landing pages unreachable
        catalog.validate()?;
        info!(
            "Loaded {} services and {} locations",
            catalog.services.len(),
            catalog.locations.len()
        );

        let leads = LeadClient::new(config.lead_config())?;
        let blog = BlogStore::new(&config.blog_dir);
        info!("Reading blog posts from {}", blog.dir().display());
        let site = Site::new(catalog, ImageLibrary::builtin(), blog);

        Ok(Self {
            site: Arc::new(site),
            leads: Arc::new(leads),
            config,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env()?;

    // Initialize tracing
    let default_filter = if config.debug {
        "vetgroom_server=debug,vetgroom=debug,tower_http=debug"
    } else {
        "vetgroom_server=info,vetgroom=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string()),
        )
        .init();

    info!(
        "Starting Vet Groomers server on {}:{}",
        config.host, config.port
    );

    let state = AppState::from_config(config.clone())?;
    let app = create_router(state);

    let ip = config
        .host
        .parse::<std::net::IpAddr>()
        .map_err(|_| ApiError::Config(format!("Invalid HOST value: {}", config.host)))?;
    let addr = SocketAddr::new(ip, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the main application router
fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        .nest("/api/leads", routes::leads::router())
        .merge(routes::pages::router())
        .fallback(not_found)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

/// Health check endpoint
async fn health_check() -> Result<Json<Value>> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "vetgroom-server",
        "version": env!("CARGO_PKG_VERSION"),
        "content_version": vetgroom::version(),
        "timestamp": time::OffsetDateTime::now_utc()
    })))
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(uri.path())
}
