//! # contactgen - synthetic contact generator
//!
//! Serves randomly generated contact records (name, email, phone, address)
//! over HTTP, together with a small single-page frontend.
//!
//! ## Features
//!
//! - **Two generator modes**: fixed value pools (single contact) or the
//!   locale-aware faker library (batches of up to 200 contacts)
//! - **Validation**: every query parameter is checked and all problems are
//!   reported together as a 400
//! - **Health Checks**: `/health`, `/health/ready`, `/health/live`
//! - **Metrics**: Prometheus metrics at `/metrics`
//! - **Live Reload**: the config file and pool overrides are watched
//! - **Docs**: `/docs` and `/openapi.json`
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contactgen::config::Settings;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Load configuration
//!     let settings = Settings::new()?;
//!
//!     // Server will start on configured host:port
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;

use crate::adapters::contact_handler::{self, ContactState};
use crate::adapters::docs_handler;
use crate::adapters::health_handler::HealthHandler;
use crate::adapters::metrics_handler::{self, MetricsCollector, MetricsHandler};
use crate::adapters::rate_limit;
use crate::adapters::ui_handler::UIHandler;
use axum::{middleware, routing::get, Router};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum application router with all endpoints configured.
///
/// # Arguments
///
/// * `settings` - Live configuration, swapped in place on reload
/// * `health_handler` - Health check handler
/// * `metrics` - Prometheus collector shared by the middleware and `/metrics`
///
/// # Returns
///
/// Configured Axum Router
pub async fn create_app(
    settings: Arc<RwLock<config::Settings>>,
    health_handler: Arc<HealthHandler>,
    metrics: Arc<MetricsCollector>,
) -> Router {
    let metrics_handler = Arc::new(MetricsHandler::new(metrics.clone()));

    let ops_router = Router::new()
        .route("/health", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.health().await }
            }
        }))
        .route("/health/ready", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.ready().await }
            }
        }))
        .route("/health/live", get({
            let handler = health_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.live().await }
            }
        }))
        .route("/metrics", get({
            let handler = metrics_handler.clone();
            move || {
                let h = handler.clone();
                async move { h.metrics().await }
            }
        }));

    let docs_router = Router::new()
        .route("/docs", get(docs_handler::docs_page))
        .route("/openapi.json", get(docs_handler::openapi_json))
        .with_state(settings.clone());

    let contact_state = ContactState {
        settings: settings.clone(),
        metrics: metrics.clone(),
    };
    let mut api_router = Router::new()
        .route("/contact", get(contact_handler::get_contact))
        .with_state(contact_state);

    if let Some(limit) = &settings.read().await.rate_limit {
        if limit.enabled {
            let limiter = rate_limit::create_limiter(limit.requests_per_second, limit.burst_size);
            api_router = api_router.layer(middleware::from_fn_with_state(
                limiter,
                rate_limit::rate_limit_middleware,
            ));
            tracing::info!(
                "Rate limiting /api at {} req/s (burst {})",
                limit.requests_per_second,
                limit.burst_size
            );
        }
    }

    ops_router
        .merge(docs_router)
        .nest("/api", api_router)
        .route_layer(middleware::from_fn_with_state(
            metrics,
            metrics_handler::track_metrics,
        ))
        // Frontend (catch-all for the SPA)
        .fallback(UIHandler::serve)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
