//! Healthmate Kernel - Application server for the health companion
//!
//! Serves the companion's screens and services over REST:
//! - Bilingual screen content (home, immunity, food groups, incompatible foods)
//! - Nearby hospital & clinic search via Overpass with haversine ranking
//! - Embedded Leaflet map page for the latest facility results
//! - Single-shot AI symptom analysis against a chat-completion endpoint

mod analysis;
mod config;
mod http;
mod locator;
mod map;
mod models;
mod state;

use anyhow::{Context, Result};
use healthmate_core::lang::Translator;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cfg = config::load_config().await;

    let translator =
        Arc::new(Translator::load().context("failed to parse bundled language packs")?);

    let api_key = config::ai_api_key();
    if api_key.is_empty() {
        warn!("HEALTHMATE_AI_KEY not set - symptom analysis calls will be rejected upstream");
    }

    let facility_http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.facilities.timeout_secs))
        .build()
        .context("failed to build facility HTTP client")?;
    let analysis_http = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.analysis.timeout_secs))
        .build()
        .context("failed to build analysis HTTP client")?;

    let locator = Arc::new(locator::FacilityLocator::new(
        facility_http,
        cfg.facilities.endpoint.clone(),
        cfg.facilities.radius_m,
    ));
    let analyzer = Arc::new(analysis::SymptomAnalyzer::new(
        analysis_http,
        &cfg.analysis,
        api_key,
    ));

    let app_state = http::AppState {
        translator,
        locator,
        analyzer,
        last_search: state::new_state(None),
        searches: state::TokenSeries::new(),
        default_lang: cfg.default_lang,
    };

    let app = http::build_router(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], cfg.server.port));
    info!("listening on http://{addr}");
    let listener = TcpListener::bind(addr)
        .await
        .context("failed to bind server port")?;
    axum::serve(listener, app).await.context("server stopped")?;
    Ok(())
}
