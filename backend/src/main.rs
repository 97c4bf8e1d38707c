//! Backend entry-point: loads settings, wires storage and the language model,
//! and serves the REST API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use commentguard::domain::ports::{LanguageModel, UnconfiguredLanguageModel};
use commentguard::inbound::http::health::HealthState;
use commentguard::outbound::openai::{OpenAiChatModel, OpenAiSettings};
use commentguard::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use server::{AppSettings, ServerConfig, create_server};

fn build_language_model(settings: &AppSettings) -> std::io::Result<Arc<dyn LanguageModel>> {
    let Some(api_key) = settings.openai_api_key() else {
        warn!("no language model API key configured; analysis and generation will fail");
        return Ok(Arc::new(UnconfiguredLanguageModel));
    };
    let model = OpenAiChatModel::new(OpenAiSettings {
        base_url: settings.openai_base_url().to_owned(),
        model: settings.openai_model().to_owned(),
        api_key,
        timeout: settings.openai_timeout(),
    })
    .map_err(std::io::Error::other)?;
    info!(model = settings.openai_model(), "language model configured");
    Ok(Arc::new(model))
}

async fn connect_database(database_url: &str) -> std::io::Result<DbPool> {
    run_migrations(database_url)
        .await
        .map_err(std::io::Error::other)?;
    DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(std::io::Error::other)
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let bind_addr = settings.bind_addr()?;

    let mut config =
        ServerConfig::new(bind_addr).with_language_model(build_language_model(&settings)?);
    if let Some(database_url) = settings.database_url() {
        config = config.with_db_pool(connect_database(database_url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting server");
    create_server(health_state, config)?.await
}
