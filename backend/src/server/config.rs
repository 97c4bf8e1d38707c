//! Application settings and the HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use commentguard::domain::ports::{LanguageModel, UnconfiguredLanguageModel};
use commentguard::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use zeroize::Zeroizing;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";

/// Settings loaded from `COMMENTGUARD_*` environment variables and CLI flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "COMMENTGUARD")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string; the in-memory store is used when unset.
    pub database_url: Option<String>,
    /// API key for the language model provider.
    pub openai_api_key: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub openai_base_url: Option<String>,
    /// Chat model name.
    pub openai_model: Option<String>,
    /// Request timeout for language model calls, in seconds.
    #[ortho_config(default = 60)]
    pub openai_timeout_secs: u64,
}

impl AppSettings {
    /// Parse the listen address, falling back to the default.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid bind address {raw}: {err}"),
            )
        })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    /// API key, ignoring blank values.
    pub fn openai_api_key(&self) -> Option<Zeroizing<String>> {
        self.openai_api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .map(|key| Zeroizing::new(key.to_owned()))
    }

    pub fn openai_base_url(&self) -> &str {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }

    pub fn openai_model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    pub fn openai_timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout_secs)
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) language_model: Arc<dyn LanguageModel>,
}

impl ServerConfig {
    /// Configuration using the in-memory store and no language model.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            language_model: Arc::new(UnconfiguredLanguageModel),
        }
    }

    /// Attach a database connection pool for the Diesel repositories.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Use the given language model adapter.
    #[must_use]
    pub fn with_language_model(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.language_model = model;
        self
    }
}
