use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

pub const ENGINE_HEALTH_PATH: &str = "/.well-known/apollo/engine-health";

#[derive(thiserror::Error, Debug)]
pub enum ProbeError {
    #[error("companion service URL is not configured")]
    NotConfigured,
    #[error("companion service URL is not an http(s) URL: {0}")]
    NotHttp(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Answers whether the companion service is up. Never fails.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn healthy(&self) -> bool;
}

/// Probes `<base>/.well-known/apollo/engine-health` over HTTP.
#[derive(Clone)]
pub struct EngineHealth {
    http: Client,
    base_url: Option<String>,
}

impl EngineHealth {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.map(|u| u.trim_end_matches('/').to_string()),
        }
    }

    /// One GET against the health endpoint. `Ok(true)` only for a 200.
    pub async fn probe(&self) -> Result<bool, ProbeError> {
        let base = self.base_url.as_deref().ok_or(ProbeError::NotConfigured)?;
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ProbeError::NotHttp(base.to_string()));
        }

        let url = format!("{base}{ENGINE_HEALTH_PATH}");
        debug!("Probing companion service at {}", url);

        let resp = self.http.get(&url).send().await?;
        Ok(resp.status() == StatusCode::OK)
    }
}

#[async_trait]
impl HealthProbe for EngineHealth {
    async fn healthy(&self) -> bool {
        match self.probe().await {
            Ok(healthy) => healthy,
            Err(e @ (ProbeError::NotConfigured | ProbeError::NotHttp(_))) => {
                debug!("Skipping engine health probe: {}", e);
                false
            }
            Err(e) => {
                warn!("Engine health probe failed: {}", e);
                false
            }
        }
    }
}
