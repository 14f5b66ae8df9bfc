// Copyright (c) 2025 - Cowboy AI, Inc.
//! NetBox HTTP Client
//!
//! The production [`InventoryClient`] backed by the NetBox REST API. Uses
//! token authentication and the brief entity shape (`id`, `name`/`model`,
//! `slug`); list lookups go through NetBox's exact-match query filters.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use super::{ClientError, EntitySummary, FilterField, InventoryClient};
use crate::registry::ResourceKind;

/// Configuration for the NetBox connection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetBoxConfig {
    /// NetBox base URL (e.g., "http://localhost:8000")
    pub base_url: String,

    /// API token for authentication
    pub api_token: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl Default for NetBoxConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            api_token: String::new(),
            timeout_secs: 30,
        }
    }
}

/// NetBox REST API client
pub struct NetBoxClient {
    config: NetBoxConfig,
    client: Client,
}

impl NetBoxClient {
    /// Create a new NetBox client from configuration
    pub fn new(config: NetBoxConfig) -> Result<Self, ClientError> {
        info!("Creating NetBox client for {}", config.base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    "Authorization",
                    format!("Token {}", config.api_token)
                        .parse()
                        .map_err(|e| ClientError::Config(format!("Invalid API token: {}", e)))?,
                );
                headers.insert(
                    "Accept",
                    "application/json"
                        .parse()
                        .map_err(|e| ClientError::Config(format!("Invalid header: {}", e)))?,
                );
                headers
            })
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Verify connectivity against the API status endpoint
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let url = format!("{}/api/status/", self.config.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            debug!("NetBox health check passed");
            Ok(())
        } else {
            Err(status_error(response).await)
        }
    }
}

#[async_trait]
impl InventoryClient for NetBoxClient {
    async fn get_by_id(
        &self,
        kind: ResourceKind,
        id: i64,
    ) -> Result<Option<EntitySummary>, ClientError> {
        let url = format!("{}/api/{}/{}/", self.config.base_url, kind.endpoint(), id);
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let entity: ApiEntity = response.json().await?;
        Ok(Some(entity.into_summary()))
    }

    async fn list_by_field(
        &self,
        kind: ResourceKind,
        field: FilterField,
        value: &str,
    ) -> Result<Vec<EntitySummary>, ClientError> {
        let param = match field {
            FilterField::Slug => "slug",
            FilterField::Name => kind.descriptor().name_param,
        };
        let url = format!(
            "{}/api/{}/?{}={}",
            self.config.base_url,
            kind.endpoint(),
            param,
            urlencoding::encode(value)
        );
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }

        let list: ApiList = response.json().await?;
        Ok(list.results.into_iter().map(ApiEntity::into_summary).collect())
    }
}

/// Paginated list envelope returned by every NetBox collection endpoint
#[derive(Debug, Deserialize)]
struct ApiList {
    #[serde(default)]
    results: Vec<ApiEntity>,
}

/// Entity payload; the name field varies by kind (`name`, `model`, or only
/// the rendered `display`)
#[derive(Debug, Deserialize)]
struct ApiEntity {
    id: i64,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    display: Option<String>,
    #[serde(default)]
    slug: Option<String>,
}

impl ApiEntity {
    fn into_summary(self) -> EntitySummary {
        EntitySummary {
            id: self.id,
            name: self
                .name
                .or(self.model)
                .or(self.display)
                .unwrap_or_default(),
            slug: self.slug,
        }
    }
}

async fn status_error(response: reqwest::Response) -> ClientError {
    let status = response.status().as_u16();
    let message = response.text().await.unwrap_or_else(|_| "".to_string());
    ClientError::Status { status, message }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
