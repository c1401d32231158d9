use super::MovieProvider;
use super::error::{NOT_FOUND_MESSAGE, ProviderError, ProviderResult};
use crate::config::ProviderConfig;
use crate::schemas::{MovieDetail, MovieSummary};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("popcorn/", env!("CARGO_PKG_VERSION"));

/// Envelope shared by both OMDb endpoints. `Response` is the string
/// `"False"` when the lookup produced nothing.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "Response", default)]
    response: Option<String>,
    #[serde(rename = "Error", default)]
    error: Option<String>,
}

impl Envelope {
    fn no_match(&self) -> Option<ProviderError> {
        if self.response.as_deref() == Some("False") {
            let reason = self
                .error
                .clone()
                .unwrap_or_else(|| NOT_FOUND_MESSAGE.to_string());
            Some(ProviderError::NotFound(reason))
        } else {
            None
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchPayload {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(rename = "Search", default)]
    search: Option<Vec<MovieSummary>>,
}

#[derive(Debug, Deserialize)]
struct DetailPayload {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(flatten)]
    detail: MovieDetail,
}

/// Decodes a title-search body into summaries in provider order.
pub fn parse_search_payload(body: &str) -> ProviderResult<Vec<MovieSummary>> {
    let payload: SearchPayload = serde_json::from_str(body)?;
    if let Some(err) = payload.envelope.no_match() {
        return Err(err);
    }

    match payload.search {
        Some(results) if !results.is_empty() => Ok(results),
        _ => Err(ProviderError::NotFound(NOT_FOUND_MESSAGE.to_string())),
    }
}

pub fn parse_detail_payload(body: &str) -> ProviderResult<MovieDetail> {
    let payload: DetailPayload = serde_json::from_str(body)?;
    if let Some(err) = payload.envelope.no_match() {
        return Err(err);
    }
    Ok(payload.detail)
}

pub struct OmdbClient {
    client: Client,
    config: ProviderConfig,
}

impl OmdbClient {
    pub fn new(config: ProviderConfig) -> ProviderResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self { client, config })
    }

    async fn fetch(&self, param: &str, value: &str) -> ProviderResult<String> {
        let response = self
            .client
            .get(&self.config.base_url)
            .query(&[("apikey", self.config.api_key.as_str()), (param, value)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), param, value, "OMDb request failed");
            return Err(ProviderError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl MovieProvider for OmdbClient {
    async fn search(&self, query: &str) -> ProviderResult<Vec<MovieSummary>> {
        debug!(query, "searching OMDb");
        let body = self.fetch("s", query).await?;
        parse_search_payload(&body)
    }

    async fn details(&self, id: &str) -> ProviderResult<MovieDetail> {
        debug!(id, "looking up OMDb record");
        let body = self.fetch("i", id).await?;
        parse_detail_payload(&body)
    }
}
