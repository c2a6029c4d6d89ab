//! reqwest-backed Food Data Central client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::fdc::models::{FdcDetails, FdcErrorBody, FdcSearchRequest, FdcSearchResponse};
use crate::fdc::url::{build_request_url, FdcMethod};
use crate::fdc::{FdcError, FoodDataProvider};

/// Connection settings for [`FdcClient`].
#[derive(Debug, Clone)]
pub struct FdcConfig {
    /// Base URL, e.g. `https://api.nal.usda.gov/fdc/v1/`
    pub api_url: String,
    pub api_key: String,
    /// Upper bound on a whole request, connect to last body byte
    pub timeout: Duration,
}

/// Client for the Food Data Central REST API.
#[derive(Debug, Clone)]
pub struct FdcClient {
    http: Client,
    config: FdcConfig,
}

impl FdcClient {
    /// Validates `config` and builds the underlying HTTP client.
    pub fn connect(config: FdcConfig) -> Result<Self, FdcError> {
        if config.api_url.trim().is_empty() || config.api_key.trim().is_empty() {
            return Err(FdcError::InvalidConfig(
                "API URL and API key are required".to_string(),
            ));
        }
        if config.timeout.is_zero() {
            return Err(FdcError::InvalidConfig(
                "request timeout must be greater than zero".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FdcError::InvalidConfig(e.to_string()))?;

        Ok(Self { http, config })
    }

    fn url(&self, method: FdcMethod) -> Result<String, FdcError> {
        build_request_url(&self.config.api_url, method)
    }
}

#[async_trait]
impl FoodDataProvider for FdcClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<FdcSearchResponse, FdcError> {
        let url = self.url(FdcMethod::Search)?;
        let response = self
            .http
            .post(url)
            .query(&[("api_key", &self.config.api_key)])
            .json(&FdcSearchRequest::new(query))
            .send()
            .await
            .map_err(transport_error)?;

        let result: FdcSearchResponse = decode(response, query).await?;
        debug!(total_hits = result.total_hits, "search completed");
        Ok(result)
    }

    #[instrument(skip(self))]
    async fn details(&self, fdc_id: u64) -> Result<FdcDetails, FdcError> {
        let url = self.url(FdcMethod::Details(fdc_id))?;
        let response = self
            .http
            .get(url)
            .query(&[("api_key", &self.config.api_key)])
            .send()
            .await
            .map_err(transport_error)?;

        decode(response, &fdc_id.to_string()).await
    }
}

fn transport_error(err: reqwest::Error) -> FdcError {
    if err.is_timeout() {
        FdcError::ServiceUnavailable("request timed out".to_string())
    } else {
        // Drop the URL so the API key never ends up in logs or responses
        FdcError::ServiceUnavailable(err.without_url().to_string())
    }
}

async fn decode<T: DeserializeOwned>(response: Response, subject: &str) -> Result<T, FdcError> {
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;

    if status == StatusCode::NOT_FOUND {
        return Err(FdcError::NotFound(subject.to_string()));
    }

    if !status.is_success() {
        let detail = match serde_json::from_str::<FdcErrorBody>(&body) {
            Ok(err) if !err.message.is_empty() || !err.error.is_empty() => format!(
                "error: {}, message: {}, path: {}",
                err.error, err.message, err.path
            ),
            _ => body.chars().take(200).collect(),
        };
        return Err(FdcError::ServiceUnavailable(format!(
            "status code {}: {}",
            status.as_u16(),
            detail
        )));
    }

    serde_json::from_str(&body).map_err(|e| FdcError::InvalidResponse(e.to_string()))
}
