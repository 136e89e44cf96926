use crate::core::{ConfigProvider, Partner, PartnerSource};
use crate::domain::model::parse_partners;
use crate::utils::error::{Result, SectionError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use std::time::Duration;

/// Fetches partners with a single `GET` against the configured endpoint.
pub struct HttpPartnerSource {
    client: Client,
    endpoint: String,
}

impl HttpPartnerSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        Self::with_headers(endpoint, timeout, &[])
    }

    pub fn with_headers(
        endpoint: impl Into<String>,
        timeout: Duration,
        headers: &[(String, String)],
    ) -> Result<Self> {
        let mut header_map = HeaderMap::new();
        for (key, value) in headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                SectionError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: key.clone(),
                    reason: format!("Invalid header name: {}", e),
                }
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                SectionError::InvalidConfigValueError {
                    field: format!("headers.{}", key),
                    value: "<redacted>".to_string(),
                    reason: format!("Invalid header value: {}", e),
                }
            })?;
            header_map.insert(name, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(header_map)
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_headers(
            config.api_endpoint(),
            config.request_timeout(),
            &config.headers(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PartnerSource for HttpPartnerSource {
    async fn get_partners(&self) -> Result<Vec<Partner>> {
        tracing::debug!("Requesting partners from: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("Partners API response status: {}", status);
        if !status.is_success() {
            return Err(SectionError::HttpStatusError {
                status: status.as_u16(),
                url: self.endpoint.clone(),
            });
        }

        let body = response.bytes().await?;
        let partners = parse_partners(&body)?;
        tracing::debug!("Partners API returned {} records", partners.len());
        Ok(partners)
    }
}
