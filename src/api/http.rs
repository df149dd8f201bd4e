use super::{clockify::ClockifyConfig, PageSource};
use crate::libs::{credentials::Credentials, error::ReportError};
use reqwest::{
    header::{HeaderMap, HeaderValue, CONTENT_TYPE},
    Client,
};
use serde_json::Value;
use std::time::Duration;

const API_KEY_HEADER: &str = "X-Api-Key";

/// [`PageSource`] backed by the Clockify REST API.
pub struct HttpSource {
    client: Client,
    base_url: String,
    page_size: usize,
}

impl HttpSource {
    pub fn new(credentials: &Credentials, config: &ClockifyConfig) -> Result<Self, ReportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let api_key = HeaderValue::from_str(&credentials.api_key)
            .map_err(|_| ReportError::MissingCredential("API key contains invalid characters".to_string()))?;
        headers.insert(API_KEY_HEADER, api_key);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: credentials.base_url.trim_end_matches('/').to_string(),
            page_size: config.page_size,
        })
    }
}

impl PageSource for HttpSource {
    fn page_size(&self) -> usize {
        self.page_size
    }

    async fn get(&self, endpoint: &str, query: &[(String, String)]) -> Result<Vec<Value>, ReportError> {
        let url = format!("{}{}", self.base_url, endpoint);
        let res = self.client.get(&url).query(query).send().await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ReportError::Transport {
                status: status.as_u16(),
                url,
            });
        }

        Ok(res.json::<Vec<Value>>().await?)
    }
}
