//! The upstream HTTP client: forwards masked requests to the real Claude API
//! and returns the raw (still-masked) response body for the adapter to unmask.
//!
//! Grounded on the reference `LiteLLMClient`: a single configured base URL,
//! API key, and model, reused across calls rather than rebuilt per request.

use reqwest::Client;
use serde_json::Value;

use crate::config::UpstreamSettings;

#[derive(Clone)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    api_key: String,
    default_model: String,
}

impl UpstreamClient {
    pub fn new(settings: &UpstreamSettings) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        Ok(Self {
            http,
            base_url: settings.base_url.clone(),
            api_key: settings.api_key.clone(),
            default_model: settings.model.clone(),
        })
    }

    /// Forwards an already-masked `messages` payload to `/v1/messages`,
    /// defaulting `model` when the caller didn't specify one.
    pub async fn send_messages(&self, mut body: Value) -> Result<Value, reqwest::Error> {
        if body.get("model").is_none() {
            if let Value::Object(ref mut map) = body {
                map.insert("model".into(), Value::String(self.default_model.clone()));
            }
        }

        let response = self
            .http
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response.json().await
    }
}
