use reqwest::{header::CONTENT_TYPE, Client};
use serde_json::Value;

use crate::models::OutboundPayload;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("lead webhook URL is not configured")]
    NotConfigured,
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook rejected the lead with status {0}")]
    Rejected(u16),
}

/// Automation endpoint that receives leads
pub struct Webhook {
    url: Option<String>,
    client: Client,
}

impl Webhook {
    pub fn new(url: Option<String>) -> Self {
        Self {
            url: url.filter(|u| !u.trim().is_empty()),
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.url.is_some()
    }

    /// Post one lead. No retries; any 2xx is accepted and the response body,
    /// if it parses as JSON, is handed back for logging.
    pub async fn deliver(&self, payload: &OutboundPayload) -> Result<Option<Value>, DeliveryError> {
        let url = self.url.as_deref().ok_or(DeliveryError::NotConfigured)?;

        let res = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(status.as_u16()));
        }

        Ok(res.json::<Value>().await.ok())
    }
}
