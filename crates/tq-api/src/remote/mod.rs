//! HTTP-backed capability clients.
//!
//! Each client POSTs JSON to a configured endpoint and maps every transport
//! error, non-2xx status, timeout or malformed body to a `CapabilityError`.

pub mod classifier;
pub mod refund;
pub mod topics;

use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tq_nlp::{CapabilityError, CapabilityResult};

use crate::config::RemoteConfig;

pub use classifier::HttpClassifier;
pub use refund::HttpRefundModel;
pub use topics::HttpTopicExtractor;

/// A JSON endpoint with a fixed request timeout.
pub struct JsonEndpoint {
    client: reqwest::Client,
    url: String,
    timeout_secs: u64,
}

impl JsonEndpoint {
    pub fn new(config: &RemoteConfig) -> CapabilityResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CapabilityError::Unavailable(format!("building http client: {e}")))?;
        Ok(Self {
            client,
            url: config.url.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub async fn post<B, R>(&self, body: &B) -> CapabilityResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(&self.url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CapabilityError::Request(format!("{} returned {status}", self.url)));
        }

        response.json::<R>().await.map_err(|e| {
            if e.is_timeout() {
                self.transport_error(e)
            } else {
                CapabilityError::InvalidResponse(e.to_string())
            }
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> CapabilityError {
        if e.is_timeout() {
            CapabilityError::Timeout(self.timeout_secs * 1000)
        } else {
            CapabilityError::Request(e.to_string())
        }
    }
}
