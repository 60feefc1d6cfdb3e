//! Refund percentage model served over HTTP.
//!
//! The refund request is POSTed as-is; the model answers `{"refund_percent": f}`.

use async_trait::async_trait;
use serde::Deserialize;
use tq_nlp::{CapabilityError, CapabilityResult, RefundModel};
use tq_protocol::RefundRequest;

use super::JsonEndpoint;
use crate::config::RemoteConfig;

#[derive(Deserialize)]
struct PredictionResponse {
    refund_percent: f64,
}

pub struct HttpRefundModel {
    endpoint: JsonEndpoint,
}

impl HttpRefundModel {
    pub fn new(config: &RemoteConfig) -> CapabilityResult<Self> {
        Ok(Self {
            endpoint: JsonEndpoint::new(config)?,
        })
    }
}

#[async_trait]
impl RefundModel for HttpRefundModel {
    async fn predict_percent(&self, request: &RefundRequest) -> CapabilityResult<f64> {
        let response: PredictionResponse = self.endpoint.post(request).await?;
        if !response.refund_percent.is_finite() {
            return Err(CapabilityError::InvalidResponse(format!(
                "refund_percent is {}",
                response.refund_percent
            )));
        }
        Ok(response.refund_percent)
    }

    fn name(&self) -> &str {
        "http-refund"
    }
}
