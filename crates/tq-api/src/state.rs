//! Shared application state for the Axum server.

use std::sync::Arc;

use tq_nlp::{Capabilities, Interpreter, RefundModel};

use crate::config::ApiConfig;
use crate::remote::{HttpClassifier, HttpRefundModel, HttpTopicExtractor};

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Request interpretation pipeline.
    pub interpreter: Arc<Interpreter>,
    /// Refund model; `None` disables `/predict_refund`.
    pub refund: Option<Arc<dyn RefundModel>>,
}

impl AppState {
    pub fn new(interpreter: Interpreter) -> Self {
        Self {
            interpreter: Arc::new(interpreter),
            refund: None,
        }
    }

    pub fn with_refund_model(mut self, model: Arc<dyn RefundModel>) -> Self {
        self.refund = Some(model);
        self
    }

    /// Build state from config. Remote capabilities that fail to initialize
    /// are logged and left out, so the server still runs on rules alone.
    pub fn from_config(config: &ApiConfig) -> Self {
        let mut capabilities = Capabilities::rules_only();

        if config.classifier.is_active() {
            match HttpClassifier::new(&config.classifier) {
                Ok(classifier) => {
                    tracing::info!(url = %config.classifier.url, "zero-shot classifier enabled");
                    capabilities = capabilities.with_classifier(Arc::new(classifier));
                }
                Err(e) => tracing::warn!(error = %e, "classifier disabled"),
            }
        }

        if config.topics.is_active() {
            match HttpTopicExtractor::new(&config.topics) {
                Ok(topics) => {
                    tracing::info!(url = %config.topics.url, "noun-phrase extractor enabled");
                    capabilities = capabilities.with_topics(Arc::new(topics));
                }
                Err(e) => tracing::warn!(error = %e, "topic extractor disabled"),
            }
        }

        let interpreter = Interpreter::new(capabilities)
            .with_schedule(config.pricing.clone())
            .with_irrelevance_threshold(config.irrelevance_threshold);
        let state = Self::new(interpreter);

        if !config.refund.is_active() {
            tracing::info!("no refund model configured, /predict_refund returns 503");
            return state;
        }
        match HttpRefundModel::new(&config.refund) {
            Ok(model) => {
                tracing::info!(url = %config.refund.url, "refund model enabled");
                state.with_refund_model(Arc::new(model))
            }
            Err(e) => {
                tracing::warn!(error = %e, "refund model disabled");
                state
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Interpreter::default())
    }
}
