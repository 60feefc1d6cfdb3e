//! Zero-shot classifier served over HTTP.
//!
//! Request: `{"inputs": text, "parameters": {"candidate_labels": [...]}}`.
//! Response: `{"labels": [...], "scores": [...]}`, best label first.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tq_nlp::{CapabilityError, CapabilityResult, LabelScore, ZeroShotClassifier};

use super::JsonEndpoint;
use crate::config::RemoteConfig;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters<'a>,
}

#[derive(Serialize)]
struct ClassifyParameters<'a> {
    candidate_labels: &'a [&'a str],
}

#[derive(Deserialize)]
struct ClassifyResponse {
    labels: Vec<String>,
    scores: Vec<f64>,
}

pub struct HttpClassifier {
    endpoint: JsonEndpoint,
}

impl HttpClassifier {
    pub fn new(config: &RemoteConfig) -> CapabilityResult<Self> {
        Ok(Self {
            endpoint: JsonEndpoint::new(config)?,
        })
    }
}

#[async_trait]
impl ZeroShotClassifier for HttpClassifier {
    async fn classify(&self, text: &str, labels: &[&str]) -> CapabilityResult<Vec<LabelScore>> {
        let body = ClassifyRequest {
            inputs: text,
            parameters: ClassifyParameters {
                candidate_labels: labels,
            },
        };
        let response: ClassifyResponse = self.endpoint.post(&body).await?;

        if response.labels.is_empty() {
            return Err(CapabilityError::InvalidResponse("no labels returned".into()));
        }
        if response.labels.len() != response.scores.len() {
            return Err(CapabilityError::InvalidResponse(format!(
                "{} labels but {} scores",
                response.labels.len(),
                response.scores.len()
            )));
        }

        Ok(response
            .labels
            .into_iter()
            .zip(response.scores)
            .map(|(label, score)| LabelScore::new(label, score))
            .collect())
    }

    fn name(&self) -> &str {
        "http-zero-shot"
    }
}
