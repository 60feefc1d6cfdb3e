//! Noun-phrase extractor served over HTTP: `{"text": ..}` in, `{"phrases": [..]}` out.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tq_nlp::{CapabilityResult, TopicExtractor};

use super::JsonEndpoint;
use crate::config::RemoteConfig;

#[derive(Serialize)]
struct PhrasesRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct PhrasesResponse {
    #[serde(default)]
    phrases: Vec<String>,
}

pub struct HttpTopicExtractor {
    endpoint: JsonEndpoint,
}

impl HttpTopicExtractor {
    pub fn new(config: &RemoteConfig) -> CapabilityResult<Self> {
        Ok(Self {
            endpoint: JsonEndpoint::new(config)?,
        })
    }
}

#[async_trait]
impl TopicExtractor for HttpTopicExtractor {
    async fn extract_topics(&self, text: &str) -> CapabilityResult<Vec<String>> {
        let response: PhrasesResponse = self.endpoint.post(&PhrasesRequest { text }).await?;
        Ok(response.phrases)
    }

    fn name(&self) -> &str {
        "http-noun-phrases"
    }
}
