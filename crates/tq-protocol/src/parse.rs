use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::breakdown::PriceBreakdown;
use crate::labels::{AssignmentType, Domain, Urgency};

/// Keys of `ParseResponse::raw_entities`.
pub const ENTITY_PAGES: &str = "PAGES";
pub const ENTITY_DEADLINE: &str = "DEADLINE";
pub const ENTITY_TOPIC: &str = "TOPIC";
pub const ENTITY_MESSAGE: &str = "message";

/// Free-form task request submitted for interpretation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Raw request message. Must be non-empty after trimming.
    pub text: String,
    /// Optional caller identity, carried for logging only.
    #[serde(default)]
    pub user_id: Option<String>,
}

impl ParseRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            user_id: None,
        }
    }
}

/// Structured interpretation of a request, including the price estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseResponse {
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    pub topic: Option<String>,
    pub domain: Option<Domain>,
    pub pages: Option<u32>,
    /// ISO-8601 timestamp (`YYYY-MM-DDTHH:MM:SS`).
    pub deadline: Option<String>,
    pub urgency: Urgency,
    pub skills_required: Vec<String>,
    pub estimated_price: Option<f64>,
    pub skill_price_breakdown: PriceBreakdown,
    pub raw_text: String,
    pub raw_entities: BTreeMap<String, Vec<String>>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ParseResponse {
    /// Fixed zero-price shape returned for messages with no actionable request.
    pub fn irrelevant(raw_text: impl Into<String>, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut raw_entities = BTreeMap::new();
        raw_entities.insert(ENTITY_MESSAGE.to_string(), vec![message.clone()]);
        Self {
            kind: AssignmentType::Irrelevant,
            topic: None,
            domain: None,
            pages: Some(0),
            deadline: None,
            urgency: Urgency::Low,
            skills_required: Vec::new(),
            estimated_price: Some(0.0),
            skill_price_breakdown: PriceBreakdown::new(),
            raw_text: raw_text.into(),
            raw_entities,
            message: Some(message),
        }
    }

    pub fn is_irrelevant(&self) -> bool {
        self.kind == AssignmentType::Irrelevant
    }
}
