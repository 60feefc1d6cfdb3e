use tq_protocol::Domain;

use crate::lexicon::{
    AI_ML_DOMAIN_TERMS, ELECTRONICS_DOMAIN_TERMS, WRITING_DOMAIN_TERMS, contains_any,
};

/// Subject area by ordered keyword rules; AI/ML, then Electronics, then Writing.
pub fn detect_domain(text: &str) -> Domain {
    let lowered = text.to_lowercase();
    if contains_any(&lowered, AI_ML_DOMAIN_TERMS) {
        Domain::AiMl
    } else if contains_any(&lowered, ELECTRONICS_DOMAIN_TERMS) {
        Domain::Electronics
    } else if contains_any(&lowered, WRITING_DOMAIN_TERMS) {
        Domain::Writing
    } else {
        Domain::General
    }
}
