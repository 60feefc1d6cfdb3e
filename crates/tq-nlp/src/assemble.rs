//! Builds the structured response for a priced request.

use std::collections::BTreeMap;

use tq_protocol::{
    AssignmentType, BreakdownLabel, Domain, ENTITY_DEADLINE, ENTITY_PAGES, ENTITY_TOPIC,
    ParseResponse, PriceBreakdown, Urgency,
};

use crate::pricing::Quote;

/// Fields resolved before pricing.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub kind: AssignmentType,
    pub topic: String,
    pub domain: Domain,
    pub pages: Option<u32>,
    pub deadline: Option<String>,
    pub urgency: Urgency,
    pub skills: Vec<&'static str>,
}

/// Skill surcharges first, then tasks under their `task:` keys.
pub fn merge_breakdown(quote: &Quote) -> PriceBreakdown {
    let mut breakdown = PriceBreakdown::new();
    for (skill, amount) in &quote.skill_items {
        breakdown.insert(BreakdownLabel::Skill((*skill).to_string()), *amount);
    }
    for (task, amount) in &quote.task_items {
        breakdown.insert(BreakdownLabel::Task((*task).to_string()), *amount);
    }
    breakdown
}

/// PAGES only when positive, DEADLINE only when found, TOPIC always.
pub fn raw_entities(
    pages: Option<u32>,
    deadline: Option<&str>,
    topic: &str,
) -> BTreeMap<String, Vec<String>> {
    let mut entities = BTreeMap::new();
    entities.insert(
        ENTITY_PAGES.to_string(),
        pages
            .filter(|p| *p > 0)
            .map(|p| p.to_string())
            .into_iter()
            .collect(),
    );
    entities.insert(
        ENTITY_DEADLINE.to_string(),
        deadline.map(str::to_string).into_iter().collect(),
    );
    entities.insert(ENTITY_TOPIC.to_string(), vec![topic.to_string()]);
    entities
}

pub fn assemble(raw_text: &str, interpretation: Interpretation, quote: &Quote) -> ParseResponse {
    let raw_entities = raw_entities(
        interpretation.pages,
        interpretation.deadline.as_deref(),
        &interpretation.topic,
    );
    ParseResponse {
        kind: interpretation.kind,
        topic: Some(interpretation.topic),
        domain: Some(interpretation.domain),
        pages: interpretation.pages,
        deadline: interpretation.deadline,
        urgency: interpretation.urgency,
        skills_required: interpretation
            .skills
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        estimated_price: Some(quote.total),
        skill_price_breakdown: merge_breakdown(quote),
        raw_text: raw_text.to_string(),
        raw_entities,
        message: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::Branch;

    fn quote() -> Quote {
        Quote {
            branch: Branch::CodingMl,
            subtotal: 15740.0,
            platform_multiplier: 1.0,
            urgency_multiplier: 1.0,
            total: 15740.0,
            skill_items: vec![("Python", 2000.0)],
            task_items: vec![("debug code", 4000.0), ("implement model", 10000.0)],
        }
    }

    #[test]
    fn breakdown_keeps_skills_before_tasks() {
        let b = merge_breakdown(&quote());
        assert_eq!(
            b.keys(),
            vec!["Python", "task:debug code", "task:implement model"]
        );
        assert_eq!(b.get("task:implement model"), Some(10000.0));
    }

    #[test]
    fn entities_omit_missing_values() {
        let e = raw_entities(None, None, "General");
        assert!(e[ENTITY_PAGES].is_empty());
        assert!(e[ENTITY_DEADLINE].is_empty());
        assert_eq!(e[ENTITY_TOPIC], vec!["General"]);

        let e = raw_entities(Some(0), Some("2026-10-20T00:00:00"), "rivers");
        assert!(e[ENTITY_PAGES].is_empty());
        assert_eq!(e[ENTITY_DEADLINE], vec!["2026-10-20T00:00:00"]);
    }

    #[test]
    fn assembled_response_carries_every_field() {
        let interpretation = Interpretation {
            kind: AssignmentType::Code,
            topic: "General".into(),
            domain: Domain::General,
            pages: Some(4),
            deadline: None,
            urgency: Urgency::Medium,
            skills: vec!["Python"],
        };
        let r = assemble("debug code", interpretation, &quote());
        assert_eq!(r.kind, AssignmentType::Code);
        assert_eq!(r.estimated_price, Some(15740.0));
        assert_eq!(r.skills_required, vec!["Python"]);
        assert_eq!(r.raw_entities[ENTITY_PAGES], vec!["4"]);
        assert!(r.message.is_none());
        assert!(!r.is_irrelevant());
    }
}
