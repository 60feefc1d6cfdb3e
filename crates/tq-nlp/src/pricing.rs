//! Branch selection and price computation.
//!
//! A request is priced on exactly one branch (writing, coding/ML, generic).
//! The branch subtotal is then scaled by the platform multiplier and, after
//! that, by the urgency multiplier. Every constant lives in [`PriceSchedule`]
//! so deployments can retune prices from config.

use serde::{Deserialize, Serialize};
use tq_protocol::{AssignmentType, Urgency};

use crate::error::{PipelineError, PipelineResult, ScheduleError};
use crate::extract::{DetectedTask, Platform};
use crate::gate::Signals;
use crate::lexicon::{CODING_SKILLS, CODING_TERMS, WRITING_TERMS, contains_any, skill_price};

/// Platform multipliers. Mobile wins over web.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformMultipliers {
    pub mobile: f64,
    pub web: f64,
}

impl Default for PlatformMultipliers {
    fn default() -> Self {
        Self {
            mobile: 1.10,
            web: 1.05,
        }
    }
}

/// Urgency multipliers, applied after the platform multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrgencyMultipliers {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl Default for UrgencyMultipliers {
    fn default() -> Self {
        Self {
            high: 1.25,
            medium: 1.0,
            low: 0.95,
        }
    }
}

/// Every constant used by the pricing engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceSchedule {
    pub base_fee: f64,
    pub per_page: f64,
    /// Pages charged on the writing branch when none were given.
    pub default_pages: u32,
    pub per_diagram: f64,
    pub handwriting_surcharge: f64,
    pub writing_skill_share: f64,
    pub coding_surcharge: f64,
    pub coding_skill_share: f64,
    pub generic_task_skill_share: f64,
    pub per_language: f64,
    /// Added on the generic branch when no skill matched.
    pub no_skill_floor: f64,
    pub platform: PlatformMultipliers,
    pub urgency: UrgencyMultipliers,
}

impl Default for PriceSchedule {
    fn default() -> Self {
        Self {
            base_fee: 15.0,
            per_page: 8.0,
            default_pages: 2,
            per_diagram: 10.0,
            handwriting_surcharge: 20.0,
            writing_skill_share: 0.1,
            coding_surcharge: 1200.0,
            coding_skill_share: 0.25,
            generic_task_skill_share: 0.15,
            per_language: 25.0,
            no_skill_floor: 20.0,
            platform: PlatformMultipliers::default(),
            urgency: UrgencyMultipliers::default(),
        }
    }
}

impl PriceSchedule {
    /// Every amount and multiplier must be finite and non-negative.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        let fields = [
            ("base_fee", self.base_fee),
            ("per_page", self.per_page),
            ("per_diagram", self.per_diagram),
            ("handwriting_surcharge", self.handwriting_surcharge),
            ("writing_skill_share", self.writing_skill_share),
            ("coding_surcharge", self.coding_surcharge),
            ("coding_skill_share", self.coding_skill_share),
            ("generic_task_skill_share", self.generic_task_skill_share),
            ("per_language", self.per_language),
            ("no_skill_floor", self.no_skill_floor),
            ("platform.mobile", self.platform.mobile),
            ("platform.web", self.platform.web),
            ("urgency.high", self.urgency.high),
            ("urgency.medium", self.urgency.medium),
            ("urgency.low", self.urgency.low),
        ];
        match fields.iter().find(|(_, v)| !v.is_finite() || *v < 0.0) {
            Some((field, value)) => Err(ScheduleError {
                field: *field,
                value: *value,
            }),
            None => Ok(()),
        }
    }

    pub fn platform_multiplier(&self, platform: Platform) -> f64 {
        match platform {
            Platform::Mobile => self.platform.mobile,
            Platform::Web => self.platform.web,
            Platform::Unspecified => 1.0,
        }
    }

    pub fn urgency_multiplier(&self, urgency: Urgency) -> f64 {
        match urgency {
            Urgency::High => self.urgency.high,
            Urgency::Medium => self.urgency.medium,
            Urgency::Low => self.urgency.low,
        }
    }
}

/// The mutually exclusive pricing policy chosen for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    Writing,
    CodingMl,
    Generic,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Writing => "writing",
            Self::CodingMl => "coding_ml",
            Self::Generic => "generic",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the engine needs, already extracted from the request.
#[derive(Debug, Clone)]
pub struct PricingInput<'a> {
    pub text: &'a str,
    pub kind: AssignmentType,
    pub pages: Option<u32>,
    pub urgency: Urgency,
    pub skills: &'a [&'static str],
    pub tasks: &'a [DetectedTask],
    pub diagrams: usize,
    pub handwriting: bool,
    pub languages: usize,
    pub platform: Platform,
    pub content_words: usize,
    pub has_deadline: bool,
}

impl PricingInput<'_> {
    fn signals(&self) -> Signals {
        Signals {
            content_words: self.content_words,
            skills: self.skills.len(),
            tasks: self.tasks.len(),
            pages: self.pages,
            has_deadline: self.has_deadline,
        }
    }
}

/// A priced request.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub branch: Branch,
    /// Branch price before multipliers.
    pub subtotal: f64,
    pub platform_multiplier: f64,
    pub urgency_multiplier: f64,
    /// Final price, rounded to cents.
    pub total: f64,
    /// Per-skill surcharges, rounded to cents, in detection order.
    pub skill_items: Vec<(&'static str, f64)>,
    /// Per-task prices, rounded to cents, in detection order.
    pub task_items: Vec<(&'static str, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PricingOutcome {
    Quoted(Quote),
    /// The generic branch found nothing worth pricing.
    Irrelevant,
}

/// Prices requests against a fixed schedule.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    schedule: PriceSchedule,
}

impl PricingEngine {
    pub fn new(schedule: PriceSchedule) -> Self {
        Self { schedule }
    }

    /// Writing cues without coding cues pick writing; any coding cue picks
    /// coding/ML; everything else is generic.
    pub fn select_branch(&self, input: &PricingInput<'_>) -> Branch {
        let lowered = input.text.to_lowercase();
        let writing = contains_any(&lowered, WRITING_TERMS)
            || matches!(
                input.kind,
                AssignmentType::Report | AssignmentType::Assignment
            );
        let coding = contains_any(&lowered, CODING_TERMS)
            || input.skills.iter().any(|s| CODING_SKILLS.contains(s));

        if writing && !coding {
            Branch::Writing
        } else if coding {
            Branch::CodingMl
        } else {
            Branch::Generic
        }
    }

    pub fn quote(&self, input: &PricingInput<'_>) -> PipelineResult<PricingOutcome> {
        let s = &self.schedule;

        let skill_items: Vec<(&'static str, f64)> = input
            .skills
            .iter()
            .map(|name| (*name, skill_price(name)))
            .collect();
        let skills_total: f64 = skill_items.iter().map(|(_, p)| p).sum();
        let task_total: f64 = input.tasks.iter().map(|t| t.price).sum();
        let languages = input.languages as f64 * s.per_language;

        let branch = self.select_branch(input);
        let subtotal = match branch {
            Branch::Writing => {
                let pages = match input.pages {
                    Some(p) if p > 0 => p,
                    _ => s.default_pages,
                };
                let handwriting = if input.handwriting {
                    s.handwriting_surcharge
                } else {
                    0.0
                };
                s.base_fee
                    + f64::from(pages) * s.per_page
                    + input.diagrams as f64 * s.per_diagram
                    + handwriting
                    + skills_total * s.writing_skill_share
                    + task_total
            }
            Branch::CodingMl => {
                s.base_fee
                    + s.coding_surcharge
                    + task_total
                    + languages
                    + skills_total * s.coding_skill_share
            }
            Branch::Generic if task_total > 0.0 => {
                s.base_fee + task_total + languages + skills_total * s.generic_task_skill_share
            }
            Branch::Generic => {
                if input.signals().looks_irrelevant() {
                    tracing::debug!("generic branch found no priceable signal");
                    return Ok(PricingOutcome::Irrelevant);
                }
                let floor = if skills_total == 0.0 {
                    s.no_skill_floor
                } else {
                    0.0
                };
                s.base_fee + skills_total + languages + floor
            }
        };

        let platform_multiplier = s.platform_multiplier(input.platform);
        let urgency_multiplier = s.urgency_multiplier(input.urgency);
        let total = round2(subtotal * platform_multiplier * urgency_multiplier);

        if !total.is_finite() || total < 0.0 {
            return Err(PipelineError::Internal(format!(
                "price computed as {total} on {branch} branch"
            )));
        }

        tracing::debug!(
            branch = %branch,
            subtotal,
            platform_multiplier,
            urgency_multiplier,
            total,
            "priced request"
        );

        Ok(PricingOutcome::Quoted(Quote {
            branch,
            subtotal,
            platform_multiplier,
            urgency_multiplier,
            total,
            skill_items: skill_items
                .into_iter()
                .map(|(name, price)| (name, round2(price)))
                .collect(),
            task_items: input
                .tasks
                .iter()
                .map(|t| (t.name, round2(t.price)))
                .collect(),
        }))
    }
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
