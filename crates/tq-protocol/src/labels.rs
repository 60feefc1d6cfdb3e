use serde::{Deserialize, Serialize};

/// Error returned when a label string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} label: {value}")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub value: String,
}

/// Request category assigned by the type classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignmentType {
    Report,
    Diagram,
    Code,
    Project,
    Simulation,
    Homework,
    Assignment,
    Other,
    Irrelevant,
}

impl AssignmentType {
    /// Candidate label set offered to the zero-shot classifier, in order.
    pub const ALL: [AssignmentType; 9] = [
        Self::Report,
        Self::Diagram,
        Self::Code,
        Self::Project,
        Self::Simulation,
        Self::Homework,
        Self::Assignment,
        Self::Other,
        Self::Irrelevant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Report => "Report",
            Self::Diagram => "Diagram",
            Self::Code => "Code",
            Self::Project => "Project",
            Self::Simulation => "Simulation",
            Self::Homework => "Homework",
            Self::Assignment => "Assignment",
            Self::Other => "Other",
            Self::Irrelevant => "Irrelevant",
        }
    }

    /// Case-insensitive lookup of a classifier label.
    pub fn from_label(label: &str) -> Result<Self, UnknownLabel> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(label.trim()))
            .ok_or_else(|| UnknownLabel {
                kind: "assignment type",
                value: label.to_string(),
            })
    }
}

impl std::fmt::Display for AssignmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How soon the requester needs the work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Urgency {
    High,
    #[default]
    Medium,
    Low,
}

impl Urgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad subject area of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    #[serde(rename = "AI/ML")]
    AiMl,
    Electronics,
    Writing,
    General,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiMl => "AI/ML",
            Self::Electronics => "Electronics",
            Self::Writing => "Writing",
            Self::General => "General",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
