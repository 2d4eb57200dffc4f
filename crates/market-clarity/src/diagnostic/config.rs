use serde::{Deserialize, Serialize};

/// How the engine treats catalog questions left unanswered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncompleteAnswerPolicy {
    /// Refuse to score until every question has an answer.
    #[default]
    Reject,
    /// Score unanswered questions as "no".
    TreatAsNo,
}

impl IncompleteAnswerPolicy {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "reject" | "strict" => Some(Self::Reject),
            "treat-as-no" | "treat_as_no" | "no" | "lenient" => Some(Self::TreatAsNo),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::TreatAsNo => "treat-as-no",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticConfig {
    pub incomplete_answers: IncompleteAnswerPolicy,
}
