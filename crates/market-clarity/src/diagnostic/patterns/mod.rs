mod rules;

pub use rules::{PatternRule, FOUNDATION_TOTAL_SCORE_CEILING};

use super::domain::DimensionResult;
use serde::Serialize;

/// Narrative diagnosis attached to a rule over the whole result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternInterpretation {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    #[serde(skip)]
    pub rule: PatternRule,
}

impl PatternInterpretation {
    pub fn applies_to(&self, results: &[DimensionResult<'_>]) -> bool {
        self.rule.matches(results)
    }
}

pub static PATTERN_INTERPRETATIONS: &[PatternInterpretation] = &[
    PatternInterpretation {
        id: "funded-not-adopted",
        label: "Funded but not adopted",
        description: "The budget is allocated. The governance structure is established. The sponsor relationship is working. But the people who would need to change how they work don't yet have a value proposition in their vocabulary, and the costs of adoption haven't been mapped. This is the most common Layer 1 failure mode — and the hardest to detect, because funding creates the appearance of progress. The initiative team is solving a Layer 0 problem. The Layer 1 problem is untouched.",
        rule: PatternRule::FundedNotAdopted,
    },
    PatternInterpretation {
        id: "translation-gap",
        label: "Translation gap",
        description: "You know who your internal customers are, and you've done the work to understand what adoption costs them. But you cannot yet state the value proposition in their vocabulary — or it hasn't been validated with them. The understanding exists. The translation doesn't. This is often a proximity problem: the initiative team knows the customer exists but has not spent enough time in their operational environment to speak their language.",
        rule: PatternRule::TranslationGap,
    },
    PatternInterpretation {
        id: "adoption-cost-blindness",
        label: "Adoption cost blindness",
        description: "The value proposition sounds compelling. But the adoption cost analysis is missing. Internal customers are doing a private calculation you haven't done — and their answer is different from yours. This is why initiatives stall after pilot sign-up: the value proposition secured agreement. The unexamined adoption costs prevented behaviour change.",
        rule: PatternRule::AdoptionCostBlindness,
    },
    PatternInterpretation {
        id: "triangle-misread",
        label: "Triangle misread",
        description: "Real work has been done on at least one dimension of internal market clarity — but the three-way dynamic between the initiative team, the sponsor, and the internal customer hasn't been mapped. Unmanaged triangles don't stay stable: they produce one of three failure modes, usually the one the initiative team was least expecting.",
        rule: PatternRule::TriangleMisread,
    },
    PatternInterpretation {
        id: "foundation-before-pilots",
        label: "Foundation before pilots",
        description: "Internal market clarity is at the hypothesis stage across all dimensions. This is not a refinement problem or a communication problem — it is a discovery problem. Before designing a pilot, building the internal business case, or engaging procurement, the priority is direct, substantive contact with the people who would need to change their behaviour. Not stakeholder workshops. Not steering committee presentations. Conversations in their operational environment, without slides, about why they would or would not change how they work.",
        rule: PatternRule::FoundationBeforePilots,
    },
];

/// Every interpretation whose rule holds, in declaration order. No precedence
/// is applied; callers decide how many to surface.
pub fn match_patterns(results: &[DimensionResult<'_>]) -> Vec<&'static PatternInterpretation> {
    PATTERN_INTERPRETATIONS
        .iter()
        .filter(|pattern| pattern.applies_to(results))
        .collect()
}

pub fn pattern(id: &str) -> Option<&'static PatternInterpretation> {
    PATTERN_INTERPRETATIONS.iter().find(|pattern| pattern.id == id)
}
