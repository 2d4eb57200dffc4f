use super::super::catalog::{
    ADOPTION_COST_AWARENESS, INTERNAL_CUSTOMER_IDENTIFICATION, TRIANGLE_HEALTH, VP_TRANSLATION,
};
use super::super::domain::{DimensionResult, Status};
use super::super::scoring::total_score;
use serde::{Deserialize, Serialize};

/// Whole-profile score at or below which discovery work comes before any pilot.
pub const FOUNDATION_TOTAL_SCORE_CEILING: u16 = 8;

/// Closed set of interpretation conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PatternRule {
    FundedNotAdopted,
    TranslationGap,
    AdoptionCostBlindness,
    TriangleMisread,
    FoundationBeforePilots,
}

impl PatternRule {
    /// A dimension the rule needs but cannot find makes the rule non-matching.
    pub fn matches(self, results: &[DimensionResult<'_>]) -> bool {
        let vp = status_of(results, VP_TRANSLATION);
        let cost = status_of(results, ADOPTION_COST_AWARENESS);

        match self {
            Self::FundedNotAdopted => match (vp, cost) {
                (Some(vp), Some(cost)) => vp == Status::Red && cost == Status::Red,
                _ => false,
            },
            Self::TranslationGap => {
                match (status_of(results, INTERNAL_CUSTOMER_IDENTIFICATION), vp, cost) {
                    (Some(customer), Some(vp), Some(cost)) => {
                        customer.is_established() && vp == Status::Red && cost.is_established()
                    }
                    _ => false,
                }
            }
            Self::AdoptionCostBlindness => match (vp, cost) {
                (Some(vp), Some(cost)) => vp.is_established() && cost == Status::Red,
                _ => false,
            },
            Self::TriangleMisread => {
                status_of(results, TRIANGLE_HEALTH) == Some(Status::Red)
                    && results.iter().any(|result| {
                        result.dimension_id() != TRIANGLE_HEALTH && result.status.is_established()
                    })
            }
            Self::FoundationBeforePilots => total_score(results) <= FOUNDATION_TOTAL_SCORE_CEILING,
        }
    }
}

fn status_of(results: &[DimensionResult<'_>], dimension_id: &str) -> Option<Status> {
    results
        .iter()
        .find(|result| result.dimension_id() == dimension_id)
        .map(|result| result.status)
}
