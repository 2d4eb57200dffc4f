use super::catalog::DIMENSIONS;
use super::config::{DiagnosticConfig, IncompleteAnswerPolicy};
use super::domain::{AnswerSet, Dimension, DimensionResult, QuestionId, Status};
use super::patterns::{match_patterns, PatternInterpretation};
use super::scoring::{score_catalog, total_score};
use tracing::{debug, warn};

/// Stateless evaluator applying the answer policy, scorer, and pattern matcher.
#[derive(Debug, Clone)]
pub struct DiagnosticEngine {
    config: DiagnosticConfig,
    catalog: &'static [Dimension],
}

impl DiagnosticEngine {
    pub fn new(config: DiagnosticConfig) -> Self {
        Self::with_catalog(config, DIMENSIONS)
    }

    pub fn with_catalog(config: DiagnosticConfig, catalog: &'static [Dimension]) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &DiagnosticConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static [Dimension] {
        self.catalog
    }

    pub fn evaluate(&self, answers: &AnswerSet) -> Result<DiagnosticOutcome, DiagnosticError> {
        let unknown = answers.unknown(self.catalog);
        if !unknown.is_empty() {
            debug!(ignored = unknown.len(), "ignoring answers for unknown question ids");
        }

        let missing = answers.missing(self.catalog);
        if !missing.is_empty() {
            match self.config.incomplete_answers {
                IncompleteAnswerPolicy::Reject => {
                    return Err(DiagnosticError::IncompleteAnswers { missing });
                }
                IncompleteAnswerPolicy::TreatAsNo => {
                    warn!(
                        missing = missing.len(),
                        "scoring incomplete answer set with missing answers as no"
                    );
                }
            }
        }

        let results = score_catalog(self.catalog, answers);
        let patterns = match_patterns(&results);
        debug!(
            total_score = total_score(&results),
            matched = patterns.len(),
            "diagnostic evaluated"
        );

        Ok(DiagnosticOutcome { results, patterns })
    }
}

impl Default for DiagnosticEngine {
    fn default() -> Self {
        Self::new(DiagnosticConfig::default())
    }
}

/// Scored dimensions in catalog order plus every matched interpretation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticOutcome {
    pub results: Vec<DimensionResult<'static>>,
    pub patterns: Vec<&'static PatternInterpretation>,
}

impl DiagnosticOutcome {
    pub fn total_score(&self) -> u16 {
        total_score(&self.results)
    }

    pub fn max_total_score(&self) -> u16 {
        self.results
            .iter()
            .map(|result| u16::from(result.max_score))
            .sum()
    }

    /// Dimensions that are not green.
    pub fn gaps(&self) -> impl Iterator<Item = &DimensionResult<'static>> {
        self.results
            .iter()
            .filter(|result| result.status != Status::Green)
    }

    pub fn result(&self, dimension_id: &str) -> Option<&DimensionResult<'static>> {
        self.results
            .iter()
            .find(|result| result.dimension_id() == dimension_id)
    }

    pub fn matched(&self, pattern_id: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.id == pattern_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiagnosticError {
    #[error("answer set is incomplete; missing question ids: {}", join_ids(.missing))]
    IncompleteAnswers { missing: Vec<QuestionId> },
}

fn join_ids(ids: &[QuestionId]) -> String {
    ids.iter()
        .map(QuestionId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
