use axum::response::Response;
use serde_json::Value;

use crate::diagnostic::catalog::{self, DIMENSIONS};
use crate::diagnostic::domain::{AnswerSet, DimensionResult};
use crate::diagnostic::scoring::score_all;
use crate::diagnostic::{DiagnosticConfig, DiagnosticEngine, IncompleteAnswerPolicy};

pub(super) fn all_yes() -> AnswerSet {
    AnswerSet::uniform(DIMENSIONS, true)
}

pub(super) fn all_no() -> AnswerSet {
    AnswerSet::uniform(DIMENSIONS, false)
}

/// Full marks everywhere except the listed dimensions, which answer "yes" to
/// their first `score` questions only.
pub(super) fn answers_with_scores(overrides: &[(&str, u8)]) -> AnswerSet {
    let mut answers = all_yes();
    for (dimension_id, score) in overrides {
        let dimension = catalog::dimension(dimension_id).expect("known dimension");
        for (index, id) in dimension.question_ids().enumerate() {
            answers.record(id, index < usize::from(*score));
        }
    }
    answers
}

pub(super) fn results_with_scores(overrides: &[(&str, u8)]) -> Vec<DimensionResult<'static>> {
    score_all(&answers_with_scores(overrides))
}

pub(super) fn engine(policy: IncompleteAnswerPolicy) -> DiagnosticEngine {
    DiagnosticEngine::new(DiagnosticConfig {
        incomplete_answers: policy,
    })
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
