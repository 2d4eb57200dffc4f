use super::catalog::DIMENSIONS;
use super::domain::{AnswerSet, Dimension, DimensionResult, Status};

/// Scores a single dimension. Unanswered questions count as "no"; callers that
/// need a complete answer set enforce it before scoring.
pub fn score<'a>(dimension: &'a Dimension, answers: &AnswerSet) -> DimensionResult<'a> {
    let score = dimension
        .question_ids()
        .filter(|id| answers.is_yes(*id))
        .count() as u8;
    let max_score = dimension.max_score();
    let percentage = if max_score == 0 {
        0.0
    } else {
        f64::from(score) / f64::from(max_score)
    };

    DimensionResult {
        dimension,
        score,
        max_score,
        status: Status::from_score(score, dimension.threshold),
        percentage,
    }
}

/// Scores every catalog dimension, keeping catalog order.
pub fn score_all(answers: &AnswerSet) -> Vec<DimensionResult<'static>> {
    score_catalog(DIMENSIONS, answers)
}

pub fn score_catalog<'a>(catalog: &'a [Dimension], answers: &AnswerSet) -> Vec<DimensionResult<'a>> {
    catalog
        .iter()
        .map(|dimension| score(dimension, answers))
        .collect()
}

pub fn total_score(results: &[DimensionResult<'_>]) -> u16 {
    results.iter().map(|result| u16::from(result.score)).sum()
}
