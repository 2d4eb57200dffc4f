use super::super::copy::WORKSHOP_CALLOUT_MIN_GAPS;
use super::super::domain::DimensionResult;
use super::super::engine::DiagnosticOutcome;
use super::super::patterns::PatternInterpretation;
use super::views::{DiagnosticReport, DimensionResultView, PatternView, ReflectionView};

impl DiagnosticReport {
    pub fn from_outcome(outcome: &DiagnosticOutcome) -> Self {
        let gap_count = outcome.gaps().count();

        Self {
            results: outcome.results.iter().map(result_view).collect(),
            patterns: outcome.patterns.iter().map(|pattern| pattern_view(pattern)).collect(),
            total_score: outcome.total_score(),
            max_total_score: outcome.max_total_score(),
            gap_count,
            show_workshop_callout: gap_count >= WORKSHOP_CALLOUT_MIN_GAPS,
        }
    }
}

impl DiagnosticOutcome {
    pub fn report(&self) -> DiagnosticReport {
        DiagnosticReport::from_outcome(self)
    }
}

fn result_view(result: &DimensionResult<'_>) -> DimensionResultView {
    let dimension = result.dimension;
    DimensionResultView {
        dimension_id: dimension.id,
        name: dimension.name,
        subtitle: dimension.subtitle,
        score: result.score,
        max_score: result.max_score,
        percentage: result.percentage,
        status: result.status,
        status_label: result.status.label(),
        reflection: result
            .reflection()
            .map(|(reflection, prompt)| ReflectionView { reflection, prompt }),
    }
}

pub(crate) fn pattern_view(pattern: &PatternInterpretation) -> PatternView {
    PatternView {
        id: pattern.id,
        label: pattern.label,
        description: pattern.description,
    }
}
