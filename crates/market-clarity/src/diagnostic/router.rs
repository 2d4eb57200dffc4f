use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use super::copy::{CallToActionCopy, CostOfInactionCopy, ATTRIBUTION, COI_COPY, CTA_COPY};
use super::domain::{AnswerSet, Dimension};
use super::engine::{DiagnosticEngine, DiagnosticError};
use super::patterns::PATTERN_INTERPRETATIONS;
use super::report::{pattern_view, DiagnosticReport, PatternView};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub answers: AnswerSet,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationResponse {
    pub evaluated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub report: DiagnosticReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub dimensions: &'static [Dimension],
    pub patterns: Vec<PatternView>,
    pub cost_of_inaction: &'static CostOfInactionCopy,
    pub call_to_action: &'static CallToActionCopy,
    pub attribution: &'static str,
}

/// Router builder exposing the questionnaire and evaluation endpoints.
pub fn diagnostic_router(engine: Arc<DiagnosticEngine>) -> Router {
    Router::new()
        .route("/api/v1/diagnostic/catalog", get(catalog_handler))
        .route("/api/v1/diagnostic/evaluate", post(evaluate_handler))
        .with_state(engine)
}

pub(crate) async fn catalog_handler(State(engine): State<Arc<DiagnosticEngine>>) -> Json<CatalogView> {
    Json(CatalogView {
        dimensions: engine.catalog(),
        patterns: PATTERN_INTERPRETATIONS.iter().map(pattern_view).collect(),
        cost_of_inaction: &COI_COPY,
        call_to_action: &CTA_COPY,
        attribution: ATTRIBUTION,
    })
}

pub(crate) async fn evaluate_handler(
    State(engine): State<Arc<DiagnosticEngine>>,
    Json(request): Json<EvaluationRequest>,
) -> Response {
    match engine.evaluate(&request.answers) {
        Ok(outcome) => {
            let report = outcome.report();
            info!(
                total_score = report.total_score,
                gaps = report.gap_count,
                patterns = report.patterns.len(),
                "diagnostic submission scored"
            );
            let body = EvaluationResponse {
                evaluated_at: Utc::now(),
                report,
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(error) => {
            let missing = match &error {
                DiagnosticError::IncompleteAnswers { missing } => missing,
            };
            let payload = json!({
                "error": error.to_string(),
                "missing_question_ids": missing,
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
