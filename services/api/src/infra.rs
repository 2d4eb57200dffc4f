use market_clarity::diagnostic::{catalog, QuestionId, QUESTION_COUNT};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_question_id(raw: &str) -> Result<QuestionId, String> {
    let id = raw
        .trim()
        .parse::<u32>()
        .map(QuestionId)
        .map_err(|err| format!("failed to parse '{raw}' as a question id ({err})"))?;

    if catalog::question(id).is_none() {
        return Err(format!(
            "question id {id} is outside the questionnaire (1-{QUESTION_COUNT})"
        ));
    }

    Ok(id)
}
