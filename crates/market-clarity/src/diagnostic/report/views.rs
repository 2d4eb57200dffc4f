use super::super::domain::Status;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ReflectionView {
    pub reflection: &'static str,
    pub prompt: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DimensionResultView {
    pub dimension_id: &'static str,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub score: u8,
    pub max_score: u8,
    pub percentage: f64,
    pub status: Status,
    pub status_label: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reflection: Option<ReflectionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PatternView {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub results: Vec<DimensionResultView>,
    pub patterns: Vec<PatternView>,
    pub total_score: u16,
    pub max_total_score: u16,
    pub gap_count: usize,
    pub show_workshop_callout: bool,
}
