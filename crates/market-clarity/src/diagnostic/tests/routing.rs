use super::common::*;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

use crate::diagnostic::router::{diagnostic_router, evaluate_handler, EvaluationRequest};
use crate::diagnostic::{DiagnosticEngine, IncompleteAnswerPolicy, QuestionId};

fn evaluate_request(body: Value) -> Request<axum::body::Body> {
    Request::post("/api/v1/diagnostic/evaluate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize body"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn evaluate_route_scores_complete_answer_sets() {
    let router = diagnostic_router(Arc::new(DiagnosticEngine::default()));
    let answers = serde_json::to_value(all_no()).expect("answers serialize");

    let response = router
        .oneshot(evaluate_request(json!({ "answers": answers })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("evaluated_at").is_some());
    assert_eq!(payload["total_score"], json!(0));
    let results = payload["results"].as_array().expect("results array");
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|result| result["status"] == json!("red")));
    assert_eq!(
        results[0]["dimension_id"],
        json!("internal-customer-identification")
    );
    let patterns: Vec<&str> = payload["patterns"]
        .as_array()
        .expect("patterns array")
        .iter()
        .filter_map(|pattern| pattern["id"].as_str())
        .collect();
    assert_eq!(patterns, vec!["funded-not-adopted", "foundation-before-pilots"]);
}

#[tokio::test]
async fn evaluate_route_ignores_large_unknown_ids() {
    let router = diagnostic_router(Arc::new(DiagnosticEngine::default()));
    let mut answers = serde_json::to_value(all_yes()).expect("answers serialize");
    answers["300"] = json!(true);
    answers["70000"] = json!(false);

    let response = router
        .oneshot(evaluate_request(json!({ "answers": answers })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_score"], json!(18));
    assert_eq!(payload["gap_count"], json!(0));
    assert_eq!(payload["patterns"], json!([]));
}

#[tokio::test]
async fn evaluate_route_reports_missing_questions() {
    let router = diagnostic_router(Arc::new(DiagnosticEngine::default()));

    let response = router
        .oneshot(evaluate_request(json!({ "answers": { "1": true, "2": false } })))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    let missing = payload["missing_question_ids"]
        .as_array()
        .expect("missing ids listed");
    assert_eq!(missing.len(), 16);
    assert_eq!(missing[0], json!(3));
    assert!(payload["error"]
        .as_str()
        .unwrap_or_default()
        .contains("incomplete"));
}

#[tokio::test]
async fn evaluate_handler_honours_lenient_policy() {
    let engine = Arc::new(engine(IncompleteAnswerPolicy::TreatAsNo));
    let mut answers = crate::diagnostic::AnswerSet::new();
    answers.record(QuestionId(13), true);

    let response = evaluate_handler(State(engine), axum::Json(EvaluationRequest { answers })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["total_score"], json!(1));
    assert_eq!(payload["gap_count"], json!(5));
    assert_eq!(payload["show_workshop_callout"], json!(true));
}

#[tokio::test]
async fn catalog_route_exposes_questions_and_copy() {
    let router = diagnostic_router(Arc::new(DiagnosticEngine::default()));

    let response = router
        .oneshot(
            Request::get("/api/v1/diagnostic/catalog")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    let dimensions = payload["dimensions"].as_array().expect("dimensions");
    assert_eq!(dimensions.len(), 5);
    let question_count: usize = dimensions
        .iter()
        .map(|dimension| dimension["questions"].as_array().map_or(0, Vec::len))
        .sum();
    assert_eq!(question_count, 18);
    assert_eq!(dimensions[3]["threshold"], json!(1));
    assert_eq!(payload["patterns"].as_array().map(Vec::len), Some(5));
    assert!(payload["patterns"][0].get("rule").is_none());
    assert_eq!(
        payload["call_to_action"]["contact"]["website"],
        json!("aieutics.com")
    );
    assert!(payload["attribution"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Developed by Aieutics"));
}

#[tokio::test]
async fn malformed_answers_are_rejected_by_the_extractor() {
    let router = diagnostic_router(Arc::new(DiagnosticEngine::default()));

    let response = router
        .oneshot(evaluate_request(json!({ "answers": { "1": "perhaps" } })))
        .await
        .expect("route executes");

    assert!(response.status().is_client_error());
}
