use super::common::*;
use crate::diagnostic::catalog::{
    ADOPTION_COST_AWARENESS, CHANNEL_CLASSIFICATION_ALIGNMENT, INTERNAL_CUSTOMER_IDENTIFICATION,
    TRIANGLE_HEALTH, VP_TRANSLATION,
};
use crate::diagnostic::domain::DimensionResult;
use crate::diagnostic::patterns::{
    match_patterns, pattern, PatternRule, FOUNDATION_TOTAL_SCORE_CEILING,
    PATTERN_INTERPRETATIONS,
};
use crate::diagnostic::scoring::{score_all, total_score};

fn matched_ids(results: &[DimensionResult<'_>]) -> Vec<&'static str> {
    match_patterns(results)
        .into_iter()
        .map(|pattern| pattern.id)
        .collect()
}

#[test]
fn interpretations_are_declared_in_rule_order() {
    let ids: Vec<&str> = PATTERN_INTERPRETATIONS
        .iter()
        .map(|pattern| pattern.id)
        .collect();
    assert_eq!(
        ids,
        vec![
            "funded-not-adopted",
            "translation-gap",
            "adoption-cost-blindness",
            "triangle-misread",
            "foundation-before-pilots",
        ]
    );
    let foundation = pattern("foundation-before-pilots").expect("declared");
    assert_eq!(foundation.rule, PatternRule::FoundationBeforePilots);
    assert_eq!(foundation.label, "Foundation before pilots");
}

#[test]
fn all_yes_matches_nothing() {
    let results = score_all(&all_yes());
    assert!(matched_ids(&results).is_empty());
}

#[test]
fn all_no_matches_funded_not_adopted_and_foundation_only() {
    let results = score_all(&all_no());
    assert_eq!(
        matched_ids(&results),
        vec!["funded-not-adopted", "foundation-before-pilots"]
    );
}

#[test]
fn vp_at_threshold_with_amber_cost_is_a_translation_gap() {
    let results = results_with_scores(&[(VP_TRANSLATION, 2), (ADOPTION_COST_AWARENESS, 3)]);

    assert!(!PatternRule::FundedNotAdopted.matches(&results));
    assert!(!PatternRule::AdoptionCostBlindness.matches(&results));
    assert!(PatternRule::TranslationGap.matches(&results));
    assert_eq!(matched_ids(&results), vec!["translation-gap"]);
}

#[test]
fn red_vp_and_red_cost_is_funded_not_adopted() {
    let results = results_with_scores(&[(VP_TRANSLATION, 2), (ADOPTION_COST_AWARENESS, 2)]);
    assert_eq!(matched_ids(&results), vec!["funded-not-adopted"]);
}

#[test]
fn translation_gap_needs_identified_customers() {
    let results = results_with_scores(&[
        (INTERNAL_CUSTOMER_IDENTIFICATION, 2),
        (VP_TRANSLATION, 0),
        (ADOPTION_COST_AWARENESS, 4),
    ]);
    assert!(!PatternRule::TranslationGap.matches(&results));

    let amber_customer = results_with_scores(&[
        (INTERNAL_CUSTOMER_IDENTIFICATION, 3),
        (VP_TRANSLATION, 0),
        (ADOPTION_COST_AWARENESS, 4),
    ]);
    assert!(PatternRule::TranslationGap.matches(&amber_customer));
}

#[test]
fn established_vp_with_red_cost_is_cost_blindness() {
    let results = results_with_scores(&[(VP_TRANSLATION, 3), (ADOPTION_COST_AWARENESS, 0)]);
    assert_eq!(matched_ids(&results), vec!["adoption-cost-blindness"]);
}

#[test]
fn red_triangle_with_established_neighbours_is_misread() {
    let results = results_with_scores(&[(TRIANGLE_HEALTH, 1)]);
    assert_eq!(matched_ids(&results), vec!["triangle-misread"]);
}

#[test]
fn red_triangle_alone_among_red_dimensions_is_not_misread() {
    let results = results_with_scores(&[
        (INTERNAL_CUSTOMER_IDENTIFICATION, 2),
        (VP_TRANSLATION, 2),
        (ADOPTION_COST_AWARENESS, 2),
        (TRIANGLE_HEALTH, 0),
        (CHANNEL_CLASSIFICATION_ALIGNMENT, 1),
    ]);
    assert_eq!(total_score(&results), 7);
    assert!(!PatternRule::TriangleMisread.matches(&results));
    assert_eq!(
        matched_ids(&results),
        vec!["funded-not-adopted", "foundation-before-pilots"]
    );
}

#[test]
fn foundation_gate_uses_the_absolute_total() {
    let at_ceiling = results_with_scores(&[
        (ADOPTION_COST_AWARENESS, 0),
        (TRIANGLE_HEALTH, 0),
        (CHANNEL_CLASSIFICATION_ALIGNMENT, 0),
    ]);
    assert_eq!(total_score(&at_ceiling), FOUNDATION_TOTAL_SCORE_CEILING);
    assert_eq!(
        matched_ids(&at_ceiling),
        vec![
            "adoption-cost-blindness",
            "triangle-misread",
            "foundation-before-pilots",
        ]
    );

    let above_ceiling = results_with_scores(&[
        (ADOPTION_COST_AWARENESS, 0),
        (TRIANGLE_HEALTH, 0),
        (CHANNEL_CLASSIFICATION_ALIGNMENT, 1),
    ]);
    assert_eq!(total_score(&above_ceiling), 9);
    assert!(!PatternRule::FoundationBeforePilots.matches(&above_ceiling));
}

#[test]
fn missing_triangle_result_only_disables_triangle_misread() {
    let results: Vec<_> = results_with_scores(&[
        (VP_TRANSLATION, 2),
        (ADOPTION_COST_AWARENESS, 2),
        (TRIANGLE_HEALTH, 0),
    ])
    .into_iter()
    .filter(|result| result.dimension_id() != TRIANGLE_HEALTH)
    .collect();

    assert!(!PatternRule::TriangleMisread.matches(&results));
    assert_eq!(matched_ids(&results), vec!["funded-not-adopted"]);
}

#[test]
fn missing_vp_result_disables_vp_rules() {
    let results: Vec<_> = score_all(&all_no())
        .into_iter()
        .filter(|result| result.dimension_id() != VP_TRANSLATION)
        .collect();

    assert!(!PatternRule::FundedNotAdopted.matches(&results));
    assert!(!PatternRule::TranslationGap.matches(&results));
    assert!(!PatternRule::AdoptionCostBlindness.matches(&results));
    assert_eq!(matched_ids(&results), vec!["foundation-before-pilots"]);
}

#[test]
fn empty_results_only_satisfy_the_total_gate() {
    assert_eq!(matched_ids(&[]), vec!["foundation-before-pilots"]);
}
