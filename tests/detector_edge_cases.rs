//! Edge-case tests for the tactic detector contract

use pitchscan::tactics::{EXCLUSIVE_MARKETING, TacticDetector, URGENCY_MARKETING};

#[test]
fn test_absent_input_yields_all_false() {
    let detector = TacticDetector::new();
    let result = detector.detect(None);
    assert!(!result.any_flagged());
    assert!(result.matched_terms.is_empty());
    assert_eq!(result.flags.len(), detector.categories().len());
}

#[test]
fn test_empty_input_yields_all_false() {
    let detector = TacticDetector::new();
    let result = detector.detect(Some(""));
    assert!(!result.any_flagged());
    assert!(result.matched_terms.is_empty());
}

#[test]
fn test_unrelated_text_matches_nothing() {
    let detector = TacticDetector::new();
    let result = detector.detect(Some("The weather is lovely this afternoon."));
    assert!(!result.is_flagged(URGENCY_MARKETING));
    assert!(!result.is_flagged(EXCLUSIVE_MARKETING));
    assert!(result.matched_terms.is_empty());
}

#[test]
fn test_overlapping_terms_both_register() {
    let detector = TacticDetector::new();
    let result = detector.detect(Some("limited time"));
    assert!(result.is_flagged(URGENCY_MARKETING));
    assert!(!result.is_flagged(EXCLUSIVE_MARKETING));
    // "limited" is a substring of "limited time"; both terms fire
    assert_eq!(result.matched_terms, ["limited", "limited time"]);
}

#[test]
fn test_case_insensitive() {
    let detector = TacticDetector::new();
    let upper = detector.detect(Some("EXCLUSIVE OFFER"));
    let lower = detector.detect(Some("exclusive offer"));
    assert_eq!(upper, lower);
    assert!(upper.is_flagged(EXCLUSIVE_MARKETING));
    assert_eq!(upper.matched_terms, ["exclusive", "exclusive offer"]);
}

#[test]
fn test_idempotent() {
    let detector = TacticDetector::new();
    let input = Some("Order now, members only!");
    assert_eq!(detector.detect(input), detector.detect(input));
}

#[test]
fn test_substring_matches_inside_longer_words() {
    let detector = TacticDetector::new();
    let result = detector.detect(Some("become a vipassana master"));
    assert!(result.is_flagged(EXCLUSIVE_MARKETING));
    assert_eq!(result.matched_terms, ["vip"]);
}

#[test]
fn test_mixed_statement_deterministic_order() {
    let detector = TacticDetector::new();
    let result = detector.detect(Some("Exclusive VIP access, limited time only!"));
    assert!(result.is_flagged(URGENCY_MARKETING));
    assert!(result.is_flagged(EXCLUSIVE_MARKETING));
    // Urgency terms first (declaration order), lexicographic within each
    // category. "access" alone is not a declared term.
    assert_eq!(
        result.matched_terms,
        ["limited", "limited time", "exclusive", "vip"]
    );
}

#[test]
fn test_detect_result_independent_per_call() {
    let detector = TacticDetector::new();
    let hit = detector.detect(Some("hurry"));
    let miss = detector.detect(None);
    // The earlier hit must not leak into a later result
    assert!(hit.is_flagged(URGENCY_MARKETING));
    assert!(!miss.any_flagged());
    assert!(miss.matched_terms.is_empty());
}
