//! Integration tests for POST /analyze.

mod common;

use common::TestHarness;
use serde_json::json;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn detects_email_above_threshold(ctx: &TestHarness) {
    let res = ctx
        .post_json(
            "/analyze",
            json!({ "text": "Contact me at john@example.com", "threshold": 0.4 }),
        )
        .await;

    assert_eq!(res.status, 200);
    let email = res.entity("EMAIL_ADDRESS").expect("email detected");
    assert_eq!(email["value"], "john@example.com");
    assert_eq!(email["start"], 14);
    assert_eq!(email["end"], 30);
    assert!(email["confidence"].as_f64().unwrap() >= 0.4);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn detects_pan_and_org_id(ctx: &TestHarness) {
    let res = ctx
        .post_json(
            "/analyze",
            json!({ "text": "PAN ABCDE1234F belongs to employee ORG12345" }),
        )
        .await;

    assert_eq!(res.status, 200);
    let types = res.entity_types();
    assert!(types.contains(&"PAN".to_string()));
    assert!(types.contains(&"ORG_ID".to_string()));

    let pan = res.entity("PAN").unwrap();
    assert_eq!(pan["value"], "ABCDE1234F");
    assert_eq!(pan["confidence"], 0.9);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn detects_aadhaar(ctx: &TestHarness) {
    let res = ctx
        .post_json("/analyze", json!({ "text": "My Aadhaar is 1234 5678 9012" }))
        .await;

    assert_eq!(res.status, 200);
    let aadhaar = res.entity("AADHAAR").expect("aadhaar detected");
    assert_eq!(aadhaar["value"], "1234 5678 9012");
    assert_eq!(aadhaar["confidence"], 0.85);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn card_number_is_not_reported_as_aadhaar(ctx: &TestHarness) {
    let res = ctx
        .post_json(
            "/analyze",
            json!({ "text": "Card: 4111 1111 1111 1111", "threshold": 0 }),
        )
        .await;

    assert_eq!(res.status, 200);
    let types = res.entity_types();
    assert!(types.contains(&"CREDIT_CARD".to_string()));
    assert!(!types.contains(&"AADHAAR".to_string()));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn high_threshold_filters_everything(ctx: &TestHarness) {
    let res = ctx
        .post_json("/analyze", json!({ "text": "Code ORG12345", "threshold": 0.9 }))
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["entities"], json!([]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn accepts_threshold_as_string(ctx: &TestHarness) {
    let res = ctx
        .post_json("/analyze", json!({ "text": "Code ORG12345", "threshold": "0.9" }))
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["entities"], json!([]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn offsets_count_characters(ctx: &TestHarness) {
    let res = ctx
        .post_json("/analyze", json!({ "text": "नाम PAN ABCDE1234F" }))
        .await;

    assert_eq!(res.status, 200);
    let pan = res.entity("PAN").expect("pan detected");
    assert_eq!(pan["start"], 8);
    assert_eq!(pan["end"], 18);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn entity_filter_limits_results(ctx: &TestHarness) {
    let res = ctx
        .post_json(
            "/analyze",
            json!({
                "text": "PAN ABCDE1234F, mail john@example.com",
                "entities": ["EMAIL_ADDRESS"]
            }),
        )
        .await;

    assert_eq!(res.status, 200);
    assert_eq!(res.entity_types(), vec!["EMAIL_ADDRESS".to_string()]);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_text_returns_no_entities(ctx: &TestHarness) {
    let res = ctx.post_json("/analyze", json!({ "text": "" })).await;

    assert_eq!(res.status, 200);
    assert_eq!(res.body["entities"], json!([]));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejects_out_of_range_threshold(ctx: &TestHarness) {
    let res = ctx
        .post_json("/analyze", json!({ "text": "anything", "threshold": 1.5 }))
        .await;

    assert_eq!(res.status, 422);
    assert!(res.body["detail"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejects_unknown_entity_type(ctx: &TestHarness) {
    let res = ctx
        .post_json(
            "/analyze",
            json!({ "text": "anything", "entities": ["SOCIAL_SECURITY"] }),
        )
        .await;

    assert_eq!(res.status, 422);
    assert_eq!(res.body["detail"], "Unknown entity type: SOCIAL_SECURITY");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejects_unsupported_language(ctx: &TestHarness) {
    let res = ctx
        .post_json("/analyze", json!({ "text": "hola", "language": "es" }))
        .await;

    assert_eq!(res.status, 422);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejects_missing_text(ctx: &TestHarness) {
    let res = ctx.post_json("/analyze", json!({ "threshold": 0.5 })).await;

    assert_eq!(res.status, 422);
    assert!(res.body["detail"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn rejects_malformed_json(ctx: &TestHarness) {
    let res = ctx
        .post_raw("/analyze", "application/json", b"{not json".to_vec())
        .await;

    assert_eq!(res.status, 400);
    assert!(res.body["detail"].is_string());
}
