//! E2E tests for `/predict_refund`: remote model wiring, settlement split
//! and input validation.

mod helpers;

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use helpers::TestHarness;
use tq_api::config::{ApiConfig, RemoteConfig};
use tq_nlp::mock::MockRefundModel;

async fn refund_server(percent: f64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"refund_percent": percent})))
        .mount(&server)
        .await;
    server
}

fn configured(server: &MockServer) -> TestHarness {
    let config = ApiConfig {
        refund: RemoteConfig::enabled_at(&format!("{}/predict", server.uri())),
        ..Default::default()
    };
    TestHarness::from_config(&config)
}

#[tokio::test]
async fn e2e_remote_model_settles_refund() {
    let server = refund_server(45.0).await;
    let h = configured(&server);

    let (status, json) = h
        .predict_refund(json!({
            "price": 300.0,
            "reason_text": "delivered three days late",
            "delay_days": 3,
            "rating": 2
        }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["refund_percent"], 45.0);
    assert_eq!(json["platform_fee"], 30.0);
    assert_eq!(json["customer_refund"], 121.5);
    assert_eq!(json["solver_amount"], 148.5);
}

/// The request body reaches the model unchanged.
#[tokio::test]
async fn e2e_remote_model_receives_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/predict"))
        .and(body_partial_json(json!({"reason_text": "wrong topic", "delay_days": 0})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"refund_percent": 80.0})))
        .expect(1)
        .mount(&server)
        .await;
    let h = configured(&server);

    let (status, json) = h
        .predict_refund(json!({"price": 50.0, "reason_text": "wrong topic", "delay_days": 0}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["customer_refund"], 36.0);
}

#[tokio::test]
async fn e2e_small_prediction_pays_solver() {
    let server = refund_server(15.0).await;
    let h = configured(&server);

    let (status, json) = h
        .predict_refund(json!({"price": 300.0, "reason_text": "minor typo", "delay_days": 0}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["refund_percent"], 0.0);
    assert_eq!(json["customer_refund"], 0.0);
    assert_eq!(json["solver_amount"], 270.0);
}

#[tokio::test]
async fn e2e_remote_model_error_is_internal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let h = configured(&server);

    let (status, json) = h
        .predict_refund(json!({"price": 10.0, "reason_text": "late", "delay_days": 1}))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["status"], 500);
}

#[tokio::test]
async fn e2e_no_model_is_unavailable() {
    let h = TestHarness::rules_only();
    let (status, json) = h
        .predict_refund(json!({"price": 10.0, "reason_text": "late", "delay_days": 1}))
        .await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], 503);
}

#[tokio::test]
async fn e2e_invalid_refund_inputs_rejected() {
    let model = Arc::new(MockRefundModel::returning(50.0));
    let h = TestHarness::with_refund_model(model.clone());

    for body in [
        json!({"price": -5.0, "reason_text": "late", "delay_days": 1}),
        json!({"price": 5.0, "reason_text": "late", "delay_days": -1}),
        json!({"price": 5.0, "reason_text": "late", "delay_days": 1, "rating": 9}),
        json!({"price": 5.0, "delay_days": 1}),
    ] {
        let (status, _) = h.predict_refund(body.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
    }
    assert_eq!(model.calls(), 0);
}

/// Out-of-range predictions are clamped before settling.
#[tokio::test]
async fn e2e_prediction_is_clamped() {
    let h = TestHarness::with_refund_model(Arc::new(MockRefundModel::returning(140.0)));
    let (_, json) = h
        .predict_refund(json!({"price": 100.0, "reason_text": "never delivered", "delay_days": 10}))
        .await;

    assert_eq!(json["refund_percent"], 100.0);
    assert_eq!(json["customer_refund"], 90.0);
    assert_eq!(json["solver_amount"], 0.0);
}
