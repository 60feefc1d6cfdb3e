//! Shared test harness for E2E integration tests.
//!
//! Wires a real `Interpreter` behind the `tq-api` router with a pinned date
//! reference and a deterministic reply source, so every request exercises
//! the full HTTP → pipeline → response path.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{NaiveDate, NaiveDateTime};
use http_body_util::BodyExt;
use tower::ServiceExt;

use tq_api::config::ApiConfig;
use tq_api::routes::build_router;
use tq_api::state::AppState;
use tq_nlp::mock::FixedReply;
use tq_nlp::{Capabilities, Interpreter, RefundModel, RuleDateParser};

/// Monday 2026-10-19 10:30, the instant relative dates resolve against.
pub fn reference_instant() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 10, 19)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}

/// Rules-only capabilities with pinned dates and the first reply of the pool.
pub fn pinned_capabilities() -> Capabilities {
    Capabilities::rules_only()
        .with_dates(Arc::new(RuleDateParser::with_reference(reference_instant())))
        .with_replies(Arc::new(FixedReply::first()))
}

/// End-to-end harness around the API router.
pub struct TestHarness {
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Keyword rules only; no remote capability.
    pub fn rules_only() -> Self {
        Self::with_capabilities(pinned_capabilities())
    }

    pub fn with_capabilities(capabilities: Capabilities) -> Self {
        Self::from_state(AppState::new(Interpreter::new(capabilities)))
    }

    pub fn with_refund_model(model: Arc<dyn RefundModel>) -> Self {
        Self::from_state(
            AppState::new(Interpreter::new(pinned_capabilities())).with_refund_model(model),
        )
    }

    /// State built the way the binary builds it.
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::from_state(AppState::from_config(config))
    }

    pub fn from_state(state: AppState) -> Self {
        let router = build_router(state.clone());
        Self { state, router }
    }

    /// POST /nlp/parse. Returns (HTTP status code, response JSON body).
    pub async fn parse(&self, text: &str) -> (StatusCode, serde_json::Value) {
        self.post_json("/nlp/parse", serde_json::json!({ "text": text }))
            .await
    }

    /// POST /predict_refund.
    pub async fn predict_refund(&self, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.post_json("/predict_refund", body).await
    }

    pub async fn post_json(
        &self,
        uri: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .router
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(serde_json::to_vec(&body).unwrap()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        (status, json)
    }

    /// Assert the fixed zero-price shape of an irrelevant response.
    pub fn assert_irrelevant(json: &serde_json::Value) {
        assert_eq!(json["type"], "Irrelevant");
        assert_eq!(json["pages"], 0);
        assert!(json["deadline"].is_null());
        assert_eq!(json["urgency"], "Low");
        assert_eq!(json["skills_required"], serde_json::json!([]));
        assert_eq!(json["estimated_price"], 0.0);
        assert_eq!(json["skill_price_breakdown"], serde_json::json!({}));
        assert!(json["message"].as_str().is_some_and(|m| !m.is_empty()));
    }
}
