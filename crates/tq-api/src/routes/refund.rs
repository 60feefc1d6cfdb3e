//! Refund settlement endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tq_protocol::{RefundQuote, RefundRequest};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /predict_refund: predict a refund share and settle the money split.
pub async fn predict_refund(
    State(state): State<AppState>,
    payload: Result<Json<RefundRequest>, JsonRejection>,
) -> ApiResult<Json<RefundQuote>> {
    let Json(req) = payload?;
    let model = state
        .refund
        .as_deref()
        .ok_or_else(|| ApiError::Unavailable("refund model not configured".into()))?;

    let quote = tq_nlp::quote_refund(model, &req).await?;
    tracing::info!(
        refund_percent = quote.refund_percent,
        customer_refund = quote.customer_refund,
        "refund settled"
    );
    Ok(Json(quote))
}
