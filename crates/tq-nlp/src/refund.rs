//! Refund settlement.
//!
//! A [`RefundModel`] predicts what share of the price to return; the
//! settlement rule turns that prediction into a money split.

use async_trait::async_trait;
use tq_protocol::{RefundQuote, RefundRequest};

use crate::error::{CapabilityResult, PipelineError, PipelineResult};
use crate::pricing::round2;

/// Predictions below this percentage settle as no refund.
pub const MIN_REFUND_PERCENT: f64 = 20.0;

/// Share of the price kept by the platform regardless of refund.
pub const PLATFORM_FEE_SHARE: f64 = 0.10;

/// Predicts a refund percentage (0 to 100) for a request.
#[async_trait]
pub trait RefundModel: Send + Sync {
    async fn predict_percent(&self, request: &RefundRequest) -> CapabilityResult<f64>;

    fn name(&self) -> &str;
}

/// Reject requests the settlement rule cannot price.
pub fn validate_request(request: &RefundRequest) -> PipelineResult<()> {
    if !request.price.is_finite() || request.price < 0.0 {
        return Err(PipelineError::InvalidInput("price must be a non-negative number".into()));
    }
    if request.delay_days < 0 {
        return Err(PipelineError::InvalidInput("delay_days must be non-negative".into()));
    }
    if request.rating.is_some_and(|r| !(1..=5).contains(&r)) {
        return Err(PipelineError::InvalidInput("rating must be between 1 and 5".into()));
    }
    Ok(())
}

/// Apply the settlement rule to a predicted percentage.
pub fn settle(price: f64, predicted_percent: f64) -> RefundQuote {
    let percent = if predicted_percent.is_nan() {
        0.0
    } else {
        predicted_percent.clamp(0.0, 100.0)
    };
    let percent = if percent < MIN_REFUND_PERCENT {
        0.0
    } else {
        percent
    };

    let platform_fee = PLATFORM_FEE_SHARE * price;
    let remaining = price - platform_fee;
    let customer_refund = percent / 100.0 * remaining;
    let solver_amount = remaining - customer_refund;

    RefundQuote {
        refund_percent: round2(percent),
        platform_fee: round2(platform_fee),
        customer_refund: round2(customer_refund),
        solver_amount: round2(solver_amount),
    }
}

/// Validate, predict, settle.
pub async fn quote_refund(
    model: &dyn RefundModel,
    request: &RefundRequest,
) -> PipelineResult<RefundQuote> {
    validate_request(request)?;
    let predicted = model.predict_percent(request).await.map_err(|e| {
        tracing::warn!(model = model.name(), error = %e, "refund prediction failed");
        PipelineError::Internal(e.to_string())
    })?;
    let quote = settle(request.price, predicted);
    tracing::debug!(
        predicted,
        refund_percent = quote.refund_percent,
        "settled refund"
    );
    Ok(quote)
}
