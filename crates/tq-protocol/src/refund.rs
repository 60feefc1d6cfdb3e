use serde::{Deserialize, Serialize};

/// Refund prediction request for a completed (or abandoned) task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundRequest {
    /// Price the customer paid.
    pub price: f64,
    /// Customer's stated reason for the refund.
    pub reason_text: String,
    /// Days past the agreed deadline.
    pub delay_days: i64,
    /// Optional 1-5 rating given to the solver.
    #[serde(default)]
    pub rating: Option<u8>,
}

/// Money split produced by the settlement rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundQuote {
    pub refund_percent: f64,
    pub platform_fee: f64,
    pub customer_refund: f64,
    pub solver_amount: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_defaults_to_none() {
        let json = r#"{"price": 100.0, "reason_text": "late", "delay_days": 2}"#;
        let req: RefundRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.delay_days, 2);
        assert!(req.rating.is_none());
    }
}
