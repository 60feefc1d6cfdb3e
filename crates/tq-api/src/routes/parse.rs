//! Request interpretation endpoint.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use tracing::Instrument;
use tq_protocol::{ParseRequest, ParseResponse};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /nlp/parse: interpret and price a free-form request.
pub async fn parse_request(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> ApiResult<Json<ParseResponse>> {
    let Json(req) = payload?;
    let request_id = Uuid::now_v7();
    let span = tracing::info_span!(
        "parse",
        request_id = %request_id,
        user_id = req.user_id.as_deref().unwrap_or("-"),
    );

    async move {
        let response = state.interpreter.interpret(&req).await?;
        tracing::info!(
            kind = %response.kind,
            price = response.estimated_price.unwrap_or(0.0),
            "request interpreted"
        );
        Ok::<_, ApiError>(Json(response))
    }
    .instrument(span)
    .await
}
