use axum::{Json, extract::rejection::JsonRejection};
use screening_core::model::ScreeningPayload;
use screening_core::scoring::{ScoredReport, score_screening};
use serde_json::{Value, json};
use tracing::{debug, warn};

use crate::error::ApiError;

pub async fn analyze_handler(
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ScoredReport>, ApiError> {
    let Json(body) = body.map_err(|rejection| {
        warn!("Rejected screening payload: {rejection}");
        ApiError::MalformedPayload(rejection.body_text())
    })?;

    // Values other than numbers never count as concerns.
    let payload = ScreeningPayload::from_json_lenient(&body).ok_or_else(|| {
        warn!("Rejected screening payload: not a JSON object");
        ApiError::MalformedPayload("expected a JSON object".to_string())
    })?;

    let report = score_screening(&payload);
    debug!(
        score = report.score,
        risk = %report.risk_level,
        skipped = payload.skipped().len(),
        "Scored screening"
    );

    Ok(Json(report))
}

pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
