//! HTTP routes and handlers

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use sentiq_core::{FeedbackRecord, PredictionResult, PredictionSink, Sentiment, TokenizerFormat};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::state::AppState;

/// Served model identifier, suffixed when degraded to the placeholder
fn model_name(is_dummy: bool) -> String {
    if is_dummy {
        "lstm-sentiment (placeholder)".to_string()
    } else {
        "lstm-sentiment".to_string()
    }
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/predict", post(predict))
        .route("/feedback", post(feedback))
        .route("/metrics", get(service_metrics))
        .route("/metrics/prometheus", get(prometheus_metrics))
        .fallback(fallback)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Prediction request body
#[derive(Debug, Deserialize)]
struct PredictRequest {
    text: String,
    #[serde(default)]
    user_id: Option<String>,
}

/// Prediction response body
#[derive(Debug, Serialize)]
struct PredictResponse {
    text: String,
    sentiment: Sentiment,
    confidence: f32,
    probability: f32,
    model: String,
    tokenizer_type: TokenizerFormat,
    timestamp: chrono::DateTime<Utc>,
    request_id: String,
}

impl PredictResponse {
    fn from_result(result: PredictionResult, request_id: String) -> Self {
        Self {
            model: model_name(result.is_dummy_model),
            text: result.text,
            sentiment: result.sentiment,
            confidence: result.confidence,
            probability: result.probability,
            tokenizer_type: result.tokenizer_type,
            timestamp: result.timestamp,
            request_id,
        }
    }
}

async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Sentiq Sentiment Analysis API",
        "version": env!("CARGO_PKG_VERSION"),
        "model": model_name(state.engine.provenance().is_synthetic()),
        "tokenizer_type": state.engine.tokenizer_format().as_str(),
        "endpoints": {
            "predict": "/predict",
            "health": "/health",
            "feedback": "/feedback",
            "metrics": "/metrics"
        }
    }))
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
    model_type: &'static str,
    tokenizer_type: &'static str,
    version: &'static str,
    timestamp: chrono::DateTime<Utc>,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: true,
        model_type: state.engine.provenance().as_str(),
        tokenizer_type: state.engine.tokenizer_format().as_str(),
        version: env!("CARGO_PKG_VERSION"),
        timestamp: Utc::now(),
    })
}

/// Main prediction handler
async fn predict(
    State(state): State<AppState>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, AppError> {
    let text = request.text.trim();
    if text.is_empty() {
        return Err(AppError::InvalidRequest("text must not be empty".into()));
    }

    match state.engine.predict(text).await {
        Ok(result) => {
            let request_id = format!("req_{}", uuid::Uuid::new_v4());
            info!(
                request_id = %request_id,
                sentiment = result.sentiment.as_str(),
                user_id = request.user_id.as_deref().unwrap_or("anonymous"),
                "prediction served"
            );
            Ok(Json(PredictResponse::from_result(result, request_id)))
        }
        Err(e) => {
            error!(error = %e, "prediction failed");
            let message = format!("prediction failed: {e}");
            let context = text.to_string();
            let monitor = state.monitor.clone();
            let tracking = state.tracking.clone();
            tokio::spawn(async move {
                tracking.record_error(&message, &context);
                monitor.report(message, context);
            });
            Err(AppError::Internal)
        }
    }
}

async fn feedback(
    State(state): State<AppState>,
    Json(record): Json<FeedbackRecord>,
) -> Json<serde_json::Value> {
    state.tracking.record_feedback(&record);

    if !record.is_correct {
        let message = format!(
            "incorrect prediction: predicted '{}', actual '{}'",
            record.predicted_sentiment, record.actual_sentiment
        );
        let monitor = state.monitor.clone();
        tokio::spawn(async move {
            monitor.report(message, record.text);
        });
    }

    Json(json!({
        "message": "feedback recorded",
        "timestamp": Utc::now(),
    }))
}

async fn service_metrics(State(state): State<AppState>) -> Json<serde_json::Value> {
    let counters = state.metrics.snapshot();
    let monitor = state.monitor.snapshot();

    Json(json!({
        "counters": counters,
        "positive_rate": counters.positive_rate(),
        "feedback_accuracy": counters.feedback_accuracy(),
        "monitor": monitor,
        "model_type": state.engine.provenance().as_str(),
        "tokenizer_type": state.engine.tokenizer_format().as_str(),
        "timestamp": Utc::now(),
    }))
}

async fn prometheus_metrics(State(state): State<AppState>) -> String {
    state.prometheus.render()
}

async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not found")
}

/// Error handling
#[derive(Debug)]
enum AppError {
    InvalidRequest(String),
    /// Catastrophic failure; details stay server-side
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        let body = json!({
            "error": {
                "message": message,
            }
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_name_reflects_provenance() {
        assert_eq!(model_name(false), "lstm-sentiment");
        assert_eq!(model_name(true), "lstm-sentiment (placeholder)");
    }

    #[test]
    fn test_internal_error_leaks_no_detail() {
        let response = AppError::Internal.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_invalid_request_is_bad_request() {
        let response = AppError::InvalidRequest("text must not be empty".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
