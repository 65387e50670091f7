use crate::config::ServiceConfig;
use crate::errors::{ApiError, ApiResult};
use crate::metrics;
use crate::models::HealthResponse;
use actix_web::{error, web, HttpRequest, HttpResponse};
use chrono::{SecondsFormat, Utc};
use risk_engine::{RiskEngine, RiskInput};
use tracing::{info, warn};

// ===== Health Check =====
pub async fn health_check(service: web::Data<ServiceConfig>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        service: service.name.clone(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

// ===== Score Risk =====
pub async fn score_risk(
    req: web::Json<RiskInput>,
    engine: web::Data<RiskEngine>,
) -> ApiResult<HttpResponse> {
    let input = req.into_inner();

    let assessment = engine.assess(&input).map_err(|e| {
        warn!("Rejected risk request: {}", e);
        metrics::record_rejection("missing_fields");
        ApiError::from(e)
    })?;

    info!(
        strategy = engine.strategy_name(),
        risk_score = assessment.risk_score,
        risk_level = %assessment.risk_level,
        "Risk score calculated"
    );
    metrics::record_assessment(&assessment);

    Ok(HttpResponse::Ok().json(assessment))
}

// ===== Prometheus Metrics =====
pub async fn metrics_export() -> ApiResult<HttpResponse> {
    let body = metrics::render().map_err(|e| ApiError::InternalError(e.to_string()))?;

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(body))
}

/// Malformed JSON and wrong value types share one generic 400.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    warn!("Unparseable risk request: {}", err);
    metrics::record_rejection("invalid_body");
    ApiError::InvalidPayload(err.to_string()).into()
}

// ===== Configure Routes =====
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/risk")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/score", web::post().to(score_risk)),
    )
    .route("/health", web::get().to(health_check))
    .route("/metrics", web::get().to(metrics_export));
}
