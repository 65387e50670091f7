use prometheus::{Encoder, Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};
use lazy_static::lazy_static;
use risk_engine::RiskAssessment;

lazy_static! {
    // Request outcomes: scored, missing_fields, invalid_body
    pub static ref RISK_REQUESTS_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("risk_requests_total", "Total risk scoring requests by outcome"),
        &["outcome"]
    ).expect("metric can be created");

    pub static ref RISK_SCORE: Histogram = Histogram::with_opts(
        HistogramOpts::new("risk_score_distribution", "Distribution of returned risk scores")
            .buckets(vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0])
    ).expect("metric can be created");

    pub static ref RISK_LEVEL_TOTAL: IntCounterVec = IntCounterVec::new(
        Opts::new("risk_level_total", "Assessments by risk level"),
        &["level"]
    ).expect("metric can be created");

    static ref REGISTRY: Registry = {
        let registry = Registry::new();
        register_metrics(&registry).expect("metrics can be registered");
        registry
    };
}

/// Register all metrics with the given registry
pub fn register_metrics(registry: &Registry) -> Result<(), prometheus::Error> {
    registry.register(Box::new(RISK_REQUESTS_TOTAL.clone()))?;
    registry.register(Box::new(RISK_SCORE.clone()))?;
    registry.register(Box::new(RISK_LEVEL_TOTAL.clone()))?;
    Ok(())
}

pub fn record_assessment(assessment: &RiskAssessment) {
    RISK_REQUESTS_TOTAL.with_label_values(&["scored"]).inc();
    RISK_SCORE.observe(assessment.risk_score);
    RISK_LEVEL_TOTAL
        .with_label_values(&[assessment.risk_level.as_str()])
        .inc();
}

pub fn record_rejection(outcome: &str) {
    RISK_REQUESTS_TOTAL.with_label_values(&[outcome]).inc();
}

/// Generate metrics output in Prometheus text format
pub fn render() -> Result<String, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = vec![];
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
