use serde::{Deserialize, Serialize};

// Request and response bodies for /risk/score are the engine's own
// RiskInput and RiskAssessment.

// ===== Health Check =====
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    /// RFC 3339, millisecond precision, UTC
    pub timestamp: String,
}

// ===== Error Response =====
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
