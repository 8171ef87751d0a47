use axum::Json;
use serde_json::{json, Value};

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "resume-evaluator-api"
    }))
}

/// GET /
/// Static service metadata: name, version, feature list, and route names.
pub async fn service_info_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Evaluator API",
        "version": env!("CARGO_PKG_VERSION"),
        "features": [
            "Consistent scoring across multiple evaluations",
            "Detailed technical skill assessment",
            "Comprehensive feedback with specific examples",
            "Full 0-100 scoring range utilization",
            "Hyperlink extraction from resume annotations",
            "Structured fit assessment including role and skill match"
        ],
        "endpoints": {
            "evaluate": "/evaluate-resume",
            "health": "/health"
        }
    }))
}
