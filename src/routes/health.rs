use rocket::{get, serde::json::Json};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: String,
    message: String,
}

// Liveness only, nothing downstream to check.
#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: "RentSaathi API is running".to_string(),
    })
}
