use rocket::{catch, http::Status, serde::json::Json, Request};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    detail: String,
}

#[catch(default)]
pub fn json_error(status: Status, _request: &Request) -> (Status, Json<ErrorResponse>) {
    let detail = status.reason().unwrap_or("Unknown Error").to_string();
    (status, Json(ErrorResponse { detail }))
}
