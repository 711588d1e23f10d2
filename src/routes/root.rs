use rocket::{get, serde::json::Json};
use serde::Serialize;

pub const ROOT_MESSAGE: &str = "RentSaathi - Rental Marketplace API";

#[derive(Debug, Serialize)]
pub struct RootResponse {
    message: String,
}

#[get("/")]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}
