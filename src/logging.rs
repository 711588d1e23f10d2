use anyhow::{anyhow, Result};
use rocket::{
    fairing::{Fairing, Info, Kind},
    Request, Response,
};
use tracing::{info, Level};

pub fn init(level: Level) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .try_init()
        .map_err(|err| anyhow!("failed to install tracing subscriber: {}", err))
}

/// Emits one event per response with the method, path and status.
pub struct RequestLogger;

#[rocket::async_trait]
impl Fairing for RequestLogger {
    fn info(&self) -> Info {
        Info {
            name: "Request Logger",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, request: &'r Request<'_>, response: &mut Response<'r>) {
        info!(
            method = %request.method(),
            path = %request.uri().path(),
            status = response.status().code,
            "handled request"
        );
    }
}
