use anyhow::{Context, Result};
use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, Cors, CorsOptions};

use crate::config::Config;

const ALLOWED_METHODS: [Method; 7] = [
    Method::Get,
    Method::Head,
    Method::Post,
    Method::Put,
    Method::Patch,
    Method::Delete,
    Method::Options,
];

/// Any origin, method and header, with credentials. The request origin is
/// echoed back rather than `*`, which browsers reject alongside credentials.
pub fn fairing(config: &Config) -> Result<Cors> {
    let options = CorsOptions {
        allowed_origins: AllowedOrigins::all(),
        allowed_methods: ALLOWED_METHODS.into_iter().map(From::from).collect(),
        allowed_headers: AllowedHeaders::all(),
        allow_credentials: true,
        send_wildcard: false,
        max_age: config.cors_max_age,
        ..Default::default()
    };

    options.to_cors().context("invalid CORS options")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_with_default_config() {
        assert!(fairing(&Config::default()).is_ok());
    }

    #[test]
    fn builds_with_max_age() {
        let config = Config {
            cors_max_age: Some(3600),
            ..Default::default()
        };

        assert!(fairing(&config).is_ok());
    }
}
