use anyhow::Result;
use rocket::{figment::Figment, routes, Build, Rocket};

pub mod catchers;
pub mod config;
pub mod cors;
pub mod logging;
pub mod routes;

pub use config::Config;

pub fn build(figment: Figment, config: Config) -> Result<Rocket<Build>> {
    let cors = cors::fairing(&config)?;

    let rocket = rocket::custom(figment)
        .mount("/", routes![routes::root::root])
        .mount("/api", routes![routes::health::health])
        .register("/", rocket::catchers![catchers::json_error])
        .attach(cors)
        .attach(logging::RequestLogger)
        .manage(config);

    Ok(rocket)
}
