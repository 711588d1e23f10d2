use anyhow::Result;
use dotenv::dotenv;
use rentsaathi_api::{logging, Config};
use tracing::info;

#[rocket::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let figment = rocket::Config::figment();
    let config = Config::from_figment(&figment)?;
    logging::init(config.max_level()?)?;

    info!(?config, "starting RentSaathi API");

    let _rocket = rentsaathi_api::build(figment, config)?.launch().await?;

    Ok(())
}
