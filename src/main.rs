mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod util;

use crate::{config::Config, error::AppError, scheduler::autoclose};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let (bot_client, discord_http) = bot::start::init_bot(&config, db.clone()).await?;

    // Start autoclose warning scheduler
    let scheduler_db = db.clone();
    tokio::spawn(async move {
        if let Err(e) = autoclose::start_scheduler(scheduler_db, discord_http).await {
            tracing::error!("Autoclose scheduler error: {}", e);
        }
    });

    tracing::info!("Starting bot");

    bot::start::start_bot(bot_client).await
}
