use dioxus_logger::tracing::{self, Level};

use fuelwatch::server::{config::Config, scheduler::Scheduler, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    dioxus_logger::init(Level::INFO).expect("failed to init logger");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = startup::build_app_state(&config).unwrap();

    let scheduler = Scheduler::new(state.clone()).await.unwrap();
    tokio::spawn(async move {
        if let Err(e) = scheduler.start().await {
            tracing::error!("Failed to start refresh scheduler: {}", e);
        }
    });

    tracing::info!(
        "Starting server tracking {} system(s) for alliance {}",
        config.tracked_systems.len(),
        config.tracked_alliance_id
    );

    if let Err(e) = startup::serve(&config, state).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
