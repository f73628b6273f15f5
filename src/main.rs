use actix_web::{middleware::Logger, App, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

use grub_orders::{config::AppConfig, routes, state::AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    SubscriberBuilder::default()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    let seed = config.load_seed().map_err(|e| {
        tracing::error!(err = %e, "failed to load seed data");
        std::io::Error::new(std::io::ErrorKind::InvalidData, e)
    })?;
    tracing::info!(
        addr = %config.server_addr,
        dishes = seed.dishes.len(),
        orders = seed.orders.len(),
        "starting server"
    );

    let state = AppState::in_memory(seed);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(state.clone())
            .configure(routes::config)
    })
    .bind(&config.server_addr)?
    .run()
    .await
}
