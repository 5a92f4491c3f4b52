use actix_web::{web, App, HttpServer};
use namevault::config::EnvConfig;
use namevault::crypto::CryptoContext;
use namevault::db::postgres_service::PostgresService;
use namevault::routes::configure_routes;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();
    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);

    let postgres_service = Arc::new(
        PostgresService::new(&config.db_url)
            .await
            .expect("Failed to initialize PostgresService"),
    );

    // Keys live for exactly one process: the symmetric key is generated
    // here and dies with us, the signing secret comes from config.
    let crypto = web::Data::new(CryptoContext::new(&config));
    let config_data = web::Data::new(config);

    println!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&postgres_service)))
            .app_data(crypto.clone())
            .app_data(config_data.clone())
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
