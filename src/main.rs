use actix_web::{web, App, HttpServer};
use clap::Parser;
use dotenv::dotenv;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::airport_service::AirportService;
use crate::services::dataset_service::DatasetService;
use crate::services::flight_service::FlightService;
use crate::services::hotel_service::HotelService;
use crate::services::user_service::UserService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

async fn setup_database(config: &AppConfig) -> Pool<Sqlite> {
    // 1) La base por defecto vive en ./data
    std::fs::create_dir_all("data").expect("No se pudo crear directorio 'data'");

    log::info!("Conectando a SQLite en {}", config.connection);

    // 2) Conectarnos con SQLx (creando el archivo si no existe)
    let options = SqliteConnectOptions::from_str(&config.connection)
        .expect("Cadena de conexión inválida")
        .create_if_missing(true);

    Pool::<Sqlite>::connect_with(options)
        .await
        .expect("No se pudo conectar a la base de datos SQLite.")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    let config = AppConfig::parse();

    let db_pool = setup_database(&config).await;

    // Migraciones + carga del dataset de ejemplo si la base está vacía
    let dataset_service = DatasetService::new(db_pool.clone());
    if let Err(e) = dataset_service.run_migrations().await {
        panic!("Fallo en migraciones: {:?}", e);
    }
    if let Err(e) = dataset_service.seed_if_empty(&config.dataset).await {
        panic!("Fallo al cargar el dataset: {:?}", e);
    }

    let airport_service = AirportService::new(db_pool.clone());
    let flight_service = FlightService::new(db_pool.clone());
    let hotel_service = HotelService::new(db_pool.clone());
    let user_service = UserService::new(db_pool.clone(), config.session_hours);

    // Levantar servidor
    log::info!("Levantando servidor en {}:{}", config.bind, config.port);
    let bind_addr = (config.bind.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(airport_service.clone()))
            .app_data(web::Data::new(flight_service.clone()))
            .app_data(web::Data::new(hotel_service.clone()))
            .app_data(web::Data::new(user_service.clone()))
            .configure(app::init_app)
    })
    .bind(bind_addr)?
    .run()
    .await
}
