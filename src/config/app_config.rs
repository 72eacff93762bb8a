//! config/app_config.rs
//! Configuración global del servicio: flags de CLI con fallback a variables
//! de entorno (el .env se carga en main antes de parsear).

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "travel-service", about = "API de ejemplo sobre el dataset de viajes")]
pub struct AppConfig {
    /// Cadena de conexión a la base SQLite.
    #[arg(
        short = 'c',
        long = "connection",
        env = "TRAVEL_DB_URL",
        default_value = "sqlite:data/travel-sample.db"
    )]
    pub connection: String,

    /// Dirección en la que escucha el servidor.
    #[arg(short = 'b', long, env = "TRAVEL_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Puerto HTTP.
    #[arg(short = 'p', long, env = "TRAVEL_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Ruta del JSON con el dataset de ejemplo (se carga si la base está vacía).
    #[arg(long, env = "TRAVEL_DATASET", default_value = "data/travel-sample.json")]
    pub dataset: String,

    /// Horas de vida de una sesión.
    #[arg(long, env = "TRAVEL_SESSION_HOURS", default_value_t = 24)]
    pub session_hours: i64,
}
