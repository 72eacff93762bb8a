//! models/airport_model.rs

use serde::Serialize;
use sqlx::FromRow;

/// Fila que devuelve la búsqueda de aeropuertos.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AirportInfo {
    pub airportname: String,
    pub faa: Option<String>,
    pub icao: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}
