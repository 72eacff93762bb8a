//! models/flight_model.rs
//! Estructuras para la búsqueda de trayectos (rutas + salidas).

use serde::Serialize;
use sqlx::FromRow;

/// Fila cruda del join rutas × salidas × aerolíneas.
#[derive(Debug, Clone, FromRow)]
pub struct RouteScheduleRow {
    pub name: String,
    pub flight: String,
    pub utc: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub equipment: Option<String>,
    pub distance: f64,
}

/// Trayecto que se devuelve al cliente, con los campos derivados
/// (tiempo de vuelo en horas y precio) ya calculados.
#[derive(Debug, Clone, Serialize)]
pub struct FlightPath {
    pub name: String,
    pub flight: String,
    pub utc: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub equipment: Option<String>,
    pub distance: f64,
    pub flighttime: i64,
    pub price: f64,
}
