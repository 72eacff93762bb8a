//! models/user_model.rs
//! Estructuras de registro/login y de reservas de vuelos.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cuerpo de POST /api/user/signup y /api/user/login.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthRequest {
    pub user: String,
    pub password: String,
}

/// Token de sesión que se devuelve al registrarse o iniciar sesión.
#[derive(Debug, Clone, Serialize)]
pub struct TokenData {
    pub token: String,
}

/// Un vuelo tal como lo manda el cliente al reservar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookedFlight {
    pub name: String,
    pub flight: String,
    // fecha de viaje, no de reserva
    pub date: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub utc: String,
    pub price: f64,
}

/// Cuerpo de PUT /api/user/{username}/flights.
#[derive(Debug, Clone, Deserialize)]
pub struct BookFlightsRequest {
    pub flights: Vec<BookedFlight>,
}

/// Reserva ya persistida, con id y sello `bookedon`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FlightBookingRecord {
    pub id: String,
    pub name: String,
    pub flight: String,
    pub date: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub utc: String,
    pub price: f64,
    pub bookedon: String,
}
