//! models/hotel_model.rs

use serde::Serialize;
use sqlx::FromRow;

/// Fila que devuelve la búsqueda full-text de hoteles.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct HotelInfo {
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}
