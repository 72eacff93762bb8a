//! handlers/flight_handler.rs
//! Endpoint de trayectos entre aeropuertos.

use actix_web::{web, HttpResponse};
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::services::flight_service::FlightService;

#[derive(Deserialize)]
pub struct FlightQuery {
    /// Fecha de viaje, formato MM/DD/YYYY.
    leave: String,
}

/// GET /api/flightPaths/{from}/{to}?leave=MM/DD/YYYY
pub async fn find_flight_paths_endpoint(
    flight_service: web::Data<FlightService>,
    path: web::Path<(String, String)>,
    query: web::Query<FlightQuery>,
) -> HttpResponse {
    let (from, to) = path.into_inner();

    // el día de semana de la fecha decide qué salidas aplican (lunes = 0)
    let leave = match NaiveDate::parse_from_str(&query.leave, "%m/%d/%Y") {
        Ok(date) => date,
        Err(_) => {
            return HttpResponse::BadRequest().json(serde_json::json!({
                "error": "Fecha inválida",
                "details": format!("leave debe ser MM/DD/YYYY, vino: {}", query.leave)
            }))
        }
    };
    let day = leave.weekday().num_days_from_monday();

    match flight_service.find_paths(&from, &to, day).await {
        Ok(Some(resp)) => HttpResponse::Ok().json(resp),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": "Aeropuerto desconocido",
            "details": format!("{} o {} no está en el dataset", from, to)
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Internal server error",
            "details": format!("{:?}", e)
        })),
    }
}
