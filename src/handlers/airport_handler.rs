//! handlers/airport_handler.rs

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::services::airport_service::AirportService;

#[derive(Deserialize)]
pub struct AirportQuery {
    search: String,
}

/// GET /api/airports?search=<texto>
pub async fn search_airports_endpoint(
    airport_service: web::Data<AirportService>,
    query: web::Query<AirportQuery>,
) -> HttpResponse {
    match airport_service.search(&query.search).await {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Internal server error",
            "details": format!("{:?}", e)
        })),
    }
}
