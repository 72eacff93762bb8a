//! handlers/hotel_handler.rs
//! Endpoints de búsqueda full-text de hoteles.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::services::hotel_service::HotelService;

#[derive(Deserialize)]
pub struct HotelQuery {
    limit: Option<i64>,
    skip: Option<i64>,
}

/// GET /api/hotels/{description}
/// Solo descripción; la ubicación queda sin restricción.
pub async fn search_hotels_by_description_endpoint(
    hotel_service: web::Data<HotelService>,
    path: web::Path<String>,
    query: web::Query<HotelQuery>,
) -> HttpResponse {
    let description = path.into_inner();
    run_search(&hotel_service, &description, "*", &query).await
}

/// GET /api/hotels/{description}/{location}
/// `*` en cualquiera de los dos segmentos significa "sin restricción".
pub async fn search_hotels_endpoint(
    hotel_service: web::Data<HotelService>,
    path: web::Path<(String, String)>,
    query: web::Query<HotelQuery>,
) -> HttpResponse {
    let (description, location) = path.into_inner();
    run_search(&hotel_service, &description, &location, &query).await
}

async fn run_search(
    hotel_service: &HotelService,
    description: &str,
    location: &str,
    query: &HotelQuery,
) -> HttpResponse {
    match hotel_service
        .search(description, location, query.limit, query.skip)
        .await
    {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": "Internal server error",
            "details": format!("{:?}", e)
        })),
    }
}
