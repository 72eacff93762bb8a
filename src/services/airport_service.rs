//! services/airport_service.rs
//! Búsqueda de aeropuertos por código FAA, ICAO o nombre.

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::models::airport_model::AirportInfo;
use crate::models::api_model::ApiResponse;

const QUERY_BY_FAA: &str =
    "SELECT airportname, faa, icao, city, country FROM airports WHERE faa = ?1";
const QUERY_BY_ICAO: &str =
    "SELECT airportname, faa, icao, city, country FROM airports WHERE icao = ?1";
const QUERY_BY_NAME: &str =
    "SELECT airportname, faa, icao, city, country FROM airports WHERE LOWER(airportname) LIKE ?1";

/// `true` si el texto viene todo en mayúsculas o todo en minúsculas.
/// Un código escrito a medias ("SFo") se trata como fragmento de nombre.
fn uniform_case(s: &str) -> bool {
    s == s.to_uppercase() || s == s.to_lowercase()
}

#[derive(Clone, Debug)]
pub struct AirportService {
    db_pool: Pool<Sqlite>,
}

impl AirportService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        AirportService { db_pool }
    }

    /// Clasifica el texto por largo y caja, arma la consulta y la ejecuta:
    /// - 3 caracteres en caja uniforme -> por código FAA
    /// - 4 caracteres en caja uniforme -> por código ICAO
    /// - cualquier otra cosa -> substring case-insensitive sobre el nombre
    ///
    /// La consulta usada viaja en `context` para debugging.
    pub async fn search(&self, search: &str) -> Result<ApiResponse<Vec<AirportInfo>>> {
        let term = search.trim();

        let (query, param) = if term.len() == 3 && uniform_case(term) {
            (QUERY_BY_FAA, term.to_uppercase())
        } else if term.len() == 4 && uniform_case(term) {
            (QUERY_BY_ICAO, term.to_uppercase())
        } else {
            (QUERY_BY_NAME, format!("%{}%", term.to_lowercase()))
        };

        let rows = sqlx::query_as::<_, AirportInfo>(query)
            .bind(&param)
            .fetch_all(&self.db_pool)
            .await
            .context("Fallo al consultar aeropuertos")?;

        let context = vec![format!("{} -- param: {}", query, param)];
        Ok(ApiResponse::new(rows, context))
    }
}
