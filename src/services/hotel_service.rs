//! services/hotel_service.rs
//! Búsqueda full-text de hoteles sobre el índice FTS5.

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::models::api_model::ApiResponse;
use crate::models::hotel_model::HotelInfo;

/// Columnas contra las que se busca la descripción.
const DESCRIPTION_COLUMNS: &[&str] = &["name", "title", "description"];
/// Columnas contra las que se busca la ubicación.
const LOCATION_COLUMNS: &[&str] = &["address", "city", "state", "country"];

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 100;

const QUERY_FTS: &str = "\
SELECT h.name, h.title, h.description, h.address, h.city, h.state, h.country
FROM hotels_fts
JOIN hotels h ON h.id = hotels_fts.rowid
WHERE hotels_fts MATCH ?1
ORDER BY rank
LIMIT ?2 OFFSET ?3";

const QUERY_ALL: &str = "\
SELECT name, title, description, address, city, state, country
FROM hotels
ORDER BY name ASC
LIMIT ?1 OFFSET ?2";

/// `*` (o vacío) significa "sin restricción" en esa dimensión.
fn is_wildcard(term: &str) -> bool {
    let t = term.trim();
    t.is_empty() || t == "*"
}

/// Frase citada para FTS5; las comillas internas se duplican.
fn quoted_phrase(term: &str) -> String {
    format!("\"{}\"", term.replace('"', "\"\""))
}

/// Disyunción de matches por columna: `(name: "x" OR title: "x" ...)`.
fn column_disjunction(columns: &[&str], term: &str) -> String {
    let phrase = quoted_phrase(term);
    let parts: Vec<String> = columns
        .iter()
        .map(|col| format!("{}: {}", col, phrase))
        .collect();

    format!("({})", parts.join(" OR "))
}

#[derive(Clone, Debug)]
pub struct HotelService {
    db_pool: Pool<Sqlite>,
}

impl HotelService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        HotelService { db_pool }
    }

    /// Busca hoteles por descripción y/o ubicación. Cada dimensión
    /// restringida se vuelve una disyunción de frases por columna y las
    /// dimensiones se combinan con AND; si ambas vienen como comodín se
    /// listan todos los hoteles. El orden es por relevancia (BM25).
    pub async fn search(
        &self,
        description: &str,
        location: &str,
        limit: Option<i64>,
        skip: Option<i64>,
    ) -> Result<ApiResponse<Vec<HotelInfo>>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let skip = skip.unwrap_or(0).max(0);

        let mut clauses = Vec::new();
        if !is_wildcard(description) {
            clauses.push(column_disjunction(DESCRIPTION_COLUMNS, description.trim()));
        }
        if !is_wildcard(location) {
            clauses.push(column_disjunction(LOCATION_COLUMNS, location.trim()));
        }

        if clauses.is_empty() {
            // equivalente a un match-all: no hay nada que pasarle al índice
            let rows = sqlx::query_as::<_, HotelInfo>(QUERY_ALL)
                .bind(limit)
                .bind(skip)
                .fetch_all(&self.db_pool)
                .await
                .context("Fallo al listar hoteles")?;

            let context = vec![format!("{} -- match-all", QUERY_ALL)];
            return Ok(ApiResponse::new(rows, context));
        }

        let match_expr = clauses.join(" AND ");

        let rows = sqlx::query_as::<_, HotelInfo>(QUERY_FTS)
            .bind(&match_expr)
            .bind(limit)
            .bind(skip)
            .fetch_all(&self.db_pool)
            .await
            .context("Fallo en la búsqueda full-text de hoteles")?;

        let context = vec![format!("hotels_fts MATCH {}", match_expr)];
        Ok(ApiResponse::new(rows, context))
    }
}
