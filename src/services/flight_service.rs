//! services/flight_service.rs
//! Trayectos entre dos aeropuertos para un día de la semana dado.

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::models::api_model::ApiResponse;
use crate::models::flight_model::{FlightPath, RouteScheduleRow};

/// Velocidad media para estimar el tiempo de vuelo (km/h).
const AVERAGE_SPEED_KMH: f64 = 800.0;
/// Tarifa por kilómetro para el precio estimado.
const PRICE_PER_KM: f64 = 0.1;

const QUERY_FAA: &str = "SELECT faa FROM airports WHERE airportname = ?1";

const QUERY_PATHS: &str = "\
SELECT a.name, s.flight, s.utc, r.sourceairport, r.destinationairport, r.equipment, r.distance
FROM routes r
JOIN airlines a ON a.id = r.airline_id
JOIN schedules s ON s.route_id = r.id
WHERE r.sourceairport = ?1 AND r.destinationairport = ?2 AND s.day = ?3
ORDER BY a.name ASC";

#[derive(Clone, Debug)]
pub struct FlightService {
    db_pool: Pool<Sqlite>,
}

impl FlightService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        FlightService { db_pool }
    }

    /// Resuelve el código FAA de un aeropuerto por su nombre exacto.
    async fn faa_for(&self, airportname: &str) -> Result<Option<String>> {
        let row: Option<(Option<String>,)> = sqlx::query_as(QUERY_FAA)
            .bind(airportname)
            .fetch_optional(&self.db_pool)
            .await
            .context("Fallo al resolver código FAA")?;

        Ok(row.and_then(|r| r.0))
    }

    /// Busca trayectos entre `from` y `to` (nombres de aeropuerto) para un
    /// día de la semana (lunes = 0). Devuelve `None` si alguno de los dos
    /// aeropuertos no existe en el dataset.
    pub async fn find_paths(
        &self,
        from: &str,
        to: &str,
        day: u32,
    ) -> Result<Option<ApiResponse<Vec<FlightPath>>>> {
        let mut context = vec![format!("{} -- param: {} / {}", QUERY_FAA, from, to)];

        let from_faa = match self.faa_for(from).await? {
            Some(faa) => faa,
            None => return Ok(None),
        };
        let to_faa = match self.faa_for(to).await? {
            Some(faa) => faa,
            None => return Ok(None),
        };

        let rows = sqlx::query_as::<_, RouteScheduleRow>(QUERY_PATHS)
            .bind(&from_faa)
            .bind(&to_faa)
            .bind(day as i64)
            .fetch_all(&self.db_pool)
            .await
            .context("Fallo al consultar trayectos")?;

        context.push(format!(
            "{} -- param: {} / {} / dia {}",
            QUERY_PATHS, from_faa, to_faa, day
        ));

        // tiempo de vuelo y precio se derivan de la distancia de la ruta
        let paths = rows
            .into_iter()
            .map(|r| {
                let flighttime = (r.distance / AVERAGE_SPEED_KMH).ceil() as i64;
                let price = (r.distance * PRICE_PER_KM).ceil();
                FlightPath {
                    name: r.name,
                    flight: r.flight,
                    utc: r.utc,
                    sourceairport: r.sourceairport,
                    destinationairport: r.destinationairport,
                    equipment: r.equipment,
                    distance: r.distance,
                    flighttime,
                    price,
                }
            })
            .collect();

        Ok(Some(ApiResponse::new(paths, context)))
    }
}
