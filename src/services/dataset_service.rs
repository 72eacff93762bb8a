//! services/dataset_service.rs
//! Migraciones de esquema y carga del dataset de ejemplo.

use std::path::Path;

use anyhow::{Context, Result};
use sqlx::{Pool, Sqlite};

use crate::models::dataset_model::SampleDataset;

#[derive(Clone, Debug)]
pub struct DatasetService {
    db_pool: Pool<Sqlite>,
}

impl DatasetService {
    pub fn new(db_pool: Pool<Sqlite>) -> Self {
        DatasetService { db_pool }
    }

    /// Corre migraciones con sqlx
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.db_pool)
            .await
            .context("Fallo al correr migraciones")?;
        Ok(())
    }

    /// Carga el dataset desde `dataset_path` solo si la base está vacía.
    /// Si el archivo no existe el API arranca con las tablas vacías.
    pub async fn seed_if_empty(&self, dataset_path: &str) -> Result<()> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM airports")
            .fetch_one(&self.db_pool)
            .await
            .context("Fallo al contar aeropuertos")?;

        if count.0 > 0 {
            log::info!("Dataset ya cargado ({} aeropuertos)", count.0);
            return Ok(());
        }

        if !Path::new(dataset_path).exists() {
            log::warn!("No existe el dataset {}; el API arranca vacío", dataset_path);
            return Ok(());
        }

        let raw = std::fs::read_to_string(dataset_path)
            .with_context(|| format!("No se pudo leer {}", dataset_path))?;
        let dataset: SampleDataset =
            serde_json::from_str(&raw).context("JSON del dataset inválido")?;

        self.seed(&dataset).await
    }

    /// Inserta todo el dataset dentro de una transacción.
    pub async fn seed(&self, dataset: &SampleDataset) -> Result<()> {
        let mut tx = self.db_pool.begin().await?;

        for airport in &dataset.airports {
            sqlx::query(
                r#"
                INSERT INTO airports (airportname, faa, icao, city, country, tz, lat, lon)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
            )
            .bind(&airport.airportname)
            .bind(&airport.faa)
            .bind(&airport.icao)
            .bind(&airport.city)
            .bind(&airport.country)
            .bind(&airport.tz)
            .bind(airport.geo.as_ref().map(|g| g.lat))
            .bind(airport.geo.as_ref().map(|g| g.lon))
            .execute(&mut *tx)
            .await
            .context("Fallo al insertar aeropuerto")?;
        }

        for airline in &dataset.airlines {
            sqlx::query(
                r#"
                INSERT INTO airlines (name, iata, icao, callsign, country)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(&airline.name)
            .bind(&airline.iata)
            .bind(&airline.icao)
            .bind(&airline.callsign)
            .bind(&airline.country)
            .execute(&mut *tx)
            .await
            .context("Fallo al insertar aerolínea")?;
        }

        for route in &dataset.routes {
            // las rutas del JSON referencian la aerolínea por IATA
            let airline_id: (i64,) = sqlx::query_as("SELECT id FROM airlines WHERE iata = ?1")
                .bind(&route.airline)
                .fetch_one(&mut *tx)
                .await
                .with_context(|| format!("Ruta con aerolínea desconocida: {}", route.airline))?;

            let inserted = sqlx::query(
                r#"
                INSERT INTO routes (airline_id, sourceairport, destinationairport, equipment, distance)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(airline_id.0)
            .bind(&route.sourceairport)
            .bind(&route.destinationairport)
            .bind(&route.equipment)
            .bind(route.distance)
            .execute(&mut *tx)
            .await
            .context("Fallo al insertar ruta")?;

            let route_id = inserted.last_insert_rowid();

            for schedule in &route.schedule {
                sqlx::query(
                    r#"
                    INSERT INTO schedules (route_id, day, flight, utc)
                    VALUES (?1, ?2, ?3, ?4)
                    "#,
                )
                .bind(route_id)
                .bind(schedule.day)
                .bind(&schedule.flight)
                .bind(&schedule.utc)
                .execute(&mut *tx)
                .await
                .context("Fallo al insertar salida")?;
            }
        }

        for hotel in &dataset.hotels {
            sqlx::query(
                r#"
                INSERT INTO hotels (
                    name, title, description, address, city, state, country,
                    price, free_breakfast, free_internet, free_parking
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)
                "#,
            )
            .bind(&hotel.name)
            .bind(&hotel.title)
            .bind(&hotel.description)
            .bind(&hotel.address)
            .bind(&hotel.city)
            .bind(&hotel.state)
            .bind(&hotel.country)
            .bind(hotel.price)
            .bind(hotel.free_breakfast)
            .bind(hotel.free_internet)
            .bind(hotel.free_parking)
            .execute(&mut *tx)
            .await
            .context("Fallo al insertar hotel")?;
        }

        tx.commit().await.context("Fallo al confirmar el seed")?;

        log::info!(
            "Dataset cargado: {} aeropuertos, {} aerolíneas, {} rutas, {} hoteles",
            dataset.airports.len(),
            dataset.airlines.len(),
            dataset.routes.len(),
            dataset.hotels.len()
        );

        Ok(())
    }
}
