//! tests/common.rs
//! Helpers compartidos: base SQLite en memoria con las migraciones reales
//! y un dataset chico con el mismo formato que data/travel-sample.json.

use anyhow::Result;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite};

use crate::models::dataset_model::SampleDataset;
use crate::services::dataset_service::DatasetService;

/// Pool en memoria con una sola conexión (cada conexión `:memory:`
/// nueva sería una base distinta).
pub async fn test_pool() -> Result<Pool<Sqlite>> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;

    DatasetService::new(pool.clone()).run_migrations().await?;
    Ok(pool)
}

pub fn fixture_dataset() -> SampleDataset {
    serde_json::from_str(FIXTURE_JSON).expect("fixture inválido")
}

/// Pool con migraciones corridas y el fixture ya cargado.
pub async fn seeded_pool() -> Result<Pool<Sqlite>> {
    let pool = test_pool().await?;
    DatasetService::new(pool.clone())
        .seed(&fixture_dataset())
        .await?;
    Ok(pool)
}

pub const FIXTURE_JSON: &str = r#"{
  "airports": [
    { "airportname": "San Francisco Intl", "faa": "SFO", "icao": "KSFO", "city": "San Francisco", "country": "United States", "tz": "America/Los_Angeles", "geo": { "lat": 37.618972, "lon": -122.374889 } },
    { "airportname": "Los Angeles Intl", "faa": "LAX", "icao": "KLAX", "city": "Los Angeles", "country": "United States", "tz": "America/Los_Angeles", "geo": { "lat": 33.942536, "lon": -118.408075 } },
    { "airportname": "Charles De Gaulle", "faa": "CDG", "icao": "LFPG", "city": "Paris", "country": "France", "tz": "Europe/Paris", "geo": { "lat": 49.012779, "lon": 2.55 } },
    { "airportname": "Heathrow", "faa": "LHR", "icao": "EGLL", "city": "London", "country": "United Kingdom", "tz": "Europe/London", "geo": { "lat": 51.4775, "lon": -0.461389 } }
  ],
  "airlines": [
    { "name": "United Airlines", "iata": "UA", "icao": "UAL", "callsign": "UNITED", "country": "United States" },
    { "name": "Air France", "iata": "AF", "icao": "AFR", "callsign": "AIRFRANS", "country": "France" }
  ],
  "routes": [
    {
      "airline": "UA", "sourceairport": "SFO", "destinationairport": "LAX", "equipment": "738", "distance": 543.0,
      "schedule": [
        { "day": 0, "flight": "UA100", "utc": "07:30:00" },
        { "day": 0, "flight": "UA104", "utc": "13:10:00" },
        { "day": 2, "flight": "UA102", "utc": "09:45:00" }
      ]
    },
    {
      "airline": "AF", "sourceairport": "CDG", "destinationairport": "LHR", "equipment": "319", "distance": 348.0,
      "schedule": [
        { "day": 0, "flight": "AF010", "utc": "10:00:00" }
      ]
    }
  ],
  "hotels": [
    {
      "name": "Hotel Drisco", "title": "Pacific Heights boutique",
      "description": "A swanky boutique hotel perched in Pacific Heights with sweeping bay views.",
      "address": "2901 Pacific Ave", "city": "San Francisco", "state": "California", "country": "United States",
      "price": 289.0, "free_breakfast": true, "free_internet": true, "free_parking": false
    },
    {
      "name": "Sunset Budget Lodge", "title": "Cheap and cheerful",
      "description": "A budget option near Ocean Beach, plain rooms but unbeatable rates.",
      "address": "3655 Lincoln Way", "city": "San Francisco", "state": "California", "country": "United States",
      "price": 95.0, "free_breakfast": false, "free_internet": true, "free_parking": true
    },
    {
      "name": "Le Marais Charm", "title": "Boutique in the Marais",
      "description": "A swanky boutique hideaway on a quiet courtyard in the Marais district.",
      "address": "12 Rue des Archives", "city": "Paris", "state": null, "country": "France",
      "price": 310.0, "free_breakfast": false, "free_internet": true, "free_parking": false
    }
  ]
}"#;
