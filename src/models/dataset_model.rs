//! models/dataset_model.rs
//! Formato del JSON con el dataset de ejemplo (data/travel-sample.json).

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct SampleGeo {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleAirport {
    pub airportname: String,
    pub faa: Option<String>,
    pub icao: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub tz: Option<String>,
    pub geo: Option<SampleGeo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleAirline {
    pub name: String,
    pub iata: Option<String>,
    pub icao: Option<String>,
    pub callsign: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleSchedule {
    /// Día de la semana, lunes = 0.
    pub day: i64,
    pub flight: String,
    pub utc: String,
}

/// Las rutas referencian a la aerolínea por su código IATA.
#[derive(Debug, Clone, Deserialize)]
pub struct SampleRoute {
    pub airline: String,
    pub sourceairport: String,
    pub destinationairport: String,
    pub equipment: Option<String>,
    pub distance: f64,
    pub schedule: Vec<SampleSchedule>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleHotel {
    pub name: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub price: Option<f64>,
    #[serde(default)]
    pub free_breakfast: bool,
    #[serde(default)]
    pub free_internet: bool,
    #[serde(default)]
    pub free_parking: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SampleDataset {
    pub airports: Vec<SampleAirport>,
    pub airlines: Vec<SampleAirline>,
    pub routes: Vec<SampleRoute>,
    pub hotels: Vec<SampleHotel>,
}
