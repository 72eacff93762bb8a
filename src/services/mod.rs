//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod airport_service;
pub mod dataset_service;
pub mod flight_service;
pub mod hotel_service;
pub mod user_service;
