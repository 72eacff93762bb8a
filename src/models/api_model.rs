//! models/api_model.rs
//! Envoltura común de respuestas del API.

use serde::Serialize;

/// Respuesta estándar: el payload en `data` más las consultas
/// ejecutadas en `context` (útil para debugging desde el browser).
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub context: Vec<String>,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, context: Vec<String>) -> Self {
        ApiResponse { data, context }
    }
}
