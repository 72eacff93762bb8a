//! services/user_service.rs
//! Registro, login, sesiones y reservas de vuelos.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use sqlx::{Pool, Sqlite};
use uuid::Uuid;

use crate::models::api_model::ApiResponse;
use crate::models::user_model::{BookedFlight, FlightBookingRecord, TokenData};

/// Hash de contraseña: SHA-256 sobre salt + contraseña, en hex.
fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

#[derive(Clone, Debug)]
pub struct UserService {
    db_pool: Pool<Sqlite>,
    session_hours: i64,
}

impl UserService {
    pub fn new(db_pool: Pool<Sqlite>, session_hours: i64) -> Self {
        UserService {
            db_pool,
            session_hours,
        }
    }

    /// Crea el usuario y abre una sesión. `None` si el usuario ya existe.
    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<ApiResponse<TokenData>>> {
        let existing = sqlx::query("SELECT username FROM users WHERE username = ?1")
            .bind(username)
            .fetch_optional(&self.db_pool)
            .await
            .context("Fallo al verificar si el usuario existe")?;

        if existing.is_some() {
            return Ok(None);
        }

        let salt = Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO users (username, password_hash, salt, created_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(username)
        .bind(hash_password(&salt, password))
        .bind(&salt)
        .bind(&now)
        .execute(&self.db_pool)
        .await
        .context("Fallo al insertar usuario")?;

        log::info!("Usuario registrado: {}", username);

        let token = self.open_session(username).await?;
        Ok(Some(ApiResponse::new(TokenData { token }, vec![])))
    }

    /// Valida credenciales y abre una sesión nueva.
    /// `None` si el usuario no existe o la contraseña no coincide.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<ApiResponse<TokenData>>> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT password_hash, salt FROM users WHERE username = ?1")
                .bind(username)
                .fetch_optional(&self.db_pool)
                .await
                .context("Fallo al consultar usuario")?;

        let (stored_hash, salt) = match row {
            Some(r) => r,
            None => return Ok(None),
        };

        if hash_password(&salt, password) != stored_hash {
            return Ok(None);
        }

        let token = self.open_session(username).await?;
        Ok(Some(ApiResponse::new(TokenData { token }, vec![])))
    }

    async fn open_session(&self, username: &str) -> Result<String> {
        let token = Uuid::new_v4().to_string();
        let now = Utc::now();
        let expires = now + Duration::hours(self.session_hours);

        sqlx::query(
            r#"
            INSERT INTO sessions (token, username, created_at, expires_at)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&token)
        .bind(username)
        .bind(now.to_rfc3339())
        .bind(expires.to_rfc3339())
        .execute(&self.db_pool)
        .await
        .context("Fallo al abrir sesión")?;

        Ok(token)
    }

    /// `true` solo si el token existe, pertenece a `username` y no expiró.
    pub async fn authorize(&self, token: &str, username: &str) -> Result<bool> {
        let row: Option<(String, String)> =
            sqlx::query_as("SELECT username, expires_at FROM sessions WHERE token = ?1")
                .bind(token)
                .fetch_optional(&self.db_pool)
                .await
                .context("Fallo al consultar sesión")?;

        let (owner, expires_at) = match row {
            Some(r) => r,
            None => return Ok(false),
        };

        if owner != username {
            return Ok(false);
        }

        let expires: DateTime<Utc> = expires_at
            .parse()
            .context("expires_at inválido en la sesión")?;

        Ok(Utc::now() < expires)
    }

    /// Reservas del usuario, la más reciente primero.
    pub async fn get_flights(
        &self,
        username: &str,
    ) -> Result<ApiResponse<Vec<FlightBookingRecord>>> {
        let rows = sqlx::query_as::<_, FlightBookingRecord>(
            r#"
            SELECT id, name, flight, date, sourceairport, destinationairport,
                   utc, price, bookedon
            FROM bookings
            WHERE username = ?1
            ORDER BY bookedon DESC
            "#,
        )
        .bind(username)
        .fetch_all(&self.db_pool)
        .await
        .context("Fallo al listar reservas")?;

        Ok(ApiResponse::new(rows, vec![]))
    }

    /// Inserta cada vuelo como una reserva sellada con `bookedon`.
    pub async fn book_flights(
        &self,
        username: &str,
        flights: Vec<BookedFlight>,
    ) -> Result<ApiResponse<Vec<FlightBookingRecord>>> {
        let mut added = Vec::with_capacity(flights.len());

        for flight in flights {
            let id = Uuid::new_v4().to_string();
            let bookedon = Utc::now().to_rfc3339();

            sqlx::query(
                r#"
                INSERT INTO bookings (
                    id, username, name, flight, date,
                    sourceairport, destinationairport, utc, price, bookedon
                )
                VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
                "#,
            )
            .bind(&id)
            .bind(username)
            .bind(&flight.name)
            .bind(&flight.flight)
            .bind(&flight.date)
            .bind(&flight.sourceairport)
            .bind(&flight.destinationairport)
            .bind(&flight.utc)
            .bind(flight.price)
            .bind(&bookedon)
            .execute(&self.db_pool)
            .await
            .context("Fallo al insertar reserva")?;

            added.push(FlightBookingRecord {
                id,
                name: flight.name,
                flight: flight.flight,
                date: flight.date,
                sourceairport: flight.sourceairport,
                destinationairport: flight.destinationairport,
                utc: flight.utc,
                price: flight.price,
                bookedon,
            });
        }

        log::info!("{} reserva(s) nuevas para {}", added.len(), username);

        Ok(ApiResponse::new(added, vec![]))
    }
}
