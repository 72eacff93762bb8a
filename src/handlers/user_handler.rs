//! handlers/user_handler.rs
//! Registro, login y reservas. Las rutas de reservas exigen Bearer token.

use actix_web::{web, HttpRequest, HttpResponse};

use crate::models::user_model::{AuthRequest, BookFlightsRequest};
use crate::services::user_service::UserService;

/// Saca el token del header `Authorization: Bearer <token>`.
fn bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "No autorizado",
        "details": "Falta un Bearer token válido para ese usuario"
    }))
}

fn internal_error(e: anyhow::Error) -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "error": "Internal server error",
        "details": format!("{:?}", e)
    }))
}

/// POST /api/user/signup
pub async fn signup_endpoint(
    user_service: web::Data<UserService>,
    body: web::Json<AuthRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    if req.user.trim().is_empty() || req.password.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "Solicitud inválida",
            "details": "user y password no pueden venir vacíos"
        }));
    }

    match user_service.create_user(req.user.trim(), &req.password).await {
        Ok(Some(resp)) => HttpResponse::Created().json(resp),
        Ok(None) => HttpResponse::Conflict().json(serde_json::json!({
            "error": "Usuario ya existe",
            "details": format!("ya hay una cuenta con el nombre {}", req.user.trim())
        })),
        Err(e) => internal_error(e),
    }
}

/// POST /api/user/login
pub async fn login_endpoint(
    user_service: web::Data<UserService>,
    body: web::Json<AuthRequest>,
) -> HttpResponse {
    let req = body.into_inner();

    match user_service.login(req.user.trim(), &req.password).await {
        Ok(Some(resp)) => HttpResponse::Ok().json(resp),
        // usuario inexistente y contraseña mala responden igual
        Ok(None) => HttpResponse::Unauthorized().json(serde_json::json!({
            "error": "Credenciales inválidas",
            "details": "usuario o contraseña incorrectos"
        })),
        Err(e) => internal_error(e),
    }
}

/// GET /api/user/{username}/flights
pub async fn get_flights_endpoint(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    req: HttpRequest,
) -> HttpResponse {
    let username = path.into_inner();

    let token = match bearer_token(&req) {
        Some(token) => token,
        None => return unauthorized(),
    };
    match user_service.authorize(&token, &username).await {
        Ok(true) => {}
        Ok(false) => return unauthorized(),
        Err(e) => return internal_error(e),
    }

    match user_service.get_flights(&username).await {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => internal_error(e),
    }
}

/// PUT /api/user/{username}/flights
pub async fn book_flights_endpoint(
    user_service: web::Data<UserService>,
    path: web::Path<String>,
    body: web::Json<BookFlightsRequest>,
    req: HttpRequest,
) -> HttpResponse {
    let username = path.into_inner();

    let token = match bearer_token(&req) {
        Some(token) => token,
        None => return unauthorized(),
    };
    match user_service.authorize(&token, &username).await {
        Ok(true) => {}
        Ok(false) => return unauthorized(),
        Err(e) => return internal_error(e),
    }

    match user_service
        .book_flights(&username, body.into_inner().flights)
        .await
    {
        Ok(resp) => HttpResponse::Ok().json(resp),
        Err(e) => internal_error(e),
    }
}
