//! app.rs
use crate::handlers::{airport_handler, flight_handler, hotel_handler, user_handler};
use actix_files::Files;
use actix_web::web;

pub fn init_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/airports")
                    .route("", web::get().to(airport_handler::search_airports_endpoint)),
            )
            .service(web::scope("/flightPaths").route(
                "/{from}/{to}",
                web::get().to(flight_handler::find_flight_paths_endpoint),
            ))
            .service(
                web::scope("/hotels")
                    .route(
                        "/{description}",
                        web::get().to(hotel_handler::search_hotels_by_description_endpoint),
                    )
                    .route(
                        "/{description}/{location}",
                        web::get().to(hotel_handler::search_hotels_endpoint),
                    ),
            )
            .service(
                web::scope("/user")
                    .route("/signup", web::post().to(user_handler::signup_endpoint))
                    .route("/login", web::post().to(user_handler::login_endpoint))
                    .route(
                        "/{username}/flights",
                        web::get().to(user_handler::get_flights_endpoint),
                    )
                    .route(
                        "/{username}/flights",
                        web::put().to(user_handler::book_flights_endpoint),
                    ),
            ),
    )
    // UI estática (landing page) en la raíz
    .service(Files::new("/", "./static").index_file("index.html"));
}
