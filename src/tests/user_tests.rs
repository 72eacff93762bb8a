//! tests/user_tests.rs
//! Pruebas de registro, login, sesiones y reservas.

#[cfg(test)]
mod tests {
    use actix_rt::test;

    use crate::models::user_model::BookedFlight;
    use crate::services::user_service::UserService;
    use crate::tests::common::test_pool;

    fn sample_flight(flight: &str) -> BookedFlight {
        BookedFlight {
            name: "United Airlines".to_string(),
            flight: flight.to_string(),
            date: "05/12/2025".to_string(),
            sourceairport: "SFO".to_string(),
            destinationairport: "LAX".to_string(),
            utc: "07:30:00".to_string(),
            price: 55.0,
        }
    }

    #[test]
    async fn test_signup_then_login() {
        let pool = test_pool().await.expect("pool");
        let service = UserService::new(pool, 24);

        let signup = service
            .create_user("ana", "secreto123")
            .await
            .expect("create_user")
            .expect("usuario nuevo");
        assert!(!signup.data.token.is_empty());

        let login = service
            .login("ana", "secreto123")
            .await
            .expect("login")
            .expect("credenciales válidas");
        // cada login abre una sesión nueva
        assert_ne!(login.data.token, signup.data.token);
    }

    #[test]
    async fn test_duplicate_signup_is_rejected() {
        let pool = test_pool().await.expect("pool");
        let service = UserService::new(pool, 24);

        service
            .create_user("ana", "secreto123")
            .await
            .expect("create_user");
        let again = service
            .create_user("ana", "otra-clave")
            .await
            .expect("create_user");
        assert!(again.is_none());
    }

    #[test]
    async fn test_wrong_password_and_unknown_user_look_the_same() {
        let pool = test_pool().await.expect("pool");
        let service = UserService::new(pool, 24);

        service
            .create_user("ana", "secreto123")
            .await
            .expect("create_user");

        let bad_password = service.login("ana", "nope").await.expect("login");
        let unknown_user = service.login("benito", "nope").await.expect("login");
        assert!(bad_password.is_none());
        assert!(unknown_user.is_none());
    }

    #[test]
    async fn test_authorize_checks_owner_and_token() {
        let pool = test_pool().await.expect("pool");
        let service = UserService::new(pool, 24);

        let token = service
            .create_user("ana", "secreto123")
            .await
            .expect("create_user")
            .expect("usuario nuevo")
            .data
            .token;

        assert!(service.authorize(&token, "ana").await.expect("authorize"));
        assert!(!service.authorize(&token, "benito").await.expect("authorize"));
        assert!(!service
            .authorize("token-inventado", "ana")
            .await
            .expect("authorize"));
    }

    #[test]
    async fn test_expired_session_is_rejected() {
        let pool = test_pool().await.expect("pool");
        // sesiones de cero horas: expiran en el acto
        let service = UserService::new(pool, 0);

        let token = service
            .create_user("ana", "secreto123")
            .await
            .expect("create_user")
            .expect("usuario nuevo")
            .data
            .token;

        assert!(!service.authorize(&token, "ana").await.expect("authorize"));
    }

    #[test]
    async fn test_bookings_round_trip() {
        let pool = test_pool().await.expect("pool");
        let service = UserService::new(pool, 24);

        service
            .create_user("ana", "secreto123")
            .await
            .expect("create_user");

        let empty = service.get_flights("ana").await.expect("get_flights");
        assert!(empty.data.is_empty());

        let added = service
            .book_flights("ana", vec![sample_flight("UA100"), sample_flight("UA104")])
            .await
            .expect("book_flights");
        assert_eq!(added.data.len(), 2);
        for booking in &added.data {
            assert!(!booking.id.is_empty());
            assert!(!booking.bookedon.is_empty());
        }

        let listed = service.get_flights("ana").await.expect("get_flights");
        assert_eq!(listed.data.len(), 2);
        let flights: Vec<&str> = listed.data.iter().map(|b| b.flight.as_str()).collect();
        assert!(flights.contains(&"UA100"));
        assert!(flights.contains(&"UA104"));

        // las reservas no se mezclan entre usuarios
        service
            .create_user("benito", "secreto123")
            .await
            .expect("create_user");
        let other = service.get_flights("benito").await.expect("get_flights");
        assert!(other.data.is_empty());
    }
}
