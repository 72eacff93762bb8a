//! tests/airport_tests.rs
//! Pruebas del despacho por forma del texto (FAA / ICAO / nombre).

#[cfg(test)]
mod tests {
    use actix_rt::test;

    use crate::services::airport_service::AirportService;
    use crate::tests::common::seeded_pool;

    #[test]
    async fn test_three_letter_uppercase_selects_by_faa() {
        let pool = seeded_pool().await.expect("pool");
        let service = AirportService::new(pool);

        let resp = service.search("SFO").await.expect("search");
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].airportname, "San Francisco Intl");
        assert!(resp.context[0].contains("WHERE faa"), "{:?}", resp.context);
    }

    #[test]
    async fn test_three_letter_lowercase_selects_by_faa() {
        let pool = seeded_pool().await.expect("pool");
        let service = AirportService::new(pool);

        // minúsculas uniformes: se normaliza a SFO antes de consultar
        let resp = service.search("sfo").await.expect("search");
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].faa.as_deref(), Some("SFO"));
        assert!(resp.context[0].contains("WHERE faa"));
        assert!(resp.context[0].contains("SFO"));
    }

    #[test]
    async fn test_four_letter_uniform_case_selects_by_icao() {
        let pool = seeded_pool().await.expect("pool");
        let service = AirportService::new(pool);

        let resp = service.search("ksfo").await.expect("search");
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].icao.as_deref(), Some("KSFO"));
        assert!(resp.context[0].contains("WHERE icao"));
    }

    #[test]
    async fn test_mixed_case_code_falls_back_to_name_match() {
        let pool = seeded_pool().await.expect("pool");
        let service = AirportService::new(pool);

        // caja mezclada: deja de ser código y pasa a substring de nombre
        let resp = service.search("SFo").await.expect("search");
        assert!(resp.data.is_empty());
        assert!(resp.context[0].contains("LIKE"));

        let resp = service.search("KsFo").await.expect("search");
        assert!(resp.data.is_empty());
        assert!(resp.context[0].contains("LIKE"));
    }

    #[test]
    async fn test_name_substring_is_case_insensitive() {
        let pool = seeded_pool().await.expect("pool");
        let service = AirportService::new(pool);

        let resp = service.search("francisco").await.expect("search");
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].airportname, "San Francisco Intl");

        // largo != 3 y != 4: va por nombre aunque la caja sea uniforme
        let resp = service.search("FRANCISCO").await.expect("search");
        assert_eq!(resp.data.len(), 1);

        let resp = service.search("Gaulle").await.expect("search");
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].faa.as_deref(), Some("CDG"));
    }

    #[test]
    async fn test_no_match_returns_empty_data() {
        let pool = seeded_pool().await.expect("pool");
        let service = AirportService::new(pool);

        let resp = service.search("ZZZ").await.expect("search");
        assert!(resp.data.is_empty());
        // la consulta usada se reporta igual
        assert_eq!(resp.context.len(), 1);
    }
}
