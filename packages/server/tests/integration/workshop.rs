use ::common::ScoringMode;
use server::config::MonitorConfig;
use server::entity::enums::WorkshopStatus;

use crate::common::{TestApp, routes, test_config};

mod workshop_lookup {
    use super::*;

    #[tokio::test]
    async fn returns_ongoing_workshop() {
        let app = TestApp::spawn().await;
        let id = app.create_workshop(1, WorkshopStatus::Ongoing, Some(ScoringMode::LightAcm));

        let res = app.get(&routes::workshop(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], 1);
        assert_eq!(res.body["name"], "Время Сборов.");
        assert_eq!(res.body["status"], "ONGOING");
        assert_eq!(res.body["visibility"], "PUBLIC");
        assert_eq!(res.body["scoring_mode"], "light_acm");
    }

    #[tokio::test]
    async fn draft_workshop_is_not_found() {
        let app = TestApp::spawn().await;
        let id = app.create_workshop(2, WorkshopStatus::Draft, None);

        let res = app.get(&routes::workshop(id)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn unknown_workshop_is_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::workshop(404)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn unset_mode_falls_back_to_configured_default() {
        let mut config = test_config();
        config.monitor = MonitorConfig {
            default_mode: ScoringMode::Acm,
            ..MonitorConfig::default()
        };
        let app = TestApp::spawn_with_config(config).await;
        let id = app.create_workshop(3, WorkshopStatus::Ongoing, None);

        let res = app.get(&routes::workshop(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["scoring_mode"], "acm");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app.get("/api/v1/workshops/abc").await;

        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}
