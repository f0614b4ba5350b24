use ::common::{JudgeStatus, ScoringMode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;
use server::entity::enums::{ConnectionStatus, WorkshopStatus};

use crate::common::{TestApp, routes};

const STATEMENT: i32 = 50;

fn ten_am() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap()
}

/// A workshop with one regular contest over problems 101 and 102, starting at ten.
fn regular_workshop(app: &TestApp, mode: ScoringMode) -> i32 {
    let id = app.create_workshop(1, WorkshopStatus::Ongoing, Some(mode));
    app.create_contest(10, id, STATEMENT, &[101, 102], Some(ten_am()), false);
    id
}

mod ioi_monitor {
    use super::*;

    #[tokio::test]
    async fn renders_best_scores_and_blank_cells() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::Ioi);
        app.accept(id, &[1, 2]);
        app.repo.connect_user(id, 3, ConnectionStatus::Applied);
        app.submit(STATEMENT, 1, 101, JudgeStatus::Partial, 30, "2024-01-10T10:05:00+0000");
        app.submit(STATEMENT, 1, 101, JudgeStatus::Ok, 0, "2024-01-10T10:15:00+0000");
        app.submit(STATEMENT, 2, 102, JudgeStatus::Partial, 45, "2024-01-10T10:07:00+0000");
        app.submit(STATEMENT, 2, 102, JudgeStatus::Wa, 70, "2024-01-10T10:09:00+0000");
        app.submit(STATEMENT, 3, 101, JudgeStatus::Ok, 0, "2024-01-10T10:01:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["workshop_id"], 1);
        assert_eq!(res.body["mode"], "ioi");
        assert_eq!(res.body["problems"], json!([101, 102]));
        assert_eq!(res.body["users"], json!([1, 2]));
        assert!(res.body["results"]["3"].is_null(), "applied users are not shown");

        assert_eq!(res.cell(1, 101)["mark"], "100");
        assert_eq!(res.cell(1, 101)["success"], true);
        assert_eq!(res.cell(1, 101)["time"], 0);
        assert_eq!(res.cell(2, 102)["mark"], "45");
        assert_eq!(res.cell(2, 102)["wrong_tries"], 1);
        assert_eq!(
            *res.cell(1, 102),
            json!({
                "on_testing": false,
                "is_ignored": false,
                "mark": "",
                "time": 0,
                "success": false,
                "wrong_tries": 0,
            })
        );

        assert_eq!(res.body["standings"][0]["user_id"], 1);
        assert_eq!(res.body["standings"][0]["score"], 100);
        assert_eq!(res.body["standings"][1]["user_id"], 2);
        assert_eq!(res.body["standings"][1]["place"], 2);
    }

    #[tokio::test]
    async fn last_run_in_queue_marks_cell_on_testing() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::Ioi);
        app.accept(id, &[1]);
        app.submit(STATEMENT, 1, 102, JudgeStatus::Partial, 20, "2024-01-10T10:05:00+0000");
        app.submit(STATEMENT, 1, 102, JudgeStatus::Running, 0, "2024-01-10T10:06:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.cell(1, 102)["on_testing"], true);
        assert_eq!(res.cell(1, 102)["mark"], "20");
    }

    #[tokio::test]
    async fn runs_on_other_statements_are_ignored() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::Ioi);
        app.accept(id, &[1]);
        app.submit(STATEMENT + 1, 1, 101, JudgeStatus::Ok, 0, "2024-01-10T10:05:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.cell(1, 101)["mark"], "");
    }
}

mod acm_monitor {
    use super::*;

    #[tokio::test]
    async fn ranks_by_solved_then_penalty() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::Acm);
        app.accept(id, &[1, 2]);
        app.submit(STATEMENT, 1, 101, JudgeStatus::Wa, 0, "2024-01-10T10:05:00+0000");
        app.submit(STATEMENT, 1, 101, JudgeStatus::Ok, 0, "2024-01-10T10:20:00+0000");
        app.submit(STATEMENT, 2, 101, JudgeStatus::Ac, 0, "2024-01-10T10:10:00+0000");
        app.submit(STATEMENT, 2, 102, JudgeStatus::Ce, 0, "2024-01-10T10:30:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["mode"], "acm");
        assert_eq!(res.cell(1, 101)["mark"], "OK");
        assert_eq!(res.cell(1, 101)["time"], 1200);
        assert_eq!(res.cell(1, 101)["wrong_tries"], 1);
        assert_eq!(res.cell(2, 101)["mark"], "AC");
        assert_eq!(res.cell(2, 101)["time"], 600);
        assert_eq!(res.cell(2, 102)["mark"], "WA");
        assert_eq!(res.cell(2, 102)["success"], false);

        let standings = &res.body["standings"];
        assert_eq!(standings[0]["user_id"], 2);
        assert_eq!(standings[0]["penalty"], 600);
        assert_eq!(standings[1]["user_id"], 1);
        assert_eq!(standings[1]["penalty"], 1200 + 1200);
        assert_eq!(standings[1]["solved"], 1);
    }

    #[tokio::test]
    async fn unknown_status_is_an_internal_error() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::Acm);
        app.accept(id, &[1]);
        app.submit_raw(STATEMENT, 1, 101, 4242);

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "INTERNAL_ERROR");
        assert!(!res.text.contains("4242"));
    }
}

mod light_acm_monitor {
    use super::*;

    fn virtual_workshop(app: &TestApp) -> i32 {
        let id = app.create_workshop(7, WorkshopStatus::Ongoing, Some(ScoringMode::LightAcm));
        app.create_contest(70, id, STATEMENT, &[101], None, true);
        id
    }

    #[tokio::test]
    async fn virtual_contest_counts_from_opening() {
        let app = TestApp::spawn().await;
        let id = virtual_workshop(&app);
        app.accept(id, &[5]);
        let opened = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        app.repo.open_contest(70, 5, opened);
        app.submit(STATEMENT, 5, 101, JudgeStatus::Ok, 0, "2024-01-10T15:30:00+0300");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["mode"], "light_acm");
        assert_eq!(res.cell(5, 101)["mark"], "OK");
        assert_eq!(res.cell(5, 101)["time"], 1800);
    }

    #[tokio::test]
    async fn missing_start_is_an_internal_error() {
        let app = TestApp::spawn().await;
        let id = virtual_workshop(&app);
        app.accept(id, &[5]);
        app.submit(STATEMENT, 5, 101, JudgeStatus::Ok, 0, "2024-01-10T12:30:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn unsolved_cells_never_need_a_start() {
        let app = TestApp::spawn().await;
        let id = virtual_workshop(&app);
        app.accept(id, &[5]);
        app.submit(STATEMENT, 5, 101, JudgeStatus::Wa, 0, "2024-01-10T12:30:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.cell(5, 101)["mark"], "WA");
        assert_eq!(res.cell(5, 101)["time"], 0);
    }
}

mod multi_contest_monitor {
    use super::*;

    const VIRTUAL_STATEMENT: i32 = STATEMENT + 1;

    #[tokio::test]
    async fn opening_a_virtual_contest_keeps_regular_times() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::Acm);
        app.create_contest(11, id, VIRTUAL_STATEMENT, &[201], None, true);
        app.accept(id, &[5]);
        app.repo
            .open_contest(11, 5, Utc.with_ymd_and_hms(2024, 1, 10, 14, 0, 0).unwrap());
        app.submit(STATEMENT, 5, 101, JudgeStatus::Ok, 0, "2024-01-10T11:00:00+0000");
        app.submit(VIRTUAL_STATEMENT, 5, 201, JudgeStatus::Ok, 0, "2024-01-10T14:20:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["problems"], json!([101, 102, 201]));
        assert_eq!(res.cell(5, 101)["time"], 3600);
        assert_eq!(res.cell(5, 201)["time"], 1200);
        assert_eq!(res.body["standings"][0]["penalty"], 3600 + 1200);
    }

    #[tokio::test]
    async fn second_day_counts_from_its_own_start() {
        let app = TestApp::spawn().await;
        let id = regular_workshop(&app, ScoringMode::LightAcm);
        let day_two = Utc.with_ymd_and_hms(2024, 1, 11, 10, 0, 0).unwrap();
        app.create_contest(12, id, VIRTUAL_STATEMENT, &[201], Some(day_two), false);
        app.accept(id, &[5]);
        app.submit(STATEMENT, 5, 102, JudgeStatus::Ok, 0, "2024-01-10T10:10:00+0000");
        app.submit(VIRTUAL_STATEMENT, 5, 201, JudgeStatus::Ok, 0, "2024-01-11T10:15:00+0000");

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.cell(5, 102)["time"], 600);
        assert_eq!(res.cell(5, 201)["time"], 900);
    }
}

mod monitor_visibility {
    use super::*;

    #[tokio::test]
    async fn draft_workshop_has_no_monitor() {
        let app = TestApp::spawn().await;
        let id = app.create_workshop(9, WorkshopStatus::Draft, Some(ScoringMode::Acm));

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn empty_workshop_renders_empty_monitor() {
        let app = TestApp::spawn().await;
        let id = app.create_workshop(9, WorkshopStatus::Ongoing, Some(ScoringMode::Ioi));

        let res = app.get(&routes::monitor(id)).await;

        assert_eq!(res.status, 200);
        assert_eq!(res.body["problems"], json!([]));
        assert_eq!(res.body["users"], json!([]));
        assert_eq!(res.body["results"], json!({}));
        assert_eq!(res.body["standings"], json!([]));
    }
}
