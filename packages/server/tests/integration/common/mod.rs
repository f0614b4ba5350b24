use std::net::SocketAddr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde_json::Value;

use ::common::{JudgeStatus, ProblemId, Run, ScoringMode, UserId};
use server::config::{AppConfig, CorsConfig, DatabaseConfig, MonitorConfig, ServerConfig};
use server::entity::enums::{ConnectionStatus, WorkshopStatus, WorkshopVisibility};
use server::entity::{contest, workshop};
use server::repo::MemoryRepo;
use server::state::AppState;

pub mod routes {
    pub const HEALTH: &str = "/api/v1/health";
    pub const OPENAPI: &str = "/api-docs/openapi.json";

    pub fn workshop(id: i32) -> String {
        format!("/api/v1/workshops/{id}")
    }

    pub fn monitor(id: i32) -> String {
        format!("/api/v1/workshops/{id}/monitor")
    }
}

/// A running test server over an in-memory repository.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub repo: MemoryRepo,
}

/// Parsed HTTP response for test assertions.
pub struct TestResponse {
    pub status: u16,
    /// Raw response body as text.
    pub text: String,
    /// Parsed JSON body, or `Null` if the response is not valid JSON.
    pub body: Value,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors: CorsConfig {
                allow_origins: vec![],
                max_age: 3600,
            },
        },
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
        },
        monitor: MonitorConfig::default(),
    }
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_config(test_config()).await
    }

    pub async fn spawn_with_config(config: AppConfig) -> Self {
        let repo = MemoryRepo::new();
        let state = AppState {
            repo: Arc::new(repo.clone()),
            config,
        };

        let app = server::build_router(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            addr,
            client: Client::new(),
            repo,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get(&self, path: &str) -> TestResponse {
        let res = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("Failed to send GET request");

        TestResponse::from_response(res).await
    }

    /// Insert a workshop and return its `id`.
    pub fn create_workshop(
        &self,
        id: i32,
        status: WorkshopStatus,
        scoring_mode: Option<ScoringMode>,
    ) -> i32 {
        self.repo.insert_workshop(workshop::Model {
            id,
            name: workshop::DEFAULT_NAME.to_string(),
            status,
            visibility: WorkshopVisibility::Public,
            access_token: format!("token-{id}"),
            scoring_mode,
        });
        id
    }

    /// Insert a contest over `statement_id` holding `problems` in rank order.
    pub fn create_contest(
        &self,
        id: i32,
        workshop_id: i32,
        statement_id: i32,
        problems: &[ProblemId],
        time_start: Option<DateTime<Utc>>,
        is_virtual: bool,
    ) -> i32 {
        self.repo.insert_contest(contest::Model {
            id,
            workshop_id,
            statement_id,
            time_start,
            time_stop: None,
            is_virtual,
            position: id,
        });
        for (rank, &problem_id) in problems.iter().enumerate() {
            self.repo
                .insert_statement_problem(statement_id, problem_id, rank as i32);
        }
        id
    }

    pub fn accept(&self, workshop_id: i32, users: &[UserId]) {
        for &user_id in users {
            self.repo
                .connect_user(workshop_id, user_id, ConnectionStatus::Accepted);
        }
    }

    /// Store a run created at `create_time` (`%Y-%m-%dT%H:%M:%S%z`).
    pub fn submit(
        &self,
        statement_id: i32,
        user_id: UserId,
        problem_id: ProblemId,
        status: JudgeStatus,
        score: i32,
        create_time: &str,
    ) {
        let create_time =
            ::common::run::parse_create_time(create_time).expect("Fixture timestamp should parse");
        self.repo.insert_run(
            statement_id,
            Run {
                user_id,
                problem_id,
                status: status.code(),
                score,
                create_time: Some(create_time),
            },
        );
    }

    /// Store a run with a raw status code and no timestamp.
    pub fn submit_raw(&self, statement_id: i32, user_id: UserId, problem_id: ProblemId, status: i32) {
        self.repo.insert_run(
            statement_id,
            Run {
                user_id,
                problem_id,
                status,
                score: 0,
                create_time: None,
            },
        );
    }
}

impl TestResponse {
    pub async fn from_response(res: reqwest::Response) -> Self {
        let status = res.status().as_u16();
        let text = res.text().await.unwrap_or_default();
        let body = serde_json::from_str(&text).unwrap_or(Value::Null);
        Self { status, text, body }
    }

    /// The cell of `user_id` on `problem_id` in a monitor response.
    pub fn cell(&self, user_id: UserId, problem_id: ProblemId) -> &Value {
        &self.body["results"][user_id.to_string()][problem_id.to_string()]
    }
}
