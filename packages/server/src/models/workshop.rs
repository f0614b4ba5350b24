use common::{ProblemId, ScoringMode, UserId};
use monitor::{ScoreboardTable, StandingsRow};
use serde::Serialize;
use utoipa::ToSchema;

use crate::entity::enums::{WorkshopStatus, WorkshopVisibility};
use crate::entity::workshop;

#[derive(Serialize, ToSchema)]
pub struct WorkshopResponse {
    pub id: i32,
    #[schema(example = "Время Сборов.")]
    pub name: String,
    pub status: WorkshopStatus,
    pub visibility: WorkshopVisibility,
    /// Rule the monitor is rendered with.
    pub scoring_mode: ScoringMode,
}

impl WorkshopResponse {
    pub fn new(model: workshop::Model, default_mode: ScoringMode) -> Self {
        Self {
            id: model.id,
            name: model.name,
            status: model.status,
            visibility: model.visibility,
            scoring_mode: model.scoring_mode.unwrap_or(default_mode),
        }
    }
}

/// Rendered monitor of a workshop.
#[derive(Serialize, ToSchema)]
pub struct MonitorResponse {
    pub workshop_id: i32,
    pub mode: ScoringMode,
    /// Column order.
    pub problems: Vec<ProblemId>,
    /// Participants, by user id.
    pub users: Vec<UserId>,
    /// `user_id -> problem_id -> cell`, with a blank cell for every pair without runs.
    #[schema(value_type = Object)]
    pub results: ScoreboardTable,
    pub standings: Vec<StandingsRow>,
}

#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
}
