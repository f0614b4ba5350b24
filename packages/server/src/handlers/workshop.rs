use axum::Json;
use axum::extract::State;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::path::AppPath;
use crate::models::workshop::{MonitorResponse, WorkshopResponse};
use crate::state::AppState;
use crate::utils::workshop::{contest_sections, find_visible_workshop, render_monitor, statement_ids};

#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Workshops",
    operation_id = "getWorkshop",
    summary = "Get a workshop",
    description = "Returns a workshop summary. Draft workshops are reported as missing.",
    params(("id" = i32, Path, description = "Workshop ID")),
    responses(
        (status = 200, description = "Workshop details", body = WorkshopResponse),
        (status = 400, description = "Malformed workshop ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Workshop not found (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_workshop(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<WorkshopResponse>, AppError> {
    let workshop = find_visible_workshop(state.repo.as_ref(), id).await?;

    Ok(Json(WorkshopResponse::new(
        workshop,
        state.config.monitor.default_mode,
    )))
}

#[utoipa::path(
    get,
    path = "/{id}/monitor",
    tag = "Workshops",
    operation_id = "getWorkshopMonitor",
    summary = "Get the monitor of a workshop",
    description = "Renders the scoreboard of every accepted or promoted participant over the problems of the workshop's contests, using the workshop's scoring mode. Times count from the start of the contest a problem belongs to. Computed from scratch on every request.",
    params(("id" = i32, Path, description = "Workshop ID")),
    responses(
        (status = 200, description = "Rendered monitor", body = MonitorResponse),
        (status = 400, description = "Malformed workshop ID (VALIDATION_ERROR)", body = ErrorBody),
        (status = 404, description = "Workshop not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Monitor could not be rendered (INTERNAL_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_monitor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i32>,
) -> Result<Json<MonitorResponse>, AppError> {
    let repo = state.repo.as_ref();
    let workshop = find_visible_workshop(repo, id).await?;
    let mode = workshop
        .scoring_mode
        .unwrap_or(state.config.monitor.default_mode);

    let contests = repo.find_contests(workshop.id).await?;
    let sections = contest_sections(repo, &contests).await?;
    let statements = statement_ids(&contests);
    let users = repo.participant_ids(workshop.id).await?;
    let runs = repo.runs(&statements, &users).await?;

    info!(
        %mode,
        contests = sections.len(),
        users = users.len(),
        runs = runs.len(),
        "Rendering monitor"
    );

    let monitor = render_monitor(
        workshop.id,
        mode,
        &state.config.monitor,
        users,
        sections,
        runs,
    )?;

    Ok(Json(monitor))
}
