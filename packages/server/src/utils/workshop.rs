use std::collections::HashSet;

use common::{ProblemId, Run, ScoringMode, UserId};
use monitor::{MonitorPreprocessor, ScoreboardTable, StartTimes, build_result_maker, standings};
use tracing::debug;

use crate::config::MonitorConfig;
use crate::entity::enums::WorkshopStatus;
use crate::entity::{contest, contest_connection, workshop};
use crate::error::AppError;
use crate::models::workshop::MonitorResponse;
use crate::repo::MonitorRepo;

/// Look up a workshop, returning 404 if it is missing or still a draft.
pub async fn find_visible_workshop(
    repo: &dyn MonitorRepo,
    id: i32,
) -> Result<workshop::Model, AppError> {
    repo.find_workshop(id)
        .await?
        .filter(|w| w.status != WorkshopStatus::Draft)
        .ok_or_else(|| AppError::NotFound("Workshop not found".into()))
}

/// Statements of the contests, in contest order.
pub fn statement_ids(contests: &[contest::Model]) -> Vec<i32> {
    let mut seen = HashSet::new();
    contests
        .iter()
        .map(|c| c.statement_id)
        .filter(|id| seen.insert(*id))
        .collect()
}

/// Problems of one contest together with the clocks of its participants.
#[derive(Clone, Debug)]
pub struct ContestSection {
    pub contest_id: i32,
    pub problems: Vec<ProblemId>,
    pub start_times: StartTimes,
}

/// Start of every participant's clock in `contest`.
///
/// A regular contest starts everyone at its `time_start`. In a virtual contest
/// each user starts at their earliest connection to it.
pub fn start_times(
    contest: &contest::Model,
    connections: &[contest_connection::Model],
) -> StartTimes {
    if !contest.is_virtual {
        return StartTimes::new(contest.time_start.map(|t| t.fixed_offset()));
    }
    let mut starts = StartTimes::new(None);
    for connection in connections.iter().filter(|c| c.contest_id == contest.id) {
        starts.insert(connection.user_id, connection.created_at.fixed_offset());
    }
    starts
}

/// Split a workshop into one section per contest, in contest order.
///
/// A problem listed by several contests belongs to the first of them.
pub async fn contest_sections(
    repo: &dyn MonitorRepo,
    contests: &[contest::Model],
) -> Result<Vec<ContestSection>, AppError> {
    let contest_ids: Vec<i32> = contests.iter().map(|c| c.id).collect();
    let connections = repo.contest_connections(&contest_ids).await?;

    let mut seen = HashSet::new();
    let mut sections = Vec::with_capacity(contests.len());
    for contest in contests {
        let problems: Vec<ProblemId> = repo
            .problem_ids(&[contest.statement_id])
            .await?
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect();
        sections.push(ContestSection {
            contest_id: contest.id,
            problems,
            start_times: start_times(contest, &connections),
        });
    }
    Ok(sections)
}

/// Build the monitor of one workshop from a snapshot of its data.
///
/// Every section is rendered with its own start times. Runs on problems no
/// section lists are dropped.
pub fn render_monitor(
    workshop_id: i32,
    mode: ScoringMode,
    config: &MonitorConfig,
    users: Vec<UserId>,
    sections: Vec<ContestSection>,
    runs: Vec<Run>,
) -> Result<MonitorResponse, AppError> {
    let problems: Vec<ProblemId> = sections
        .iter()
        .flat_map(|section| section.problems.iter().copied())
        .collect();
    let mut results = ScoreboardTable::seeded(&users, &problems);

    let mut remaining = runs;
    for section in sections {
        let listed: HashSet<ProblemId> = section.problems.iter().copied().collect();
        let (own, rest): (Vec<Run>, Vec<Run>) = remaining
            .into_iter()
            .partition(|run| listed.contains(&run.problem_id));
        remaining = rest;

        debug!(contest_id = section.contest_id, runs = own.len(), "Rendering contest");
        let result_maker = build_result_maker(mode, config.ioi_max_points, section.start_times);
        let computed =
            MonitorPreprocessor::from_runs(&section.problems, own).render(result_maker.as_ref())?;
        results.merge(computed);
    }
    if !remaining.is_empty() {
        debug!(dropped = remaining.len(), "Ignoring runs on unlisted problems");
    }

    let standings = standings::compute(&results, mode);

    Ok(MonitorResponse {
        workshop_id,
        mode,
        problems,
        users,
        results,
        standings,
    })
}
