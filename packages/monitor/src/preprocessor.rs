use common::{ProblemId, Run, UserId};
use tracing::{debug, warn};

use crate::error::Result;
use crate::ordered::OrderedMap;
use crate::result_maker::ResultMaker;
use crate::table::ScoreboardTable;

/// All runs submitted for one problem, oldest first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProblemBucket {
    pub problem_id: ProblemId,
    pub runs: Vec<Run>,
}

/// Split a flat run list into per-problem buckets.
///
/// Buckets follow `problem_order`; problems that only show up in `runs` are
/// appended in order of first appearance. Listed problems without runs get an
/// empty bucket.
pub fn buckets_from_runs(problem_order: &[ProblemId], runs: Vec<Run>) -> Vec<ProblemBucket> {
    let mut by_problem: OrderedMap<ProblemId, Vec<Run>> = problem_order
        .iter()
        .map(|&problem_id| (problem_id, Vec::new()))
        .collect();
    for run in runs {
        by_problem
            .get_or_insert_with(run.problem_id, Vec::new)
            .push(run);
    }
    by_problem
        .into_iter()
        .map(|(problem_id, runs)| ProblemBucket { problem_id, runs })
        .collect()
}

/// Group runs by user, keeping first-appearance order of users and the
/// original order inside each group.
pub fn group_by_users(runs: &[Run]) -> OrderedMap<UserId, Vec<Run>> {
    let mut groups = OrderedMap::new();
    for run in runs {
        groups
            .get_or_insert_with(run.user_id, Vec::new)
            .push(run.clone());
    }
    groups
}

/// Turns per-problem run buckets into a scoreboard table.
#[derive(Clone, Debug, Default)]
pub struct MonitorPreprocessor {
    buckets: Vec<ProblemBucket>,
}

impl MonitorPreprocessor {
    pub fn new(buckets: Vec<ProblemBucket>) -> Self {
        Self { buckets }
    }

    pub fn from_runs(problem_order: &[ProblemId], runs: Vec<Run>) -> Self {
        Self::new(buckets_from_runs(problem_order, runs))
    }

    /// Render one cell per (user, problem) pair that has runs.
    ///
    /// The first failing cell aborts the whole render.
    pub fn render(&self, result_maker: &dyn ResultMaker) -> Result<ScoreboardTable> {
        let mut table = ScoreboardTable::new();
        for bucket in &self.buckets {
            for (user_id, runs) in group_by_users(&bucket.runs) {
                let cell = result_maker
                    .render(user_id, bucket.problem_id, &runs)
                    .map_err(|err| {
                        warn!(user_id, problem_id = bucket.problem_id, error = %err, "Cell render failed");
                        err.in_cell(user_id, bucket.problem_id)
                    })?;
                table.insert(user_id, bucket.problem_id, cell);
            }
        }
        debug!(
            problems = self.buckets.len(),
            users = table.len(),
            cells = table.cell_count(),
            "Rendered monitor"
        );
        Ok(table)
    }
}
