//! Scoring rules. Each rule turns the run history of one (user, problem) pair
//! into a single [`Cell`].

mod acm;
mod ioi;
mod light_acm;

pub use acm::AcmResultMaker;
pub use ioi::IoiResultMaker;
pub use light_acm::LightAcmResultMaker;

use chrono::{DateTime, FixedOffset};
use common::{JudgeStatus, ProblemId, Run, ScoringMode, UserId};

use crate::cell::Cell;
use crate::error::Result;
use crate::time_provider::UserStartTimeProvider;

/// A scoring rule.
pub trait ResultMaker: Send + Sync {
    /// Build the cell of `user_id` on `problem_id` from that user's runs, oldest first.
    ///
    /// An empty history yields [`Cell::no_attempt`].
    fn render(&self, user_id: UserId, problem_id: ProblemId, runs: &[Run]) -> Result<Cell>;
}

/// Anything carrying a classified judge status.
pub trait Judged {
    fn status(&self) -> JudgeStatus;
    fn create_time(&self) -> Option<DateTime<FixedOffset>>;
}

/// A run with its status classified; the full detail used by IOI and ACM.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub status: JudgeStatus,
    pub score: i32,
    pub create_time: Option<DateTime<FixedOffset>>,
}

impl Attempt {
    pub fn from_run(run: &Run) -> Result<Self> {
        Ok(Self {
            status: run.judge_status()?,
            score: run.score,
            create_time: run.create_time,
        })
    }
}

impl Judged for Attempt {
    fn status(&self) -> JudgeStatus {
        self.status
    }

    fn create_time(&self) -> Option<DateTime<FixedOffset>> {
        self.create_time
    }
}

/// Status and timestamp only; what Light-ACM works with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub status: JudgeStatus,
    pub create_time: Option<DateTime<FixedOffset>>,
}

impl RunSummary {
    pub fn from_run(run: &Run) -> Result<Self> {
        Ok(Self {
            status: run.judge_status()?,
            create_time: run.create_time,
        })
    }
}

impl Judged for RunSummary {
    fn status(&self) -> JudgeStatus {
        self.status
    }

    fn create_time(&self) -> Option<DateTime<FixedOffset>> {
        self.create_time
    }
}

/// Classify every run. Fails on the first unknown status code.
pub fn attempts(runs: &[Run]) -> Result<Vec<Attempt>> {
    runs.iter().map(Attempt::from_run).collect()
}

pub fn summaries(runs: &[Run]) -> Result<Vec<RunSummary>> {
    runs.iter().map(RunSummary::from_run).collect()
}

/// True iff the most recent run is still waiting for a verdict.
pub fn is_still_testing<T: Judged>(runs: &[T]) -> bool {
    runs.last().is_some_and(|run| run.status().is_in_queue())
}

/// True iff the most recent run is `IGNORED`.
pub fn is_last_ignored<T: Judged>(runs: &[T]) -> bool {
    runs.last().is_some_and(|run| run.status().is_ignored())
}

/// Pick the result maker for a workshop's scoring mode.
pub fn build_result_maker<P>(
    mode: ScoringMode,
    ioi_max_points: i32,
    start_times: P,
) -> Box<dyn ResultMaker>
where
    P: UserStartTimeProvider + 'static,
{
    match mode {
        ScoringMode::Ioi => Box::new(IoiResultMaker::with_max_points(ioi_max_points)),
        ScoringMode::Acm => Box::new(AcmResultMaker::new(start_times)),
        ScoringMode::LightAcm => Box::new(LightAcmResultMaker::new(start_times)),
    }
}
