use common::{ProblemId, Run, UserId};

use super::acm::{best_mark, time_to_first_accept, tries_before_accept};
use super::{ResultMaker, RunSummary, is_last_ignored, is_still_testing, summaries};
use crate::cell::{Cell, MARK_WA};
use crate::error::Result;
use crate::time_provider::UserStartTimeProvider;

/// Accept/reject scoring for monitors that only show solved/unsolved.
///
/// Works on [`RunSummary`] values, so scores never reach the cell. Elapsed time
/// is measured from a per-user start, e.g. the moment a virtual contest was opened.
pub struct LightAcmResultMaker<P> {
    start_times: P,
}

impl<P: UserStartTimeProvider> LightAcmResultMaker<P> {
    pub fn new(start_times: P) -> Self {
        Self { start_times }
    }

    pub fn get_current_mark(runs: &[RunSummary]) -> &'static str {
        best_mark(runs)
    }

    pub fn get_time(&self, user_id: UserId, runs: &[RunSummary]) -> Result<i64> {
        time_to_first_accept(&self.start_times, user_id, runs)
    }

    pub fn get_wrong_tries_count(runs: &[RunSummary]) -> u32 {
        tries_before_accept(runs)
    }
}

impl<P: UserStartTimeProvider> ResultMaker for LightAcmResultMaker<P> {
    fn render(&self, user_id: UserId, _problem_id: ProblemId, runs: &[Run]) -> Result<Cell> {
        if runs.is_empty() {
            return Ok(Cell::no_attempt());
        }
        let runs = summaries(runs)?;
        let mark = Self::get_current_mark(&runs);

        Ok(Cell::new(
            is_still_testing(&runs),
            is_last_ignored(&runs),
            mark,
            self.get_time(user_id, &runs)?,
            mark != MARK_WA,
            Self::get_wrong_tries_count(&runs),
        ))
    }
}
