use common::{JudgeStatus, ProblemId, Run, UserId};

use super::{Attempt, Judged, ResultMaker, attempts, is_last_ignored, is_still_testing};
use crate::cell::{Cell, MARK_AC, MARK_OK, MARK_WA};
use crate::error::Result;
use crate::time_provider::UserStartTimeProvider;

/// Best outcome over the whole history: `AC` beats `OK` beats `WA`.
pub(crate) fn best_mark<T: Judged>(runs: &[T]) -> &'static str {
    let mut mark = MARK_WA;
    for run in runs {
        match run.status() {
            JudgeStatus::Ac => return MARK_AC,
            JudgeStatus::Ok => mark = MARK_OK,
            _ => {}
        }
    }
    mark
}

/// Attempts made before the first accepted one.
pub(crate) fn tries_before_accept<T: Judged>(runs: &[T]) -> u32 {
    runs.iter()
        .position(|run| run.status().is_accepted())
        .unwrap_or(runs.len()) as u32
}

/// Whole seconds between the user's start and the first accepted run that has
/// a timestamp. The provider is only consulted when such a run exists.
pub(crate) fn time_to_first_accept<T, P>(start_times: &P, user_id: UserId, runs: &[T]) -> Result<i64>
where
    T: Judged,
    P: UserStartTimeProvider + ?Sized,
{
    let accepted_at = runs
        .iter()
        .filter(|run| run.status().is_accepted())
        .find_map(|run| run.create_time());
    let Some(accepted_at) = accepted_at else {
        return Ok(0);
    };
    let started_at = start_times.start_time(user_id)?;
    Ok((accepted_at - started_at).num_seconds())
}

/// Accept/reject scoring over the full run records.
pub struct AcmResultMaker<P> {
    start_times: P,
}

impl<P: UserStartTimeProvider> AcmResultMaker<P> {
    pub fn new(start_times: P) -> Self {
        Self { start_times }
    }

    pub fn get_current_mark(attempts: &[Attempt]) -> &'static str {
        best_mark(attempts)
    }

    pub fn get_time(&self, user_id: UserId, attempts: &[Attempt]) -> Result<i64> {
        time_to_first_accept(&self.start_times, user_id, attempts)
    }

    pub fn get_wrong_tries_count(attempts: &[Attempt]) -> u32 {
        tries_before_accept(attempts)
    }
}

impl<P: UserStartTimeProvider> ResultMaker for AcmResultMaker<P> {
    fn render(&self, user_id: UserId, _problem_id: ProblemId, runs: &[Run]) -> Result<Cell> {
        if runs.is_empty() {
            return Ok(Cell::no_attempt());
        }
        let attempts = attempts(runs)?;
        let mark = Self::get_current_mark(&attempts);

        Ok(Cell::new(
            is_still_testing(&attempts),
            is_last_ignored(&attempts),
            mark,
            self.get_time(user_id, &attempts)?,
            mark != MARK_WA,
            Self::get_wrong_tries_count(&attempts),
        ))
    }
}
