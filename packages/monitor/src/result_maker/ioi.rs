use std::collections::HashMap;

use common::{JudgeStatus, ProblemId, Run, UserId};

use super::{Attempt, ResultMaker, attempts, is_last_ignored, is_still_testing};
use crate::cell::{Cell, NO_ATTEMPT_MARK};
use crate::error::Result;

/// Partial scoring: the best normalized score is the mark.
#[derive(Clone, Debug)]
pub struct IoiResultMaker {
    max_points: i32,
    problem_max_points: HashMap<ProblemId, i32>,
}

impl Default for IoiResultMaker {
    fn default() -> Self {
        Self::new()
    }
}

impl IoiResultMaker {
    pub const MAX_POINTS: i32 = 100;

    pub fn new() -> Self {
        Self::with_max_points(Self::MAX_POINTS)
    }

    pub fn with_max_points(max_points: i32) -> Self {
        Self {
            max_points,
            problem_max_points: HashMap::new(),
        }
    }

    /// Override the full score of a single problem.
    pub fn problem_max_points(mut self, problem_id: ProblemId, max_points: i32) -> Self {
        self.problem_max_points.insert(problem_id, max_points);
        self
    }

    pub fn max_points_for(&self, problem_id: ProblemId) -> i32 {
        self.problem_max_points
            .get(&problem_id)
            .copied()
            .unwrap_or(self.max_points)
    }

    /// Normalized copies of `attempts`: `OK` is worth `max_points`, `PARTIAL`
    /// keeps its score, everything else is worth nothing.
    pub fn update_score_by_statuses(attempts: &[Attempt], max_points: i32) -> Vec<Attempt> {
        attempts
            .iter()
            .map(|attempt| {
                let score = match attempt.status {
                    JudgeStatus::Ok => max_points,
                    JudgeStatus::Partial => attempt.score,
                    _ => 0,
                };
                Attempt {
                    score,
                    ..attempt.clone()
                }
            })
            .collect()
    }

    pub fn get_current_mark(attempts: &[Attempt]) -> String {
        attempts
            .iter()
            .map(|attempt| attempt.score)
            .max()
            .map_or_else(|| NO_ATTEMPT_MARK.to_string(), |score| score.to_string())
    }

    pub fn get_wrong_tries_count(attempts: &[Attempt]) -> u32 {
        attempts
            .iter()
            .filter(|attempt| !matches!(attempt.status, JudgeStatus::Ok | JudgeStatus::Partial))
            .count() as u32
    }

    /// Submission time does not affect IOI cells.
    pub fn get_time(&self) -> i64 {
        0
    }

    pub fn is_success(normalized: &[Attempt], max_points: i32) -> bool {
        normalized
            .iter()
            .map(|attempt| attempt.score)
            .max()
            .is_some_and(|best| best == max_points)
    }
}

impl ResultMaker for IoiResultMaker {
    fn render(&self, _user_id: UserId, problem_id: ProblemId, runs: &[Run]) -> Result<Cell> {
        if runs.is_empty() {
            return Ok(Cell::no_attempt());
        }
        let attempts = attempts(runs)?;
        let max_points = self.max_points_for(problem_id);
        let normalized = Self::update_score_by_statuses(&attempts, max_points);

        Ok(Cell::new(
            is_still_testing(&attempts),
            is_last_ignored(&attempts),
            Self::get_current_mark(&normalized),
            self.get_time(),
            Self::is_success(&normalized, max_points),
            Self::get_wrong_tries_count(&attempts),
        ))
    }
}
