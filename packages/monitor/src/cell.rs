use serde::{Deserialize, Serialize};

/// Mark of a cell nobody attempted.
pub const NO_ATTEMPT_MARK: &str = "";
pub const MARK_AC: &str = "AC";
pub const MARK_OK: &str = "OK";
pub const MARK_WA: &str = "WA";

/// Penalty added for every wrong try before acceptance, in seconds.
pub const PENALTY_TIME_SEC: i64 = 20 * 60;

/// One cell of the monitor: the result of a single user on a single problem.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Cell {
    /// The latest attempt is still being judged.
    pub on_testing: bool,
    /// The latest attempt was excluded from scoring.
    pub is_ignored: bool,
    /// Displayed value: points for IOI, `OK`/`AC`/`WA` for ACM rules.
    #[schema(example = "100")]
    pub mark: String,
    /// Seconds from the start to the first accepted attempt, 0 otherwise.
    pub time: i64,
    /// The problem counts as solved.
    pub success: bool,
    pub wrong_tries: u32,
}

impl Cell {
    pub fn new(
        on_testing: bool,
        is_ignored: bool,
        mark: impl Into<String>,
        time: i64,
        success: bool,
        wrong_tries: u32,
    ) -> Self {
        Self {
            on_testing,
            is_ignored,
            mark: mark.into(),
            time,
            success,
            wrong_tries,
        }
    }

    pub fn no_attempt() -> Self {
        Self::new(false, false, NO_ATTEMPT_MARK, 0, false, 0)
    }

    /// Elapsed time plus the wrong-try penalty; 0 for unsolved cells.
    pub fn penalty_time(&self) -> i64 {
        if !self.success {
            return 0;
        }
        self.time + i64::from(self.wrong_tries) * PENALTY_TIME_SEC
    }
}
