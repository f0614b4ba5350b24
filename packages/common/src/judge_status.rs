use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Status code reported by the ejudge backend for a single run.
///
/// The set is closed: every code the judge can emit maps to exactly one variant,
/// and anything else is rejected with [`StatusError::Unknown`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum JudgeStatus {
    /// Full solution, scale-independent.
    Ok,
    /// Compilation error.
    Ce,
    /// Runtime error.
    Rt,
    /// Time limit exceeded.
    Tl,
    /// Presentation error.
    Pe,
    /// Wrong answer.
    Wa,
    /// Checker failed.
    Cf,
    /// Some tests passed; the score carries the partial points.
    Partial,
    /// Accepted for further review (counts as passing).
    Ac,
    /// Excluded from scoring by a judge.
    Ignored,
    /// Disqualified.
    Dq,
    /// Waiting for manual checking.
    Pending,
    /// Memory limit exceeded.
    Ml,
    /// Security violation.
    Se,
    /// Style violation.
    Sv,
    /// Wall time limit exceeded.
    Wt,
    /// Pending review.
    Pr,
    /// Rejected by a judge.
    Rejected,
    /// Skipped.
    Skipped,
    Running,
    Compiled,
    Compiling,
    /// Waiting for a free invoker.
    InQueue,
}

/// Semantic outcome of a [`JudgeStatus`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatusClass {
    /// The run has not been finally judged yet.
    InQueue,
    /// The run was excluded from scoring.
    Ignored,
    /// `OK` or `AC`.
    Passed,
    /// `PARTIAL`: the score is meaningful, the solution is not complete.
    Partial,
    /// Every other terminal outcome.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("unknown judge status code {0}")]
    Unknown(i32),
}

impl JudgeStatus {
    /// All known statuses.
    pub const ALL: &'static [JudgeStatus] = &[
        Self::Ok,
        Self::Ce,
        Self::Rt,
        Self::Tl,
        Self::Pe,
        Self::Wa,
        Self::Cf,
        Self::Partial,
        Self::Ac,
        Self::Ignored,
        Self::Dq,
        Self::Pending,
        Self::Ml,
        Self::Se,
        Self::Sv,
        Self::Wt,
        Self::Pr,
        Self::Rejected,
        Self::Skipped,
        Self::Running,
        Self::Compiled,
        Self::Compiling,
        Self::InQueue,
    ];

    /// Look up a raw ejudge code.
    pub fn from_code(code: i32) -> Result<Self, StatusError> {
        let status = match code {
            0 => Self::Ok,
            1 => Self::Ce,
            2 => Self::Rt,
            3 => Self::Tl,
            4 => Self::Pe,
            5 => Self::Wa,
            6 => Self::Cf,
            7 => Self::Partial,
            8 => Self::Ac,
            9 => Self::Ignored,
            10 => Self::Dq,
            11 => Self::Pending,
            12 => Self::Ml,
            13 => Self::Se,
            14 => Self::Sv,
            15 => Self::Wt,
            16 => Self::Pr,
            17 => Self::Rejected,
            18 => Self::Skipped,
            96 => Self::Running,
            97 => Self::Compiled,
            98 => Self::Compiling,
            377 => Self::InQueue,
            other => return Err(StatusError::Unknown(other)),
        };
        Ok(status)
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Ce => 1,
            Self::Rt => 2,
            Self::Tl => 3,
            Self::Pe => 4,
            Self::Wa => 5,
            Self::Cf => 6,
            Self::Partial => 7,
            Self::Ac => 8,
            Self::Ignored => 9,
            Self::Dq => 10,
            Self::Pending => 11,
            Self::Ml => 12,
            Self::Se => 13,
            Self::Sv => 14,
            Self::Wt => 15,
            Self::Pr => 16,
            Self::Rejected => 17,
            Self::Skipped => 18,
            Self::Running => 96,
            Self::Compiled => 97,
            Self::Compiling => 98,
            Self::InQueue => 377,
        }
    }

    pub fn class(self) -> StatusClass {
        match self {
            Self::InQueue | Self::Running | Self::Compiled | Self::Compiling | Self::Pending
            | Self::Pr => StatusClass::InQueue,
            Self::Ignored => StatusClass::Ignored,
            Self::Ok | Self::Ac => StatusClass::Passed,
            Self::Partial => StatusClass::Partial,
            Self::Ce
            | Self::Rt
            | Self::Tl
            | Self::Pe
            | Self::Wa
            | Self::Cf
            | Self::Dq
            | Self::Ml
            | Self::Se
            | Self::Sv
            | Self::Wt
            | Self::Rejected
            | Self::Skipped => StatusClass::Failed,
        }
    }

    /// Returns true while the run is still waiting for a final verdict.
    pub fn is_in_queue(self) -> bool {
        self.class() == StatusClass::InQueue
    }

    pub fn is_ignored(self) -> bool {
        self == Self::Ignored
    }

    /// Returns true for `OK` and `AC`.
    pub fn is_accepted(self) -> bool {
        self.class() == StatusClass::Passed
    }

    /// Short name as shown by ejudge.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Ce => "CE",
            Self::Rt => "RT",
            Self::Tl => "TL",
            Self::Pe => "PE",
            Self::Wa => "WA",
            Self::Cf => "CF",
            Self::Partial => "PT",
            Self::Ac => "AC",
            Self::Ignored => "IG",
            Self::Dq => "DQ",
            Self::Pending => "PD",
            Self::Ml => "ML",
            Self::Se => "SE",
            Self::Sv => "SV",
            Self::Wt => "WT",
            Self::Pr => "PR",
            Self::Rejected => "RJ",
            Self::Skipped => "SK",
            Self::Running => "RU",
            Self::Compiled => "CD",
            Self::Compiling => "CG",
            Self::InQueue => "QU",
        }
    }
}

impl fmt::Display for JudgeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<i32> for JudgeStatus {
    type Error = StatusError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<JudgeStatus> for i32 {
    fn from(status: JudgeStatus) -> Self {
        status.code()
    }
}
