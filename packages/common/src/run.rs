use chrono::{DateTime, FixedOffset, ParseResult};
use serde::{Deserialize, Serialize};

use crate::judge_status::{JudgeStatus, StatusError};

pub type UserId = i32;
pub type ProblemId = i32;

/// Wire format of run creation timestamps.
pub const CREATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Parse a creation timestamp such as `2019-03-01T12:30:00+0300`.
pub fn parse_create_time(s: &str) -> ParseResult<DateTime<FixedOffset>> {
    DateTime::parse_from_str(s, CREATE_TIME_FORMAT)
}

pub fn format_create_time(time: &DateTime<FixedOffset>) -> String {
    time.format(CREATE_TIME_FORMAT).to_string()
}

/// One graded submission attempt.
///
/// `status` keeps the raw judge code; it is classified lazily so that an unknown
/// code only fails the cell it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub user_id: UserId,
    pub problem_id: ProblemId,
    /// Raw ejudge status code.
    pub status: i32,
    /// Judge score; its scale depends on the problem.
    pub score: i32,
    #[serde(default, with = "create_time_serde")]
    pub create_time: Option<DateTime<FixedOffset>>,
}

impl Run {
    pub fn judge_status(&self) -> Result<JudgeStatus, StatusError> {
        JudgeStatus::from_code(self.status)
    }
}

mod create_time_serde {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&super::format_create_time(time)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| {
                super::parse_create_time(&s)
                    .map_err(|err| D::Error::custom(format!("invalid create_time '{s}': {err}")))
            })
            .transpose()
    }
}
