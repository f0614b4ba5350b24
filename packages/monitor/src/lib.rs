//! Scoreboard computation: judge runs in, one cell per (user, problem) out.

pub mod cell;
pub mod error;
pub mod ordered;
pub mod preprocessor;
pub mod result_maker;
pub mod standings;
pub mod table;
pub mod time_provider;

pub use cell::{Cell, NO_ATTEMPT_MARK, PENALTY_TIME_SEC};
pub use error::{MonitorError, Result};
pub use ordered::OrderedMap;
pub use preprocessor::{MonitorPreprocessor, ProblemBucket, buckets_from_runs, group_by_users};
pub use result_maker::{
    AcmResultMaker, IoiResultMaker, LightAcmResultMaker, ResultMaker, build_result_maker,
};
pub use standings::StandingsRow;
pub use table::ScoreboardTable;
pub use time_provider::{FixedStart, StartTimes, UserStartTimeProvider};
