pub mod judge_status;
pub mod run;
pub mod scoring_mode;

pub use judge_status::{JudgeStatus, StatusClass, StatusError};
pub use run::{ProblemId, Run, UserId};
pub use scoring_mode::ScoringMode;
