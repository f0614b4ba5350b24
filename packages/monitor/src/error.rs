use common::{ProblemId, StatusError, UserId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MonitorError {
    #[error(transparent)]
    UnknownStatus(#[from] StatusError),

    #[error("no start time known for user {user_id}")]
    StartTimeNotFound { user_id: UserId },

    /// A cell failed; carries the coordinates of the failing cell.
    #[error("failed to render cell for user {user_id}, problem {problem_id}: {source}")]
    Cell {
        user_id: UserId,
        problem_id: ProblemId,
        #[source]
        source: Box<MonitorError>,
    },
}

impl MonitorError {
    pub fn in_cell(self, user_id: UserId, problem_id: ProblemId) -> Self {
        MonitorError::Cell {
            user_id,
            problem_id,
            source: Box::new(self),
        }
    }

    /// The innermost error, unwrapping [`MonitorError::Cell`] layers.
    pub fn root(&self) -> &MonitorError {
        match self {
            MonitorError::Cell { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitorError>;
