use std::collections::HashMap;

use chrono::{DateTime, FixedOffset};
use common::UserId;

use crate::error::{MonitorError, Result};

/// Source of the moment each user's clock started.
///
/// For a regular contest this is the contest start; for a virtual contest it is
/// the moment the user opened it.
pub trait UserStartTimeProvider: Send + Sync {
    fn start_time(&self, user_id: UserId) -> Result<DateTime<FixedOffset>>;
}

impl<F> UserStartTimeProvider for F
where
    F: Fn(UserId) -> Result<DateTime<FixedOffset>> + Send + Sync,
{
    fn start_time(&self, user_id: UserId) -> Result<DateTime<FixedOffset>> {
        self(user_id)
    }
}

/// Same start for every user.
#[derive(Clone, Copy, Debug)]
pub struct FixedStart(pub DateTime<FixedOffset>);

impl UserStartTimeProvider for FixedStart {
    fn start_time(&self, _user_id: UserId) -> Result<DateTime<FixedOffset>> {
        Ok(self.0)
    }
}

/// Per-user starts with an optional shared fallback.
#[derive(Clone, Debug, Default)]
pub struct StartTimes {
    per_user: HashMap<UserId, DateTime<FixedOffset>>,
    fallback: Option<DateTime<FixedOffset>>,
}

impl StartTimes {
    pub fn new(fallback: Option<DateTime<FixedOffset>>) -> Self {
        Self {
            per_user: HashMap::new(),
            fallback,
        }
    }

    /// Record a user's start. The earliest one wins when called repeatedly.
    pub fn insert(&mut self, user_id: UserId, started_at: DateTime<FixedOffset>) {
        self.per_user
            .entry(user_id)
            .and_modify(|t| *t = (*t).min(started_at))
            .or_insert(started_at);
    }

}

impl UserStartTimeProvider for StartTimes {
    fn start_time(&self, user_id: UserId) -> Result<DateTime<FixedOffset>> {
        self.per_user
            .get(&user_id)
            .copied()
            .or(self.fallback)
            .ok_or(MonitorError::StartTimeNotFound { user_id })
    }
}
