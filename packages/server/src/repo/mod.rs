mod db;
mod memory;

pub use self::db::SeaOrmRepo;
pub use self::memory::MemoryRepo;

use async_trait::async_trait;
use sea_orm::DbErr;
use common::{ProblemId, Run, UserId};

use crate::entity::{contest, contest_connection, workshop};

pub type RepoResult<T> = Result<T, DbErr>;

/// Read access to everything a workshop monitor is built from.
#[async_trait]
pub trait MonitorRepo: Send + Sync {
    async fn find_workshop(&self, workshop_id: i32) -> RepoResult<Option<workshop::Model>>;

    /// Contests of a workshop by position.
    async fn find_contests(&self, workshop_id: i32) -> RepoResult<Vec<contest::Model>>;

    /// Problems of the given statements. Statements keep the given order,
    /// problems inside one statement go by ascending rank. No duplicates.
    async fn problem_ids(&self, statement_ids: &[i32]) -> RepoResult<Vec<ProblemId>>;

    /// Accepted and promoted users of a workshop, by user id.
    async fn participant_ids(&self, workshop_id: i32) -> RepoResult<Vec<UserId>>;

    /// Runs of `user_ids` in the given statements, oldest first.
    async fn runs(&self, statement_ids: &[i32], user_ids: &[UserId]) -> RepoResult<Vec<Run>>;

    /// Moments users opened the given contests.
    async fn contest_connections(
        &self,
        contest_ids: &[i32],
    ) -> RepoResult<Vec<contest_connection::Model>>;
}

/// Keep the first occurrence of every item.
pub(crate) fn dedup_in_order<T: Copy + Eq + std::hash::Hash>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut seen = std::collections::HashSet::new();
    items.into_iter().filter(|item| seen.insert(*item)).collect()
}
