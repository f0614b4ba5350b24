use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use common::{ProblemId, Run, UserId};

use super::{MonitorRepo, RepoResult, dedup_in_order};
use crate::entity::enums::ConnectionStatus;
use crate::entity::{
    contest, contest_connection, run, statement_problem, workshop, workshop_connection,
};

#[derive(Debug, Default)]
struct Data {
    workshops: Vec<workshop::Model>,
    contests: Vec<contest::Model>,
    contest_connections: Vec<contest_connection::Model>,
    workshop_connections: Vec<workshop_connection::Model>,
    statement_problems: Vec<statement_problem::Model>,
    runs: Vec<run::Model>,
}

/// In-process repository.
#[derive(Clone, Debug, Default)]
pub struct MemoryRepo {
    conn: Arc<Mutex<Data>>,
}

impl MemoryRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn data(&self) -> MutexGuard<'_, Data> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert_workshop(&self, workshop: workshop::Model) {
        self.data().workshops.push(workshop);
    }

    pub fn insert_contest(&self, contest: contest::Model) {
        self.data().contests.push(contest);
    }

    pub fn insert_statement_problem(&self, statement_id: i32, problem_id: ProblemId, rank: i32) {
        self.data().statement_problems.push(statement_problem::Model {
            statement_id,
            problem_id,
            rank,
        });
    }

    /// Add or update a user's membership in a workshop.
    pub fn connect_user(&self, workshop_id: i32, user_id: UserId, status: ConnectionStatus) {
        let mut data = self.data();
        match data
            .workshop_connections
            .iter_mut()
            .find(|c| c.workshop_id == workshop_id && c.user_id == user_id)
        {
            Some(connection) => connection.status = status,
            None => data.workshop_connections.push(workshop_connection::Model {
                workshop_id,
                user_id,
                status,
            }),
        }
    }

    /// Record a user opening a contest.
    pub fn open_contest(&self, contest_id: i32, user_id: UserId, created_at: DateTime<Utc>) {
        let mut data = self.data();
        let id = data.contest_connections.len() as i32 + 1;
        data.contest_connections.push(contest_connection::Model {
            id,
            contest_id,
            user_id,
            created_at,
        });
    }

    /// Store a run submitted to `statement_id`; returns its id.
    pub fn insert_run(&self, statement_id: i32, run: Run) -> i32 {
        let mut data = self.data();
        let id = data.runs.len() as i32 + 1;
        data.runs.push(run::Model {
            id,
            user_id: run.user_id,
            problem_id: run.problem_id,
            statement_id,
            ejudge_status: run.status,
            ejudge_score: run.score,
            create_time: run.create_time,
        });
        id
    }
}

#[async_trait]
impl MonitorRepo for MemoryRepo {
    async fn find_workshop(&self, workshop_id: i32) -> RepoResult<Option<workshop::Model>> {
        Ok(self
            .data()
            .workshops
            .iter()
            .find(|w| w.id == workshop_id)
            .cloned())
    }

    async fn find_contests(&self, workshop_id: i32) -> RepoResult<Vec<contest::Model>> {
        let mut contests: Vec<contest::Model> = self
            .data()
            .contests
            .iter()
            .filter(|c| c.workshop_id == workshop_id)
            .cloned()
            .collect();
        contests.sort_by_key(|c| (c.position, c.id));
        Ok(contests)
    }

    async fn problem_ids(&self, statement_ids: &[i32]) -> RepoResult<Vec<ProblemId>> {
        let data = self.data();
        let ordered = statement_ids.iter().flat_map(|&statement_id| {
            let mut problems: Vec<&statement_problem::Model> = data
                .statement_problems
                .iter()
                .filter(|p| p.statement_id == statement_id)
                .collect();
            problems.sort_by_key(|p| p.rank);
            problems.into_iter().map(|p| p.problem_id)
        });
        Ok(dedup_in_order(ordered))
    }

    async fn participant_ids(&self, workshop_id: i32) -> RepoResult<Vec<UserId>> {
        let mut users: Vec<UserId> = self
            .data()
            .workshop_connections
            .iter()
            .filter(|c| c.workshop_id == workshop_id && c.status.is_participant())
            .map(|c| c.user_id)
            .collect();
        users.sort_unstable();
        Ok(users)
    }

    async fn runs(&self, statement_ids: &[i32], user_ids: &[UserId]) -> RepoResult<Vec<Run>> {
        let mut runs: Vec<run::Model> = self
            .data()
            .runs
            .iter()
            .filter(|r| statement_ids.contains(&r.statement_id) && user_ids.contains(&r.user_id))
            .cloned()
            .collect();
        // Untimed runs go last, as NULLS LAST does in the database.
        runs.sort_by_key(|r| (r.create_time.is_none(), r.create_time, r.id));
        Ok(runs.into_iter().map(Run::from).collect())
    }

    async fn contest_connections(
        &self,
        contest_ids: &[i32],
    ) -> RepoResult<Vec<contest_connection::Model>> {
        let mut connections: Vec<contest_connection::Model> = self
            .data()
            .contest_connections
            .iter()
            .filter(|c| contest_ids.contains(&c.contest_id))
            .cloned()
            .collect();
        connections.sort_by_key(|c| c.created_at);
        Ok(connections)
    }
}
