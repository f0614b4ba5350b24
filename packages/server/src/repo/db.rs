use async_trait::async_trait;
use common::{ProblemId, Run, UserId};
use sea_orm::sea_query::NullOrdering;
use sea_orm::*;

use super::{MonitorRepo, RepoResult, dedup_in_order};
use crate::entity::enums::ConnectionStatus;
use crate::entity::{
    contest, contest_connection, run, statement_problem, workshop, workshop_connection,
};

/// Database-backed repository.
#[derive(Clone, Debug)]
pub struct SeaOrmRepo {
    db: DatabaseConnection,
}

impl SeaOrmRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MonitorRepo for SeaOrmRepo {
    async fn find_workshop(&self, workshop_id: i32) -> RepoResult<Option<workshop::Model>> {
        workshop::Entity::find_by_id(workshop_id).one(&self.db).await
    }

    async fn find_contests(&self, workshop_id: i32) -> RepoResult<Vec<contest::Model>> {
        contest::Entity::find()
            .filter(contest::Column::WorkshopId.eq(workshop_id))
            .order_by_asc(contest::Column::Position)
            .order_by_asc(contest::Column::Id)
            .all(&self.db)
            .await
    }

    async fn problem_ids(&self, statement_ids: &[i32]) -> RepoResult<Vec<ProblemId>> {
        if statement_ids.is_empty() {
            return Ok(Vec::new());
        }
        let mut rows: Vec<(i32, ProblemId)> = statement_problem::Entity::find()
            .filter(statement_problem::Column::StatementId.is_in(statement_ids.iter().copied()))
            .order_by_asc(statement_problem::Column::Rank)
            .select_only()
            .column(statement_problem::Column::StatementId)
            .column(statement_problem::Column::ProblemId)
            .into_tuple()
            .all(&self.db)
            .await?;
        // Stable: rank order survives inside each statement.
        rows.sort_by_key(|(statement_id, _)| {
            statement_ids.iter().position(|id| id == statement_id)
        });
        Ok(dedup_in_order(rows.into_iter().map(|(_, problem_id)| problem_id)))
    }

    async fn participant_ids(&self, workshop_id: i32) -> RepoResult<Vec<UserId>> {
        workshop_connection::Entity::find()
            .filter(workshop_connection::Column::WorkshopId.eq(workshop_id))
            .filter(workshop_connection::Column::Status.is_in(ConnectionStatus::PARTICIPATING))
            .order_by_asc(workshop_connection::Column::UserId)
            .select_only()
            .column(workshop_connection::Column::UserId)
            .into_tuple()
            .all(&self.db)
            .await
    }

    async fn runs(&self, statement_ids: &[i32], user_ids: &[UserId]) -> RepoResult<Vec<Run>> {
        if statement_ids.is_empty() || user_ids.is_empty() {
            return Ok(Vec::new());
        }
        let runs = run::Entity::find()
            .filter(run::Column::StatementId.is_in(statement_ids.iter().copied()))
            .filter(run::Column::UserId.is_in(user_ids.iter().copied()))
            .order_by_with_nulls(run::Column::CreateTime, Order::Asc, NullOrdering::Last)
            .order_by_asc(run::Column::Id)
            .all(&self.db)
            .await?;
        Ok(runs.into_iter().map(Run::from).collect())
    }

    async fn contest_connections(
        &self,
        contest_ids: &[i32],
    ) -> RepoResult<Vec<contest_connection::Model>> {
        if contest_ids.is_empty() {
            return Ok(Vec::new());
        }
        contest_connection::Entity::find()
            .filter(contest_connection::Column::ContestId.is_in(contest_ids.iter().copied()))
            .order_by_asc(contest_connection::Column::CreatedAt)
            .all(&self.db)
            .await
    }
}
