use sea_orm::sea_query::{Index, IndexCreateStatement, PostgresQueryBuilder};
use sea_orm::*;
use tracing::info;

use crate::entity::{contest_connection, run};

/// Indexes backing the monitor queries.
fn monitor_indexes() -> Vec<(&'static str, IndexCreateStatement)> {
    vec![
        // SELECT * FROM run WHERE statement_id IN (..) AND user_id IN (..) ORDER BY create_time
        (
            "idx_run_statement_user_time",
            Index::create()
                .if_not_exists()
                .name("idx_run_statement_user_time")
                .table(run::Entity)
                .col(run::Column::StatementId)
                .col(run::Column::UserId)
                .col(run::Column::CreateTime)
                .to_owned(),
        ),
        (
            "idx_contest_connection_contest",
            Index::create()
                .if_not_exists()
                .name("idx_contest_connection_contest")
                .table(contest_connection::Entity)
                .col(contest_connection::Column::ContestId)
                .to_owned(),
        ),
    ]
}

/// Create the monitor indexes. Failures are logged and skipped.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (name, index) in monitor_indexes() {
        let stmt = index.to_string(PostgresQueryBuilder);

        match db.execute_unprepared(&stmt).await {
            Ok(_) => info!("Ensured index {} exists", name),
            Err(e) => tracing::warn!("Failed to create index {}: {}", name, e),
        }
    }
    Ok(())
}
