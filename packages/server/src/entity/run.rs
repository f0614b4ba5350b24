use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A graded submission as reported by ejudge.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "run")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub problem_id: i32,
    pub statement_id: i32,

    /// Raw ejudge status code.
    pub ejudge_status: i32,
    #[sea_orm(default_value = 0)]
    pub ejudge_score: i32,
    pub create_time: Option<DateTimeWithTimeZone>,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::Run {
    fn from(model: Model) -> Self {
        common::Run {
            user_id: model.user_id,
            problem_id: model.problem_id,
            status: model.ejudge_status,
            score: model.ejudge_score,
            create_time: model.create_time,
        }
    }
}
