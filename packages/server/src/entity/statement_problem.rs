use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "statement_problem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub statement_id: i32,
    #[sea_orm(primary_key)]
    pub problem_id: i32,

    /// Column order on the monitor, ascending.
    #[sea_orm(default_value = 0)]
    pub rank: i32,
}

impl ActiveModelBehavior for ActiveModel {}
