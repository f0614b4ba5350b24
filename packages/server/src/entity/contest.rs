use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contest")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub workshop_id: i32,
    #[sea_orm(belongs_to, from = "workshop_id", to = "id")]
    pub workshop: HasOne<super::workshop::Entity>,

    /// Problem set shown in this contest.
    pub statement_id: i32,
    pub time_start: Option<DateTimeUtc>,
    pub time_stop: Option<DateTimeUtc>,
    /// Every participant's clock starts when they open the contest.
    pub is_virtual: bool,
    #[sea_orm(default_value = 0)]
    pub position: i32,

    #[sea_orm(has_many)]
    pub connections: HasMany<super::contest_connection::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
