use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,
    pub firstname: String,
    pub lastname: String,

    #[sea_orm(has_many)]
    pub runs: HasMany<super::run::Entity>,
    #[sea_orm(has_many)]
    pub workshop_connections: HasMany<super::workshop_connection::Entity>,
    #[sea_orm(has_many)]
    pub contest_connections: HasMany<super::contest_connection::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
