use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::ConnectionStatus;

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workshop_connection")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub workshop_id: i32,
    #[sea_orm(primary_key)]
    pub user_id: i32,
    #[sea_orm(belongs_to, from = "workshop_id", to = "id")]
    pub workshop: HasOne<super::workshop::Entity>,
    #[sea_orm(belongs_to, from = "user_id", to = "id")]
    pub user: HasOne<super::user::Entity>,

    pub status: ConnectionStatus,
}

impl ActiveModelBehavior for ActiveModel {}
