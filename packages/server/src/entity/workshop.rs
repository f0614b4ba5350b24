use common::ScoringMode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::enums::{WorkshopStatus, WorkshopVisibility};

pub const DEFAULT_NAME: &str = "Время Сборов.";

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "workshop")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(default_value = "Время Сборов.")]
    pub name: String,
    pub status: WorkshopStatus,
    pub visibility: WorkshopVisibility,
    /// Invite token for private workshops.
    pub access_token: String,
    /// Rule the monitor is rendered with; the configured default when unset.
    pub scoring_mode: Option<ScoringMode>,

    #[sea_orm(has_many)]
    pub contests: HasMany<super::contest::Entity>,
    #[sea_orm(has_many)]
    pub connections: HasMany<super::workshop_connection::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
