use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkshopStatus {
    #[sea_orm(num_value = 1)]
    Draft,
    #[sea_orm(num_value = 2)]
    Ongoing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkshopVisibility {
    #[sea_orm(num_value = 1)]
    Public,
    #[sea_orm(num_value = 2)]
    Private,
}

/// State of a user's membership in a workshop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    #[sea_orm(num_value = 1)]
    Applied,
    #[sea_orm(num_value = 2)]
    Accepted,
    #[sea_orm(num_value = 3)]
    Disqualified,
    #[sea_orm(num_value = 4)]
    Promoted,
}

impl ConnectionStatus {
    /// Statuses whose users appear on the monitor.
    pub const PARTICIPATING: [ConnectionStatus; 2] = [Self::Accepted, Self::Promoted];

    pub fn is_participant(self) -> bool {
        Self::PARTICIPATING.contains(&self)
    }
}
