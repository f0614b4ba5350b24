#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Scoring rule a workshop monitor is rendered with.
///
/// When the `sea-orm` feature is enabled, this enum can be used directly in SeaORM entities.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema,
)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "snake_case")]
pub enum ScoringMode {
    /// Partial points, best mark wins.
    #[default]
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "ioi"))]
    Ioi,
    /// Binary accept/reject with time.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "acm"))]
    Acm,
    /// Binary accept/reject computed from status-only run summaries.
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "light_acm"))]
    LightAcm,
}

impl ScoringMode {
    pub const ALL: &'static [ScoringMode] = &[Self::Ioi, Self::Acm, Self::LightAcm];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ioi => "ioi",
            Self::Acm => "acm",
            Self::LightAcm => "light_acm",
        }
    }

    /// True for the rules that rank by solved count and penalty time.
    pub fn is_acm_like(&self) -> bool {
        matches!(self, Self::Acm | Self::LightAcm)
    }
}

impl fmt::Display for ScoringMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid scoring mode '{invalid}', expected one of: ioi, acm, light_acm")]
pub struct ParseScoringModeError {
    invalid: String,
}

impl FromStr for ScoringMode {
    type Err = ParseScoringModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ioi" => Ok(Self::Ioi),
            "acm" => Ok(Self::Acm),
            "light_acm" => Ok(Self::LightAcm),
            _ => Err(ParseScoringModeError {
                invalid: s.to_string(),
            }),
        }
    }
}
