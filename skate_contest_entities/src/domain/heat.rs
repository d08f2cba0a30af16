use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum HeatRound {
    First,
    Second,
    Final,
}

impl HeatRound {
    pub fn number(&self) -> u8 {
        match self {
            HeatRound::First => 1,
            HeatRound::Second => 2,
            HeatRound::Final => 3,
        }
    }
}

impl TryFrom<u8> for HeatRound {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(HeatRound::First),
            2 => Ok(HeatRound::Second),
            3 => Ok(HeatRound::Final),
            other => Err(format!("Invalid round number {}", other)),
        }
    }
}

impl From<HeatRound> for u8 {
    fn from(value: HeatRound) -> Self {
        value.number()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HeatStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heat {
    pub uuid: Uuid,
    pub category: Category,
    /// Order matters: qualifiers are taken from the front.
    pub participants: Vec<Uuid>,
    pub round: HeatRound,
    pub status: HeatStatus,
}

impl Heat {
    pub fn new(uuid: Uuid, category: Category, participants: Vec<Uuid>, round: HeatRound) -> Self {
        Heat {
            uuid,
            category,
            participants,
            round,
            status: HeatStatus::Pending,
        }
    }
}
