use serde::{Deserialize, Serialize};

use super::category::Category;

/// Round sizing for one category's bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatConfig {
    pub first_round_size: u32,
    pub second_round_qualifiers: u32,
    pub second_round_size: u32,
    pub finalists: u32,
}

impl Default for HeatConfig {
    fn default() -> Self {
        HeatConfig {
            first_round_size: 5,
            second_round_qualifiers: 3,
            second_round_size: 2,
            finalists: 1,
        }
    }
}

/// Fields left as `None` keep their current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatConfigUpdate {
    #[serde(default)]
    pub first_round_size: Option<u32>,
    #[serde(default)]
    pub second_round_qualifiers: Option<u32>,
    #[serde(default)]
    pub second_round_size: Option<u32>,
    #[serde(default)]
    pub finalists: Option<u32>,
}

impl HeatConfigUpdate {
    pub fn has_zero_field(&self) -> bool {
        [
            self.first_round_size,
            self.second_round_qualifiers,
            self.second_round_size,
            self.finalists,
        ]
        .iter()
        .any(|v| *v == Some(0))
    }
}

impl HeatConfig {
    pub fn merged(&self, update: &HeatConfigUpdate) -> HeatConfig {
        HeatConfig {
            first_round_size: update.first_round_size.unwrap_or(self.first_round_size),
            second_round_qualifiers: update
                .second_round_qualifiers
                .unwrap_or(self.second_round_qualifiers),
            second_round_size: update.second_round_size.unwrap_or(self.second_round_size),
            finalists: update.finalists.unwrap_or(self.finalists),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.first_round_size > 0
            && self.second_round_qualifiers > 0
            && self.second_round_size > 0
            && self.finalists > 0
    }
}

/// Registry entry: a known category together with its round sizing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestCategory {
    pub category: Category,
    pub heat_config: HeatConfig,
}

impl ContestCategory {
    pub fn new(category: Category) -> Self {
        ContestCategory {
            category,
            heat_config: HeatConfig::default(),
        }
    }
}
