use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::errors::ContestError;

use super::ActionTrait;

/// Existing heats are left alone; the new sizing applies from the next
/// generation on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetHeatConfigAction {
    pub category: Category,
    pub update: HeatConfigUpdate,
}

impl ActionTrait for SetHeatConfigAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        let mut category = state.contest_category(&self.category)
            .ok_or_else(|| ContestError::UnknownCategory(self.category.clone()))?
            .clone();

        if self.update.has_zero_field() {
            return Err(ContestError::InvalidHeatConfig.into());
        }
        category.heat_config = category.heat_config.merged(&self.update);

        Ok(EntityGroup::new_with_entities(vec![Entity::ContestCategory(category)]))
    }
}
