use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::errors::ContestError;

use super::ActionTrait;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetHeatStatusAction {
    pub heat_id: Uuid,
    pub status: HeatStatus,
}

impl ActionTrait for SetHeatStatusAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        let mut heat = state.heat(self.heat_id)
            .ok_or(ContestError::UnknownHeat(self.heat_id))?
            .clone();
        heat.status = self.status;

        Ok(EntityGroup::new_with_entities(vec![Entity::Heat(heat)]))
    }
}
