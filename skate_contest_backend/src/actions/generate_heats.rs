use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::draw::HeatGenerator;

use super::ActionTrait;

/// Draws a fresh bracket for the category and discards the previous one.
///
/// Every call reshuffles, so running it twice gives two different
/// brackets. Categories missing from the registry still get the (empty)
/// final heat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateHeatsAction {
    pub category: Category,
}

impl ActionTrait for GenerateHeatsAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        let generator = HeatGenerator::new(state.heat_config(&self.category));
        let eligible = state.eligible_participants(&self.category);

        let bracket = generator.generate(&self.category, eligible, rng)?;

        let mut groups = EntityGroup::new();
        for heat in state.heats_in_category(&self.category) {
            groups.delete(EntityId::Heat(heat.uuid));
        }
        for heat in bracket.into_heats() {
            groups.add(Entity::Heat(heat));
        }

        Ok(groups)
    }
}
