use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::errors::ContestError;

use super::ActionTrait;

/// Removes the category and its heat config together with every heat drawn
/// for it. Enrollments and payments of participants are kept.
///
/// Heats can still appear for a removed category, since toggling a kept
/// payment redraws it. Removing such a category again clears them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveCategoryAction {
    pub category: Category,
}

impl ActionTrait for RemoveCategoryAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        let heats = state.heats_in_category(&self.category);
        let is_registered = state.has_category(&self.category);
        if !is_registered && heats.is_empty() {
            return Err(ContestError::UnknownCategory(self.category).into());
        }

        let mut groups = EntityGroup::new();
        for heat in heats {
            groups.delete(EntityId::Heat(heat.uuid));
        }
        if is_registered {
            groups.delete(EntityId::ContestCategory(self.category));
        }

        Ok(groups)
    }
}
