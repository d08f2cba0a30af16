use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::errors::ContestError;

use super::ActionTrait;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddCategoryAction {
    pub category: Category,
}

impl ActionTrait for AddCategoryAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        if state.has_category(&self.category) {
            return Err(ContestError::DuplicateCategory(self.category).into());
        }

        Ok(EntityGroup::new_with_entities(vec![
            Entity::ContestCategory(ContestCategory::new(self.category))
        ]))
    }
}
