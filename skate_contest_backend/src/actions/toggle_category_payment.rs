use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::errors::ContestError;

use super::ActionTrait;

/// Flips the payment flag of one category. Regenerating the category's
/// heats afterwards is the caller's job, see `Action::follow_up_actions`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleCategoryPaymentAction {
    pub participant_id: Uuid,
    pub category: Category,
}

impl ActionTrait for ToggleCategoryPaymentAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        let mut participant = state.participant(self.participant_id)
            .ok_or(ContestError::UnknownParticipant(self.participant_id))?
            .clone();

        if participant.has_paid_for(&self.category) {
            participant.paid_categories.retain(|c| *c != self.category);
        }
        else {
            if !participant.is_enrolled_in(&self.category) {
                return Err(ContestError::NotEnrolled { participant_id: self.participant_id, category: self.category }.into());
            }
            participant.paid_categories.push(self.category);
        }

        Ok(EntityGroup::new_with_entities(vec![Entity::Participant(participant)]))
    }
}
