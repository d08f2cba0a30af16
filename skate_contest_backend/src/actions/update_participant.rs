use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::errors::ContestError;

use super::ActionTrait;

/// Merges `update` into the participant without re-validating it.
/// Payment for categories the participant leaves is revoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateParticipantAction {
    pub participant_id: Uuid,
    pub update: ParticipantUpdate,
}

impl ActionTrait for UpdateParticipantAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        let participant = state.participant(self.participant_id)
            .ok_or(ContestError::UnknownParticipant(self.participant_id))?;

        Ok(EntityGroup::new_with_entities(vec![
            Entity::Participant(participant.merged(self.update))
        ]))
    }
}
