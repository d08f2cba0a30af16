use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

use crate::{errors::ContestError, scoring::final_score};

use super::ActionTrait;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddScoreAction {
    pub run_id: Uuid,
    pub participant_id: Uuid,
    pub judge_scores: Vec<JudgeScore>,
}

impl ActionTrait for AddScoreAction {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, _rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        if state.participant(self.participant_id).is_none() {
            return Err(ContestError::UnknownParticipant(self.participant_id).into());
        }
        if state.scored_run(self.run_id).is_some() {
            return Err(ContestError::DuplicateRun(self.run_id).into());
        }

        let final_score = final_score(&self.judge_scores)?;

        let run = ScoredRun {
            run_id: self.run_id,
            participant_id: self.participant_id,
            judge_scores: self.judge_scores,
            final_score,
            timestamp: chrono::offset::Local::now().naive_local(),
        };

        Ok(EntityGroup::new_with_entities(vec![Entity::ScoredRun(run)]))
    }
}
