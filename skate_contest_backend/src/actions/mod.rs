use rand::Rng;
use skate_contest_entities::prelude::*;

use serde::{Serialize, Deserialize};

mod base;
mod add_participant;
mod update_participant;
mod toggle_category_payment;
mod add_category;
mod remove_category;
mod set_heat_config;
mod generate_heats;
mod set_heat_status;
mod add_score;

pub use self::base::ActionTrait;
pub use self::add_participant::AddParticipantAction;
pub use self::update_participant::UpdateParticipantAction;
pub use self::toggle_category_payment::ToggleCategoryPaymentAction;
pub use self::add_category::AddCategoryAction;
pub use self::remove_category::RemoveCategoryAction;
pub use self::set_heat_config::SetHeatConfigAction;
pub use self::generate_heats::GenerateHeatsAction;
pub use self::set_heat_status::SetHeatStatusAction;
pub use self::add_score::AddScoreAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    AddParticipant { action: AddParticipantAction },
    UpdateParticipant { action: UpdateParticipantAction },
    ToggleCategoryPayment { action: ToggleCategoryPaymentAction },
    AddCategory { action: AddCategoryAction },
    RemoveCategory { action: RemoveCategoryAction },
    SetHeatConfig { action: SetHeatConfigAction },
    GenerateHeats { action: GenerateHeatsAction },
    SetHeatStatus { action: SetHeatStatusAction },
    AddScore { action: AddScoreAction },
}

impl Action {
    pub fn execute<R: Rng + ?Sized>(self, state: &ContestState, rng: &mut R) -> Result<EntityGroup, anyhow::Error> {
        match self {
            Action::AddParticipant { action } => action.get_changes(state, rng),
            Action::UpdateParticipant { action } => action.get_changes(state, rng),
            Action::ToggleCategoryPayment { action } => action.get_changes(state, rng),
            Action::AddCategory { action } => action.get_changes(state, rng),
            Action::RemoveCategory { action } => action.get_changes(state, rng),
            Action::SetHeatConfig { action } => action.get_changes(state, rng),
            Action::GenerateHeats { action } => action.get_changes(state, rng),
            Action::SetHeatStatus { action } => action.get_changes(state, rng),
            Action::AddScore { action } => action.get_changes(state, rng),
        }
    }

    pub fn generate_heats(category: Category) -> Action {
        Action::GenerateHeats { action: GenerateHeatsAction { category } }
    }

    /// Actions that have to run once this action has been applied.
    ///
    /// Any change to a participant's payment status redraws the heats of
    /// that category from scratch. This covers explicit toggles as well as
    /// payments revoked because a participant left a category.
    pub fn follow_up_actions(&self, before: &ContestState, after: &ContestState) -> Vec<Action> {
        match self {
            Action::ToggleCategoryPayment { action } => vec![Action::generate_heats(action.category.clone())],
            Action::UpdateParticipant { action } => {
                match (before.participant(action.participant_id), after.participant(action.participant_id)) {
                    (Some(previous), Some(updated)) => previous.revoked_payments(updated)
                        .into_iter()
                        .map(Action::generate_heats)
                        .collect(),
                    _ => vec![],
                }
            },
            _ => vec![],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::AddParticipant { .. } => "AddParticipant",
            Action::UpdateParticipant { .. } => "UpdateParticipant",
            Action::ToggleCategoryPayment { .. } => "ToggleCategoryPayment",
            Action::AddCategory { .. } => "AddCategory",
            Action::RemoveCategory { .. } => "RemoveCategory",
            Action::SetHeatConfig { .. } => "SetHeatConfig",
            Action::GenerateHeats { .. } => "GenerateHeats",
            Action::SetHeatStatus { .. } => "SetHeatStatus",
            Action::AddScore { .. } => "AddScore",
        }
    }
}
