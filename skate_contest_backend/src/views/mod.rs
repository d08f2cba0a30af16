pub mod heats_view;
pub mod participant_search;
pub mod participants_overview_view;

use serde::{Serialize, Deserialize};
use skate_contest_entities::prelude::*;

pub use self::heats_view::HeatsView;
pub use self::participant_search::{announcements, search_participants};
pub use self::participants_overview_view::{ParticipantEntry, ParticipantsOverviewView};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(tag = "type")]
pub enum View {
    ParticipantsOverview,
    Heats,
    Announcements,
    ParticipantSearch { term: String },
    PaidParticipants { category: Category },
}

impl View {
    pub fn load_json(&self, state: &ContestState) -> Result<serde_json::Value, anyhow::Error> {
        let value = match self {
            View::ParticipantsOverview => serde_json::to_value(ParticipantsOverviewView::load(state))?,
            View::Heats => serde_json::to_value(HeatsView::load(state))?,
            View::Announcements => serde_json::to_value(announcements(state))?,
            View::ParticipantSearch { term } => serde_json::to_value(search_participants(state, term))?,
            View::PaidParticipants { category } => serde_json::to_value(
                state.paid_participants(category).into_iter().map(ParticipantEntry::from).collect::<Vec<_>>()
            )?,
        };
        Ok(value)
    }
}
