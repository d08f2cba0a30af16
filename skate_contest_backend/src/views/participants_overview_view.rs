use itertools::Itertools;
use serde::{Serialize, Deserialize};
use skate_contest_entities::prelude::*;

/// Paid and unpaid riders per category, as shown on the admin overview.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantsOverviewView {
    pub categories: Vec<CategoryParticipantsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryParticipantsEntry {
    pub category: Category,
    pub label: String,
    pub paid_count: usize,
    pub unpaid_count: usize,
    pub paid: Vec<ParticipantEntry>,
    pub unpaid: Vec<ParticipantEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParticipantEntry {
    pub uuid: Uuid,
    pub start_number: u32,
    pub name: String,
    pub sponsor: Option<String>,
}

impl From<&Participant> for ParticipantEntry {
    fn from(participant: &Participant) -> Self {
        ParticipantEntry {
            uuid: participant.uuid,
            start_number: participant.start_number,
            name: participant.full_name(),
            sponsor: participant.sponsor().map(|s| s.to_string()),
        }
    }
}

impl ParticipantsOverviewView {
    /// Registry categories come first, in registry order, followed by
    /// categories riders are still enrolled in that are no longer known.
    pub fn load(state: &ContestState) -> Self {
        let categories = state.known_categories()
            .into_iter()
            .chain(state.participants.iter().flat_map(|p| p.categories.iter()))
            .unique()
            .map(|category| {
                let (paid, unpaid): (Vec<_>, Vec<_>) = state.participants.iter()
                    .filter(|p| p.is_enrolled_in(category))
                    .partition(|p| p.has_paid_for(category));

                CategoryParticipantsEntry {
                    category: category.clone(),
                    label: category.label().to_string(),
                    paid_count: paid.len(),
                    unpaid_count: unpaid.len(),
                    paid: paid.into_iter().map(ParticipantEntry::from).collect(),
                    unpaid: unpaid.into_iter().map(ParticipantEntry::from).collect(),
                }
            })
            .collect();

        ParticipantsOverviewView { categories }
    }
}
