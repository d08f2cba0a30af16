use itertools::Itertools;
use serde::{Serialize, Deserialize};
use skate_contest_entities::prelude::*;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatsView {
    pub categories: Vec<CategoryHeatsEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryHeatsEntry {
    pub category: Category,
    pub label: String,
    pub heats: Vec<HeatEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatEntry {
    pub uuid: Uuid,
    pub round: HeatRound,
    /// 1-based position within the round.
    pub index: usize,
    pub status: HeatStatus,
    pub participants: Vec<HeatParticipantEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeatParticipantEntry {
    pub uuid: Uuid,
    pub name: String,
    pub sponsor: Option<String>,
}

impl HeatsView {
    pub fn load(state: &ContestState) -> Self {
        let categories = state.heats.iter()
            .map(|h| &h.category)
            .unique()
            .map(|category| {
                let heats = state.heats_in_category(category)
                    .into_iter()
                    .sorted_by_key(|h| h.round)
                    .group_by(|h| h.round)
                    .into_iter()
                    .flat_map(|(_, round_heats)| {
                        round_heats.enumerate().map(|(idx, heat)| Self::heat_entry(state, heat, idx + 1)).collect_vec()
                    })
                    .collect();

                CategoryHeatsEntry {
                    category: category.clone(),
                    label: category.label().to_string(),
                    heats,
                }
            })
            .collect();

        HeatsView { categories }
    }

    fn heat_entry(state: &ContestState, heat: &Heat, index: usize) -> HeatEntry {
        HeatEntry {
            uuid: heat.uuid,
            round: heat.round,
            index,
            status: heat.status,
            participants: heat.participants.iter()
                .filter_map(|id| state.participant(*id))
                .map(|p| HeatParticipantEntry {
                    uuid: p.uuid,
                    name: format!("{}, {}", p.last_name, p.first_name),
                    sponsor: p.sponsor().map(|s| s.to_string()),
                })
                .collect(),
        }
    }
}
