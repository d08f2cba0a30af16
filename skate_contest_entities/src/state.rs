use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    domain::{
        category::Category,
        heat::Heat,
        heat_config::{ContestCategory, HeatConfig},
        participant::Participant,
        scored_run::ScoredRun,
    },
    group::{Entity, EntityGroup, EntityId, EntityState},
};

/// Immutable snapshot of a contest.
///
/// All mutation goes through [`ContestState::apply`], which takes a change
/// group and returns the next snapshot. Participants, categories and heats
/// keep insertion order; updating an existing entity keeps its position.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestState {
    pub participants: Vec<Participant>,
    pub categories: Vec<ContestCategory>,
    pub heats: Vec<Heat>,
    pub scored_runs: Vec<ScoredRun>,
}

fn upsert<T, F>(items: &mut Vec<T>, item: T, is_same: F)
where
    F: Fn(&T, &T) -> bool,
{
    match items.iter().position(|existing| is_same(existing, &item)) {
        Some(idx) => items[idx] = item,
        None => items.push(item),
    }
}

impl ContestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_built_in_categories() -> Self {
        ContestState {
            categories: Category::built_ins()
                .into_iter()
                .map(ContestCategory::new)
                .collect(),
            ..Default::default()
        }
    }

    pub fn apply(&self, group: &EntityGroup) -> ContestState {
        let mut next = self.clone();
        for change in group.changes.iter() {
            next.apply_change(change);
        }
        next
    }

    fn apply_change(&mut self, change: &EntityState) {
        match change {
            EntityState::Exists(entity) => match entity.clone() {
                Entity::Participant(p) => upsert(&mut self.participants, p, |a, b| a.uuid == b.uuid),
                Entity::ContestCategory(c) => {
                    upsert(&mut self.categories, c, |a, b| a.category == b.category)
                }
                Entity::Heat(h) => upsert(&mut self.heats, h, |a, b| a.uuid == b.uuid),
                Entity::ScoredRun(r) => {
                    upsert(&mut self.scored_runs, r, |a, b| a.run_id == b.run_id)
                }
            },
            EntityState::Deleted(id) => match id {
                EntityId::Participant(uuid) => self.participants.retain(|p| p.uuid != *uuid),
                EntityId::ContestCategory(category) => {
                    self.categories.retain(|c| c.category != *category)
                }
                EntityId::Heat(uuid) => self.heats.retain(|h| h.uuid != *uuid),
                EntityId::ScoredRun(uuid) => self.scored_runs.retain(|r| r.run_id != *uuid),
            },
        }
    }

    pub fn participant(&self, uuid: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.uuid == uuid)
    }

    /// Exact, case-sensitive match. If codes ever collide the earliest
    /// registration wins.
    pub fn find_by_access_code(&self, code: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.access_code == code)
    }

    pub fn is_access_code_taken(&self, code: &str) -> bool {
        self.find_by_access_code(code).is_some()
    }

    pub fn next_start_number(&self) -> u32 {
        self.participants
            .iter()
            .map(|p| p.start_number)
            .max()
            .unwrap_or(0)
            + 1
    }

    pub fn has_category(&self, category: &Category) -> bool {
        self.contest_category(category).is_some()
    }

    pub fn contest_category(&self, category: &Category) -> Option<&ContestCategory> {
        self.categories.iter().find(|c| c.category == *category)
    }

    pub fn known_categories(&self) -> Vec<&Category> {
        self.categories.iter().map(|c| &c.category).collect()
    }

    /// Falls back to the default sizing for categories without an entry.
    pub fn heat_config(&self, category: &Category) -> HeatConfig {
        self.contest_category(category)
            .map(|c| c.heat_config)
            .unwrap_or_default()
    }

    /// Participants that may be drawn into heats of `category`, in
    /// registration order.
    pub fn eligible_participants(&self, category: &Category) -> Vec<Uuid> {
        if !self.has_category(category) {
            return vec![];
        }
        self.participants
            .iter()
            .filter(|p| p.is_enrolled_in(category) && p.has_paid_for(category))
            .map(|p| p.uuid)
            .collect()
    }

    pub fn paid_participants(&self, category: &Category) -> Vec<&Participant> {
        self.participants
            .iter()
            .filter(|p| p.has_paid_for(category))
            .collect()
    }

    pub fn heat(&self, uuid: Uuid) -> Option<&Heat> {
        self.heats.iter().find(|h| h.uuid == uuid)
    }

    pub fn heats_in_category(&self, category: &Category) -> Vec<&Heat> {
        self.heats.iter().filter(|h| h.category == *category).collect()
    }

    pub fn scored_run(&self, run_id: Uuid) -> Option<&ScoredRun> {
        self.scored_runs.iter().find(|r| r.run_id == run_id)
    }

    pub fn scored_runs_for(&self, participant_id: Uuid) -> Vec<&ScoredRun> {
        self.scored_runs
            .iter()
            .filter(|r| r.participant_id == participant_id)
            .collect()
    }
}
