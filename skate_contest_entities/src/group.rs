use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    category::Category, heat::Heat, heat_config::ContestCategory, participant::Participant,
    scored_run::ScoredRun,
};

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
#[serde(tag = "type")]
pub enum Entity {
    Participant(Participant),
    ContestCategory(ContestCategory),
    Heat(Heat),
    ScoredRun(ScoredRun),
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Hash)]
#[serde(tag = "type", content = "id")]
pub enum EntityId {
    Participant(Uuid),
    ContestCategory(Category),
    Heat(Uuid),
    ScoredRun(Uuid),
}

impl Entity {
    pub fn get_id(&self) -> EntityId {
        match self {
            Entity::Participant(p) => EntityId::Participant(p.uuid),
            Entity::ContestCategory(c) => EntityId::ContestCategory(c.category.clone()),
            Entity::Heat(h) => EntityId::Heat(h.uuid),
            Entity::ScoredRun(r) => EntityId::ScoredRun(r.run_id),
        }
    }

    pub fn get_name(&self) -> &'static str {
        match self {
            Entity::Participant(_) => "Participant",
            Entity::ContestCategory(_) => "ContestCategory",
            Entity::Heat(_) => "Heat",
            Entity::ScoredRun(_) => "ScoredRun",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub enum EntityState {
    Exists(Entity),
    Deleted(EntityId),
}

impl EntityState {
    pub fn get_id(&self) -> EntityId {
        match self {
            EntityState::Exists(e) => e.get_id(),
            EntityState::Deleted(id) => id.clone(),
        }
    }
}

/// An ordered set of changes computed by an action.
///
/// Groups are applied to a `ContestState` as a whole, so an action either
/// produces a complete group or fails before anything changes.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct EntityGroup {
    pub changes: Vec<EntityState>,
}

impl EntityGroup {
    pub fn new() -> Self {
        EntityGroup { changes: vec![] }
    }

    pub fn new_with_entities(entities: Vec<Entity>) -> Self {
        let mut group = Self::new();
        entities.into_iter().for_each(|e| group.add(e));
        group
    }

    pub fn add(&mut self, e: Entity) {
        self.changes.push(EntityState::Exists(e));
    }

    pub fn delete(&mut self, id: EntityId) {
        self.changes.push(EntityState::Deleted(id));
    }

    pub fn merge(&mut self, other: EntityGroup) {
        self.changes.extend(other.changes);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn get_entity_ids(&self) -> Vec<EntityId> {
        self.changes.iter().map(|c| c.get_id()).collect()
    }

    pub fn participants(&self) -> Vec<&Participant> {
        self.existing()
            .filter_map(|e| match e {
                Entity::Participant(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    pub fn categories(&self) -> Vec<&ContestCategory> {
        self.existing()
            .filter_map(|e| match e {
                Entity::ContestCategory(c) => Some(c),
                _ => None,
            })
            .collect()
    }

    pub fn heats(&self) -> Vec<&Heat> {
        self.existing()
            .filter_map(|e| match e {
                Entity::Heat(h) => Some(h),
                _ => None,
            })
            .collect()
    }

    pub fn scored_runs(&self) -> Vec<&ScoredRun> {
        self.existing()
            .filter_map(|e| match e {
                Entity::ScoredRun(r) => Some(r),
                _ => None,
            })
            .collect()
    }

    pub fn deletions(&self) -> Vec<&EntityId> {
        self.changes
            .iter()
            .filter_map(|c| match c {
                EntityState::Deleted(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    fn existing(&self) -> impl Iterator<Item = &Entity> {
        self.changes.iter().filter_map(|c| match c {
            EntityState::Exists(e) => Some(e),
            EntityState::Deleted(_) => None,
        })
    }
}
