use std::collections::VecDeque;

use rand::{rngs::StdRng, Rng, SeedableRng};
use skate_contest_entities::prelude::*;

use crate::actions::Action;

/// Owns the current contest snapshot and the randomness source used for
/// draws, ids and access codes.
pub struct ContestStore<R: Rng = StdRng> {
    state: ContestState,
    rng: R,
}

impl ContestStore<StdRng> {
    pub fn new(state: ContestState) -> Self {
        Self::new_with_rng(state, StdRng::from_entropy())
    }

    pub fn new_with_seed(state: ContestState, seed: u64) -> Self {
        Self::new_with_rng(state, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ContestStore<R> {
    pub fn new_with_rng(state: ContestState, rng: R) -> Self {
        ContestStore { state, rng }
    }

    pub fn state(&self) -> &ContestState {
        &self.state
    }

    /// Runs `action` and every follow-up it triggers against a working
    /// snapshot. The store only moves on if all of them succeed; the
    /// returned group contains the combined changes.
    pub fn execute(&mut self, action: Action) -> Result<EntityGroup, anyhow::Error> {
        let mut pending = VecDeque::from([action]);
        let mut state = self.state.clone();
        let mut changes = EntityGroup::new();

        while let Some(action) = pending.pop_front() {
            let name = action.name();
            let group = action.clone().execute(&state, &mut self.rng).map_err(|e| {
                tracing::warn!("{} failed: {}", name, e);
                e
            })?;
            let next = state.apply(&group);

            let follow_ups = action.follow_up_actions(&state, &next);
            tracing::debug!("{} produced {} changes, {} follow-up actions", name, group.changes.len(), follow_ups.len());
            pending.extend(follow_ups);

            state = next;
            changes.merge(group);
        }

        self.state = state;
        Ok(changes)
    }
}
