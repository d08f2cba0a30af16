use rand::Rng;
use skate_contest_entities::prelude::*;

pub trait ActionTrait {
    fn get_changes<R: Rng + ?Sized>(self, state: &ContestState, rng: &mut R) -> Result<EntityGroup, anyhow::Error>;
}
