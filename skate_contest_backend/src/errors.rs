use skate_contest_entities::prelude::*;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ContestError {
    #[error("Unknown category {0}")]
    UnknownCategory(Category),
    #[error("Category {0} already exists")]
    DuplicateCategory(Category),
    #[error("Unknown participant {0}")]
    UnknownParticipant(Uuid),
    #[error("Unknown heat {0}")]
    UnknownHeat(Uuid),
    #[error("Participant {participant_id} is not enrolled in {category}")]
    NotEnrolled { participant_id: Uuid, category: Category },
    #[error("Heat sizes must be positive")]
    InvalidHeatConfig,
    #[error("Access code {0} is already in use")]
    DuplicateAccessCode(String),
    #[error("Could not find an unused access code")]
    AccessCodeSpaceExhausted,
    #[error("Run {0} has already been scored")]
    DuplicateRun(Uuid),
}
