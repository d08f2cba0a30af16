pub use crate::domain::category::{BuiltInCategory, Category};
pub use crate::domain::heat::{Heat, HeatRound, HeatStatus};
pub use crate::domain::heat_config::{ContestCategory, HeatConfig, HeatConfigUpdate};
pub use crate::domain::participant::{Address, Participant, ParticipantUpdate};
pub use crate::domain::scored_run::{JudgeScore, ScoredRun};
pub use crate::group::{Entity, EntityGroup, EntityId, EntityState};
pub use crate::state::ContestState;
pub use uuid::Uuid;
