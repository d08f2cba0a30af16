pub mod domain;
pub mod group;
pub mod mock;
pub mod prelude;
pub mod state;
pub mod utilities;

pub use group::*;
pub use state::ContestState;
