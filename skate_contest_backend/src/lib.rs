pub mod access_code;
pub mod actions;
pub mod draw;
pub mod errors;
pub mod registration;
pub mod scoring;
pub mod store;
pub mod views;

pub use actions::*;
pub use errors::ContestError;
pub use store::ContestStore;
pub use views::View;
