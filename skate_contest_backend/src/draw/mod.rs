pub mod heats;

pub use heats::{partition_into_heats, take_qualifiers, Bracket, HeatDrawError, HeatGenerator};
