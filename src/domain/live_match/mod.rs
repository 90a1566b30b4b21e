// Match domain module
// Contains the match entity and its identifier value object

#![allow(clippy::module_inception)]

pub mod live_match;
pub mod value_objects;

// Re-export main types for convenience
pub use live_match::Match;
pub use value_objects::MatchId;
