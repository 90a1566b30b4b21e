// Scoreboard domain module
// The registry that owns every active match and ranks them on demand

#![allow(clippy::module_inception)]

pub mod errors;
pub mod scoreboard;
pub mod shared;

// Re-export main types for convenience
pub use errors::{ScoreboardError, ScoreboardResult};
pub use scoreboard::Scoreboard;
pub use shared::SharedScoreboard;
