//! Live Scoreboard Library
//!
//! This library tracks live matches and their scores, and ranks them into a
//! summary ordered by total score and then by most recent start.
//! It also provides the command-line session driver used by the binary.

pub mod cli;
pub mod config;
pub mod domain;

pub use domain::live_match::{Match, MatchId};
pub use domain::scoreboard::{Scoreboard, ScoreboardError, ScoreboardResult, SharedScoreboard};
pub use domain::team::Team;
